//! Scene model - immutable shapes and their per-frame instances.
//!
//! A [`Shape`] is a fixed list of segments built once from a vertex pool and
//! an edge list. An [`ObjectSpec`] describes how one copy of a shape moves:
//! its rotation axis, pivot and a [`Motion`] path. Every frame each object is
//! resolved into an [`ObjectInstance`] that yields transformed segments.

use crate::math::SegmentExt;
use crate::types::{Point3, Segment3, DEGREES_PER_FRAME};

/// Shape identifier within a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Wedge,
}

/// An immutable wireframe shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    vertex_count: usize,
    segments: Vec<Segment3>,
}

impl Shape {
    /// Build a shape from a vertex pool and index pairs into it.
    ///
    /// Only called with the static tables below, whose indices are in range.
    fn from_edges(kind: ShapeKind, vertices: &[Point3], edges: &[(usize, usize)]) -> Self {
        let segments = edges
            .iter()
            .map(|&(a, b)| Segment3::new(vertices[a], vertices[b]))
            .collect();
        Self {
            kind,
            vertex_count: vertices.len(),
            segments,
        }
    }

    /// Cube with its front face at z=3 and back face at z=5.
    pub fn cube() -> Self {
        const VERTICES: [Point3; 8] = [
            // front
            Point3::new(-1.0, -1.0, 3.0),
            Point3::new(-1.0, 1.0, 3.0),
            Point3::new(1.0, 1.0, 3.0),
            Point3::new(1.0, -1.0, 3.0),
            // back
            Point3::new(-1.0, -1.0, 5.0),
            Point3::new(-1.0, 1.0, 5.0),
            Point3::new(1.0, 1.0, 5.0),
            Point3::new(1.0, -1.0, 5.0),
        ];
        const EDGES: [(usize, usize); 12] = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        Self::from_edges(ShapeKind::Cube, &VERTICES, &EDGES)
    }

    /// Four-vertex wedge: a top edge and a bottom edge at right angles.
    pub fn wedge() -> Self {
        const VERTICES: [Point3; 4] = [
            Point3::new(-1.0, 1.0, 0.0),  // top left
            Point3::new(1.0, 1.0, 0.0),   // top right
            Point3::new(0.0, -1.0, -1.0), // bottom back
            Point3::new(0.0, -1.0, 1.0),  // bottom front
        ];
        const EDGES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        Self::from_edges(ShapeKind::Wedge, &VERTICES, &EDGES)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn segments(&self) -> &[Segment3] {
        &self.segments
    }
}

/// Translation path as a function of the frame counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Circle in the xy plane while the depth swings with the unshifted frame.
    ///
    /// `(cos((f+phase)/period)*radius, sin((f+phase)/period)*radius, cos(f/period)*depth_swing + depth_center)`
    Orbit {
        radius: f64,
        period: f64,
        phase: f64,
        depth_swing: f64,
        depth_center: f64,
    },
    /// Move along z only.
    ///
    /// `(0, 0, sin(f/period)*amplitude + center)`
    Bob {
        period: f64,
        amplitude: f64,
        center: f64,
    },
}

impl Motion {
    pub fn offset_at(&self, frame: u64) -> Point3 {
        let f = frame as f64;
        match *self {
            Motion::Orbit {
                radius,
                period,
                phase,
                depth_swing,
                depth_center,
            } => {
                let t = (f + phase) / period;
                Point3::new(
                    t.cos() * radius,
                    t.sin() * radius,
                    (f / period).cos() * depth_swing + depth_center,
                )
            }
            Motion::Bob {
                period,
                amplitude,
                center,
            } => Point3::new(0.0, 0.0, (f / period).sin() * amplitude + center),
        }
    }
}

/// Rotation angle in degrees for a given frame.
pub fn rotation_angle(frame: u64) -> f64 {
    frame as f64 * DEGREES_PER_FRAME
}

/// How one copy of a shape is animated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectSpec {
    pub shape: ShapeKind,
    pub axis: Point3,
    pub pivot: Point3,
    pub motion: Motion,
}

/// One object resolved for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct ObjectInstance<'a> {
    pub shape: &'a Shape,
    pub axis: Point3,
    pub angle_deg: f64,
    pub offset: Point3,
    pub pivot: Point3,
}

impl<'a> ObjectInstance<'a> {
    /// Segments rotated about the pivot, then translated.
    pub fn segments(&self) -> impl Iterator<Item = Segment3> + 'a {
        let Self {
            shape,
            axis,
            angle_deg,
            offset,
            pivot,
        } = *self;
        shape
            .segments()
            .iter()
            .map(move |seg| seg.rotated(angle_deg, axis, pivot).translated(offset))
    }
}

/// Fixed set of shapes and animated objects.
#[derive(Debug, Clone)]
pub struct Scene {
    cube: Shape,
    wedge: Shape,
    objects: Vec<ObjectSpec>,
}

impl Scene {
    pub fn new(objects: Vec<ObjectSpec>) -> Self {
        Self {
            cube: Shape::cube(),
            wedge: Shape::wedge(),
            objects,
        }
    }

    /// Two orbiting cubes and a bobbing wedge.
    pub fn demo() -> Self {
        let cube_pivot = Point3::new(0.0, 0.0, 4.0);
        let orbit = |phase| Motion::Orbit {
            radius: 4.0,
            period: 20.0,
            phase,
            depth_swing: 3.0,
            depth_center: 3.0,
        };

        Self::new(vec![
            ObjectSpec {
                shape: ShapeKind::Cube,
                axis: Point3::new(0.0, 0.4, 1.0),
                pivot: cube_pivot,
                motion: orbit(0.0),
            },
            ObjectSpec {
                shape: ShapeKind::Cube,
                axis: Point3::new(0.0, 1.0, 1.0),
                pivot: cube_pivot,
                motion: orbit(80.0),
            },
            ObjectSpec {
                shape: ShapeKind::Wedge,
                axis: Point3::new(0.0, 1.0, 3.0),
                pivot: Point3::new(0.5, 0.5, 3.0),
                motion: Motion::Bob {
                    period: 60.0,
                    amplitude: 10.0,
                    center: 6.0,
                },
            },
        ])
    }

    pub fn shape(&self, kind: ShapeKind) -> &Shape {
        match kind {
            ShapeKind::Cube => &self.cube,
            ShapeKind::Wedge => &self.wedge,
        }
    }

    pub fn objects(&self) -> &[ObjectSpec] {
        &self.objects
    }

    /// Resolve every object for `frame`, in declaration order.
    pub fn instances_at(&self, frame: u64) -> impl Iterator<Item = ObjectInstance<'_>> {
        let angle_deg = rotation_angle(frame);
        self.objects.iter().map(move |object| ObjectInstance {
            shape: self.shape(object.shape),
            axis: object.axis,
            angle_deg,
            offset: object.motion.offset_at(frame),
            pivot: object.pivot,
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::demo()
    }
}
