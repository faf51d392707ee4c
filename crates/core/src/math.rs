//! Vector math - normalization, axis-angle rotation and translation.
//!
//! All functions are pure. Rotation uses Rodrigues' formula about an
//! arbitrary axis through a pivot point.

use crate::types::{Point3, Segment3};

pub fn dot(a: Point3, b: Point3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn cross(a: Point3, b: Point3) -> Point3 {
    Point3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

pub fn length(v: Point3) -> f64 {
    dot(v, v).sqrt()
}

pub fn distance(a: Point3, b: Point3) -> f64 {
    length(a - b)
}

/// Scale `v` to unit length.
///
/// `v` must be non-zero; a zero vector yields NaN components.
pub fn normalize(v: Point3) -> Point3 {
    let len = length(v);
    debug_assert!(len != 0.0, "cannot normalize a zero-length vector");
    Point3::new(v.x / len, v.y / len, v.z / len)
}

/// Rotate `point` by `angle_deg` degrees about `axis` passing through `pivot`.
///
/// `axis` does not need to be normalized but must be non-zero.
///
/// # Examples
///
/// ```
/// use tui_wireframe_core::math::rotate;
/// use tui_wireframe_types::Point3;
///
/// let p = rotate(Point3::new(1.0, 0.0, 0.0), 90.0, Point3::new(0.0, 0.0, 2.0), Point3::ZERO);
/// assert!((p.x - 0.0).abs() < 1e-9);
/// assert!((p.y - 1.0).abs() < 1e-9);
/// ```
pub fn rotate(point: Point3, angle_deg: f64, axis: Point3, pivot: Point3) -> Point3 {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let k = normalize(axis);
    let p = point - pivot;

    let rotated = p * cos + cross(k, p) * sin + k * (dot(k, p) * (1.0 - cos));
    rotated + pivot
}

/// Translate `point` by `offset`.
pub fn translate(point: Point3, offset: Point3) -> Point3 {
    point + offset
}

/// Segment-level transforms.
pub trait SegmentExt {
    fn rotated(self, angle_deg: f64, axis: Point3, pivot: Point3) -> Self;
    fn translated(self, offset: Point3) -> Self;
}

impl SegmentExt for Segment3 {
    fn rotated(self, angle_deg: f64, axis: Point3, pivot: Point3) -> Self {
        Segment3::new(
            rotate(self.start, angle_deg, axis, pivot),
            rotate(self.end, angle_deg, axis, pivot),
        )
    }

    fn translated(self, offset: Point3) -> Self {
        Segment3::new(translate(self.start, offset), translate(self.end, offset))
    }
}
