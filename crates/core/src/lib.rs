//! Core geometry module - pure, deterministic, and testable
//!
//! This module contains the 3D half of the pipeline: vector math, the fixed
//! scene and projection down to grid coordinates. It has **zero dependencies**
//! on terminals or I/O, making it:
//!
//! - **Deterministic**: the same frame number always produces the same geometry
//! - **Testable**: every transform is a pure function
//! - **Portable**: usable by any rasterizer, not just the terminal one
//!
//! # Module Structure
//!
//! - [`math`]: dot/cross products, normalization, Rodrigues rotation, translation
//! - [`projection`]: perspective division, grid mapping, aspect-ratio fix
//! - [`scene`]: cube and wedge shapes, motion paths, per-frame object instances
//!
//! # Example
//!
//! ```
//! use tui_wireframe_core::projection::{map_to_grid, project_perspective};
//! use tui_wireframe_core::Scene;
//!
//! let scene = Scene::demo();
//! let first = scene.instances_at(0).next().unwrap();
//! let seg = first.segments().next().unwrap();
//!
//! let start = map_to_grid(project_perspective(seg.start), 80, 24);
//! assert!(start.y >= 0);
//! ```

pub mod math;
pub mod projection;
pub mod scene;

pub use tui_wireframe_types as types;

pub use math::{normalize, rotate, translate, SegmentExt};
pub use projection::{fix_aspect_ratio, map_to_grid, project_perspective};
pub use scene::{rotation_angle, Motion, ObjectInstance, ObjectSpec, Scene, Shape, ShapeKind};
