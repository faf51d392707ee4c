//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are plain `Copy` data with no external dependencies, so they can
//! be used anywhere in the pipeline (math, projection, rasterization, driver).
//!
//! # Coordinate Spaces
//!
//! | Type | Space | Components |
//! |------|-------|------------|
//! | [`Point3`] | scene space (z grows away from the viewer) | `f64` |
//! | [`Point2`] | normalized projection space, roughly `[-1, 1]` but unclamped | `f64` |
//! | [`GridCoord`] | character grid, origin top-left | `i32` |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 40 | Default frame rate |
//! | `DEGREES_PER_FRAME` | 6.0 | Rotation advance per frame (one turn per 60 frames) |
//!
//! # Examples
//!
//! ```
//! use tui_wireframe_types::{Point3, Segment3};
//!
//! let seg = Segment3::new(Point3::new(-1.0, -1.0, 3.0), Point3::new(1.0, 1.0, 3.0));
//! assert_eq!(seg.start.z, 3.0);
//! assert_eq!(Point3::ZERO + Point3::new(1.0, 2.0, 3.0), Point3::new(1.0, 2.0, 3.0));
//! ```

use std::ops::{Add, Mul, Sub};

/// Default target frame rate.
pub const TARGET_FPS: u32 = 40;

/// Rotation advance per frame in degrees.
pub const DEGREES_PER_FRAME: f64 = 6.0;

/// Character used for blank cells.
pub const BLANK: u8 = b' ';

/// Character written at the end of every buffer row.
pub const ROW_TERMINATOR: u8 = b'\n';

/// Rows at the bottom of the grid that are never displayed.
///
/// One is a guard row; the other keeps the caption clear of the last line.
pub const RESERVED_ROWS: u16 = 2;

/// Default wireframe character.
pub const DEFAULT_DRAW_CHAR: char = 'a';

/// Default overlay caption.
pub const DEFAULT_CAPTION: &str = "by @davidSimek";

/// A point or vector in 3D scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Point3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

/// A point in normalized 2D projection space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A character-grid cell address.
///
/// Coordinates are signed: projected points routinely land off-grid and are
/// clipped at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A line segment in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridSegment {
    pub start: GridCoord,
    pub end: GridCoord,
}

impl GridSegment {
    pub const fn new(start: GridCoord, end: GridCoord) -> Self {
        Self { start, end }
    }
}

/// A line segment in scene space.
///
/// Shapes hold these immutably; per-frame transforms produce new copies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment3 {
    pub start: Point3,
    pub end: Point3,
}

impl Segment3 {
    pub const fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}
