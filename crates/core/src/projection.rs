//! Projection - scene space to character grid.
//!
//! Three steps, applied per segment endpoint:
//! 1. [`project_perspective`]: divide x/y by depth
//! 2. [`map_to_grid`]: normalized space to integer grid cells
//! 3. [`fix_aspect_ratio`]: per-segment correction for non-square grids
//!
//! The x axis is halved in [`map_to_grid`]; the rasterizer doubles it back
//! when stepping, since character cells are about twice as tall as wide.

use crate::types::{GridCoord, GridSegment, Point2, Point3};

/// Perspective division by depth.
///
/// A point at `z == 0` maps to the origin rather than infinity.
pub fn project_perspective(point: Point3) -> Point2 {
    if point.z == 0.0 {
        return Point2::ORIGIN;
    }
    Point2::new(point.x / point.z, point.y / point.z)
}

/// Map a normalized point onto a `grid_width` x `grid_height` grid.
///
/// The input range is unclamped; values far outside `[-1, 1]` saturate at the
/// `i32` limits and are clipped later by the rasterizer.
///
/// # Examples
///
/// ```
/// use tui_wireframe_core::projection::map_to_grid;
/// use tui_wireframe_types::{GridCoord, Point2};
///
/// assert_eq!(map_to_grid(Point2::new(-1.0, -1.0), 80, 24), GridCoord::new(0, 0));
/// assert_eq!(map_to_grid(Point2::new(1.0, 1.0), 80, 24), GridCoord::new(40, 24));
/// ```
pub fn map_to_grid(point: Point2, grid_width: u16, grid_height: u16) -> GridCoord {
    // `as` truncates toward zero and saturates, so NaN/inf cannot panic here.
    let x = ((point.x + 1.0) / 2.0 * f64::from(grid_width)) as i32 / 2;
    let y = ((point.y + 1.0) / 2.0 * f64::from(grid_height)) as i32;
    GridCoord::new(x, y)
}

/// Correct a grid segment for a non-square grid.
///
/// The ratio is the integer quotient `min / max` of the grid dimensions, so
/// only square grids (ratio 1) reach the division and those are left as is.
/// A zero dimension or a zero ratio returns the segment unchanged.
pub fn fix_aspect_ratio(seg: GridSegment, grid_width: u16, grid_height: u16) -> GridSegment {
    if grid_width == 0 || grid_height == 0 {
        return seg;
    }

    let ratio = i32::from(grid_width.min(grid_height)) / i32::from(grid_width.max(grid_height));
    if ratio == 0 {
        return seg;
    }

    let scale = |c: GridCoord| GridCoord::new(c.x / ratio, c.y / ratio);
    GridSegment::new(scale(seg.start), scale(seg.end))
}
