//! Rasterizer: paints projected segments and text into a [`FrameBuffer`].
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::projection::{fix_aspect_ratio, map_to_grid, project_perspective};
use crate::fb::FrameBuffer;
use crate::types::{GridCoord, GridSegment, Segment3};

/// Draw a single character; silently clipped.
pub fn draw_char(fb: &mut FrameBuffer, ch: u8, pos: GridCoord) {
    fb.set(pos, ch);
}

/// Draw `text` left to right starting at `pos`, clipping per character.
///
/// Non-ASCII characters are drawn as `?`.
pub fn draw_text(fb: &mut FrameBuffer, text: &str, pos: GridCoord) {
    for (i, ch) in text.chars().enumerate() {
        let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
        fb.put(i64::from(pos.x) + i as i64, i64::from(pos.y), byte);
    }
}

/// Draw a straight line between two grid cells.
///
/// Both x coordinates are doubled first to undo the halving in
/// [`map_to_grid`]. The line steps `max(|dx|, |dy|)` times and includes both
/// endpoints; each coordinate is truncated toward zero.
pub fn draw_line(fb: &mut FrameBuffer, ch: u8, start: GridCoord, end: GridCoord) {
    let (x0, y0) = (i64::from(start.x) * 2, i64::from(start.y));
    let (x1, y1) = (i64::from(end.x) * 2, i64::from(end.y));
    let (dx, dy) = (x1 - x0, y1 - y0);
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        fb.put(x0, y0, ch);
        return;
    }

    let window = step_window(x0, dx, steps, fb.width()).and_then(|(xlo, xhi)| {
        step_window(y0, dy, steps, fb.height()).map(|(ylo, yhi)| (xlo.max(ylo), xhi.min(yhi)))
    });
    let Some((lo, hi)) = window else {
        return;
    };

    for i in lo..=hi {
        fb.put(lerp_trunc(x0, dx, i, steps), lerp_trunc(y0, dy, i, steps), ch);
    }
}

/// `trunc(origin + i * delta / steps)`, exact.
#[inline(always)]
fn lerp_trunc(origin: i64, delta: i64, i: i64, steps: i64) -> i64 {
    let steps = i128::from(steps);
    let num = i128::from(origin) * steps + i128::from(i) * i128::from(delta);
    (num / steps) as i64
}

/// Step range in `0..=steps` where the coordinate may fall inside `[0, limit)`.
///
/// Conservative by a step on each side; `FrameBuffer::put` does the exact check.
fn step_window(origin: i64, delta: i64, steps: i64, limit: u16) -> Option<(i64, i64)> {
    let limit = i64::from(limit);
    if delta == 0 {
        return (0..limit).contains(&origin).then_some((0, steps));
    }

    let per_unit = steps as f64 / delta as f64;
    let a = (-1 - origin) as f64 * per_unit;
    let b = (limit - origin) as f64 * per_unit;
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };

    let lo = (lo.floor() as i64).saturating_sub(1).max(0);
    let hi = (hi.ceil() as i64).saturating_add(1).min(steps);
    (lo <= hi).then_some((lo, hi))
}

/// Project a scene segment onto the buffer's grid.
pub fn project_segment(seg: Segment3, grid_width: u16, grid_height: u16) -> GridSegment {
    let start = map_to_grid(project_perspective(seg.start), grid_width, grid_height);
    let end = map_to_grid(project_perspective(seg.end), grid_width, grid_height);
    fix_aspect_ratio(GridSegment::new(start, end), grid_width, grid_height)
}

/// Project and draw a scene segment.
pub fn draw_segment(fb: &mut FrameBuffer, ch: u8, seg: Segment3) {
    let projected = project_segment(seg, fb.width(), fb.height());
    draw_line(fb, ch, projected.start, projected.end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Viewport;

    fn canvas(width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        fb.reset(Viewport::new(width, height)).unwrap();
        fb
    }

    fn at(fb: &FrameBuffer, x: i32, y: i32) -> Option<u8> {
        fb.get(GridCoord::new(x, y))
    }

    #[test]
    fn lerp_trunc_hits_endpoints_exactly() {
        for (origin, delta, steps) in [(0, 3, 7), (-5, 13, 13), (4, -9, 11), (2, 0, 5)] {
            assert_eq!(lerp_trunc(origin, delta, 0, steps), origin);
            assert_eq!(lerp_trunc(origin, delta, steps, steps), origin + delta);
        }
    }

    #[test]
    fn lerp_trunc_truncates_toward_zero() {
        // -3 + 1 * 1 / 2 = -2.5 -> -2
        assert_eq!(lerp_trunc(-3, 1, 1, 2), -2);
        // 3 - 1 / 2 = 2.5 -> 2
        assert_eq!(lerp_trunc(3, -1, 1, 2), 2);
    }

    #[test]
    fn horizontal_line_doubles_x() {
        let mut fb = canvas(20, 5);
        draw_line(&mut fb, b'#', GridCoord::new(1, 1), GridCoord::new(4, 1));
        for x in 2..=8 {
            assert_eq!(at(&fb, x, 1), Some(b'#'), "x={x}");
        }
        assert_eq!(at(&fb, 1, 1), Some(b' '));
        assert_eq!(at(&fb, 9, 1), Some(b' '));
        assert_eq!(fb.ink(), 7);
    }

    #[test]
    fn vertical_line_covers_every_row() {
        let mut fb = canvas(10, 10);
        draw_line(&mut fb, b'|', GridCoord::new(2, 0), GridCoord::new(2, 7));
        for y in 0..=7 {
            assert_eq!(at(&fb, 4, y), Some(b'|'));
        }
    }

    #[test]
    fn degenerate_line_draws_one_point() {
        let mut fb = canvas(10, 10);
        draw_line(&mut fb, b'o', GridCoord::new(3, 3), GridCoord::new(3, 3));
        assert_eq!(at(&fb, 6, 3), Some(b'o'));
        assert_eq!(fb.ink(), 1);
    }

    #[test]
    fn reversed_line_matches_endpoints() {
        let mut fb = canvas(30, 12);
        draw_line(&mut fb, b'*', GridCoord::new(10, 9), GridCoord::new(1, 2));
        assert_eq!(at(&fb, 20, 9), Some(b'*'));
        assert_eq!(at(&fb, 2, 2), Some(b'*'));
    }

    #[test]
    fn far_offscreen_line_is_clipped_cheaply() {
        let mut fb = canvas(40, 12);
        // Spans billions of steps; only the on-screen part is visited.
        draw_line(
            &mut fb,
            b'x',
            GridCoord::new(i32::MIN, 5),
            GridCoord::new(i32::MAX, 5),
        );
        for x in 0..40 {
            assert_eq!(at(&fb, x, 5), Some(b'x'));
        }
    }

    #[test]
    fn steep_line_lands_exactly_on_both_endpoints() {
        // x runs 0..=6 after doubling over 9 steps; x_i = trunc(6 * i / 9).
        let mut fb = canvas(20, 12);
        draw_line(&mut fb, b'#', GridCoord::new(0, 0), GridCoord::new(3, 9));
        let expected = [0, 0, 1, 2, 2, 3, 4, 4, 5, 6];
        for (y, &x) in expected.iter().enumerate() {
            let row = fb.rows().nth(y).unwrap();
            let hits: Vec<usize> = (0..row.len()).filter(|&i| row[i] == b'#').collect();
            assert_eq!(hits, vec![x], "row {y}");
        }
        assert_eq!(fb.ink(), 10);
    }

    /// Every step of the line, with no window narrowing.
    fn draw_line_unclipped(fb: &mut FrameBuffer, ch: u8, start: GridCoord, end: GridCoord) {
        let (x0, y0) = (i64::from(start.x) * 2, i64::from(start.y));
        let (dx, dy) = (i64::from(end.x) * 2 - x0, i64::from(end.y) - y0);
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            fb.put(x0, y0, ch);
            return;
        }
        for i in 0..=steps {
            fb.put(lerp_trunc(x0, dx, i, steps), lerp_trunc(y0, dy, i, steps), ch);
        }
    }

    #[test]
    fn clipping_keeps_partly_offscreen_diagonals_intact() {
        let mut state: u32 = 0x2545_f491;
        let mut next = |lo: i32, hi: i32| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            lo + (state >> 8) as i32 % (hi - lo)
        };

        for _ in 0..4000 {
            let start = GridCoord::new(next(-120, 160), next(-40, 64));
            let end = GridCoord::new(next(-120, 160), next(-40, 64));

            let mut clipped = canvas(79, 24);
            let mut full = canvas(79, 24);
            draw_line(&mut clipped, b'#', start, end);
            draw_line_unclipped(&mut full, b'#', start, end);
            assert_eq!(clipped, full, "{start:?} -> {end:?}");
        }
    }

    #[test]
    fn fully_offscreen_line_writes_nothing() {
        let mut fb = canvas(40, 12);
        draw_line(&mut fb, b'x', GridCoord::new(-50, -3), GridCoord::new(50, -3));
        draw_line(&mut fb, b'x', GridCoord::new(100, 0), GridCoord::new(200, 10));
        assert_eq!(fb, canvas(40, 12));
    }

    #[test]
    fn text_is_clipped_per_character() {
        let mut fb = canvas(6, 4);
        draw_text(&mut fb, "hello!", GridCoord::new(2, 1));
        assert_eq!(fb.rows().nth(1), Some(&b"  hell"[..]));
    }

    #[test]
    fn text_replaces_non_ascii() {
        let mut fb = canvas(6, 3);
        draw_text(&mut fb, "añb", GridCoord::new(0, 0));
        assert_eq!(fb.rows().next(), Some(&b"a?b   "[..]));
    }

    #[test]
    fn zero_depth_endpoint_maps_to_grid_center() {
        let seg = Segment3::new(
            crate::types::Point3::new(3.0, 3.0, 0.0),
            crate::types::Point3::new(0.0, 0.0, 2.0),
        );
        let projected = project_segment(seg, 80, 24);
        assert_eq!(projected.start, GridCoord::new(20, 12));
        assert_eq!(projected.end, GridCoord::new(20, 12));
    }
}
