//! Frame buffer for terminal rendering.
//!
//! A flat byte buffer of ASCII cells, one row per terminal line, each row
//! followed by a [`ROW_TERMINATOR`]. The last [`RESERVED_ROWS`] rows exist in
//! storage (so draws there are harmless) but are never handed to the display.

use thiserror::Error;

use crate::types::{GridCoord, BLANK, RESERVED_ROWS, ROW_TERMINATOR};

/// Drawable grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Viewport for a terminal of `columns` x `rows`.
    ///
    /// The last column is left unused so a full row never triggers a wrap.
    pub fn from_terminal_size(columns: u16, rows: u16) -> Self {
        Self {
            width: columns.saturating_sub(1),
            height: rows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("terminal too small: {width}x{height}, need at least {min_height} rows")]
    TooSmall {
        width: u16,
        height: u16,
        min_height: u16,
    },
}

/// Bytes needed to display a `width` x `height` grid.
///
/// `(width + 1) * (height - 2) + 1`: every displayed row plus its terminator,
/// plus one trailing terminator. Returns `None` when `height < 2`.
///
/// # Examples
///
/// ```
/// use tui_wireframe_term::fb::measure_required_size;
///
/// assert_eq!(measure_required_size(79, 24), Some(80 * 22 + 1));
/// assert_eq!(measure_required_size(79, 1), None);
/// ```
pub fn measure_required_size(width: u16, height: u16) -> Option<usize> {
    let rows = height.checked_sub(RESERVED_ROWS)?;
    Some((usize::from(width) + 1) * usize::from(rows) + 1)
}

/// Flat character buffer sized to the current viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<u8>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    fn stride(&self) -> usize {
        usize::from(self.width) + 1
    }

    /// Rows handed to the display.
    pub fn visible_rows(&self) -> u16 {
        self.height.saturating_sub(RESERVED_ROWS)
    }

    /// Re-initialize the buffer for a new frame.
    ///
    /// Storage is only resized when the viewport changes. On a degenerate
    /// viewport the buffer is emptied and [`FrameError::TooSmall`] returned.
    pub fn reset(&mut self, viewport: Viewport) -> Result<(), FrameError> {
        if measure_required_size(viewport.width, viewport.height).is_none() {
            self.width = 0;
            self.height = 0;
            self.cells.clear();
            return Err(FrameError::TooSmall {
                width: viewport.width,
                height: viewport.height,
                min_height: RESERVED_ROWS,
            });
        }

        if self.viewport() != viewport || self.cells.is_empty() {
            self.width = viewport.width;
            self.height = viewport.height;
            let len = self.stride() * usize::from(self.height);
            self.cells.resize(len, BLANK);
        }

        let w = usize::from(self.width);
        for row in self.cells.chunks_exact_mut(w + 1) {
            row[..w].fill(BLANK);
            row[w] = ROW_TERMINATOR;
        }
        Ok(())
    }

    #[inline(always)]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.stride() + x as usize)
    }

    /// Write `ch` at `(x, y)`. Out-of-bounds writes are dropped.
    ///
    /// Returns whether the cell was written.
    pub fn put(&mut self, x: i64, y: i64, ch: u8) -> bool {
        debug_assert!(ch.is_ascii(), "frame buffer cells are ASCII");
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, pos: GridCoord, ch: u8) -> bool {
        self.put(i64::from(pos.x), i64::from(pos.y), ch)
    }

    pub fn get(&self, pos: GridCoord) -> Option<u8> {
        self.idx(i64::from(pos.x), i64::from(pos.y))
            .map(|i| self.cells[i])
    }

    /// The displayed part of the buffer: visible rows with their terminators.
    ///
    /// Its length is `measure_required_size(width, height) - 1`.
    pub fn render(&self) -> &[u8] {
        let len = self.stride() * usize::from(self.visible_rows());
        &self.cells[..len.min(self.cells.len())]
    }

    /// Visible rows without terminators.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let w = usize::from(self.width);
        self.render().chunks_exact(w + 1).map(move |row| &row[..w])
    }

    /// Count of non-blank visible cells.
    pub fn ink(&self) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&c| c != BLANK).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_guards_small_heights() {
        assert_eq!(measure_required_size(10, 0), None);
        assert_eq!(measure_required_size(10, 1), None);
        assert_eq!(measure_required_size(10, 2), Some(1));
        assert_eq!(measure_required_size(10, 3), Some(12));
        assert_eq!(measure_required_size(0, 5), Some(4));
    }

    #[test]
    fn viewport_leaves_last_column_free() {
        assert_eq!(Viewport::from_terminal_size(80, 24), Viewport::new(79, 24));
        assert_eq!(Viewport::from_terminal_size(0, 24), Viewport::new(0, 24));
    }

    #[test]
    fn reset_fills_blanks_and_terminates_rows() {
        let mut fb = FrameBuffer::new();
        fb.reset(Viewport::new(3, 4)).unwrap();
        assert_eq!(fb.render(), b"   \n   \n");
        assert_eq!(fb.render().len(), measure_required_size(3, 4).unwrap() - 1);
    }

    #[test]
    fn reset_clears_previous_frame() {
        let mut fb = FrameBuffer::new();
        let vp = Viewport::new(4, 4);
        fb.reset(vp).unwrap();
        assert!(fb.set(GridCoord::new(1, 1), b'x'));
        assert_eq!(fb.ink(), 1);
        fb.reset(vp).unwrap();
        assert_eq!(fb.ink(), 0);
    }

    #[test]
    fn reset_rejects_degenerate_height() {
        let mut fb = FrameBuffer::new();
        fb.reset(Viewport::new(10, 5)).unwrap();
        let err = fb.reset(Viewport::new(10, 1)).unwrap_err();
        assert!(matches!(err, FrameError::TooSmall { height: 1, .. }));
        assert!(fb.render().is_empty());
        assert!(!fb.set(GridCoord::new(0, 0), b'x'));
    }

    #[test]
    fn resize_changes_layout() {
        let mut fb = FrameBuffer::new();
        fb.reset(Viewport::new(2, 3)).unwrap();
        assert_eq!(fb.render(), b"  \n");
        fb.reset(Viewport::new(5, 4)).unwrap();
        assert_eq!(fb.render(), b"     \n     \n");
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new();
        fb.reset(Viewport::new(4, 4)).unwrap();
        let before = fb.clone();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i64::MAX, 2)] {
            assert!(!fb.put(x, y, b'x'));
        }
        assert_eq!(fb, before);
    }

    #[test]
    fn guard_rows_are_writable_but_hidden() {
        let mut fb = FrameBuffer::new();
        fb.reset(Viewport::new(3, 4)).unwrap();
        assert!(fb.set(GridCoord::new(0, 3), b'x'));
        assert_eq!(fb.get(GridCoord::new(0, 3)), Some(b'x'));
        assert_eq!(fb.ink(), 0);
    }

    #[test]
    fn rows_strip_terminators() {
        let mut fb = FrameBuffer::new();
        fb.reset(Viewport::new(3, 4)).unwrap();
        fb.set(GridCoord::new(2, 1), b'#');
        let rows: Vec<&[u8]> = fb.rows().collect();
        assert_eq!(rows, vec![&b"   "[..], &b"  #"[..]]);
    }
}
