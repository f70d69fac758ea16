//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks the text area's size and the top-left
//! cell currently on screen, and scrolls to keep the cursor visible.

use std::ops::Range;

/// The visible window onto the buffer.
///
/// # Example
///
/// ```
/// use femto::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 10);
/// vp.scroll(99, 0);
/// assert_eq!(vp.row_offset(), 90);
/// vp.scroll(0, 0);
/// assert_eq!(vp.row_offset(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    row_offset: usize,
    col_offset: usize,
}

impl Viewport {
    /// Create a viewport over a text area of `width` columns and `height`
    /// rows, scrolled to the top-left corner.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Text area width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Text area height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// First buffer row on screen.
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// First rendered column on screen.
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Buffer rows that fall inside the viewport.
    pub fn visible_rows(&self, total_lines: usize) -> Range<usize> {
        let start = self.row_offset.min(total_lines);
        let end = (self.row_offset + self.height as usize).min(total_lines);
        start..end
    }

    /// Adjust the offsets so the cursor at (`row`, rendered column
    /// `render_col`) is on screen. Running it again without moving the
    /// cursor changes nothing.
    pub fn scroll(&mut self, row: usize, render_col: usize) {
        self.row_offset = follow(self.row_offset, row, self.height as usize);
        self.col_offset = follow(self.col_offset, render_col, self.width as usize);
    }

    /// Put `row` at the top of the screen.
    pub const fn reveal(&mut self, row: usize) {
        self.row_offset = row;
    }

    /// Jump back to previously saved offsets.
    pub const fn restore(&mut self, row_offset: usize, col_offset: usize) {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
    }

    /// Resize the text area. Offsets are fixed up by the next `scroll`.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

/// Scroll `offset` along one axis so that `pos` lands in `[offset, offset + span)`.
const fn follow(offset: usize, pos: usize, span: usize) -> usize {
    let span = if span == 0 { 1 } else { span };
    if pos < offset {
        pos
    } else if pos >= offset + span {
        pos + 1 - span
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_origin() {
        let vp = Viewport::new(80, 24);
        assert_eq!(vp.row_offset(), 0);
        assert_eq!(vp.col_offset(), 0);
    }

    #[test]
    fn test_scroll_down_past_bottom() {
        let mut vp = Viewport::new(80, 10);
        vp.scroll(99, 0);
        assert_eq!(vp.row_offset(), 90);
    }

    #[test]
    fn test_scroll_back_to_top() {
        let mut vp = Viewport::new(80, 10);
        vp.scroll(99, 0);
        vp.scroll(0, 0);
        assert_eq!(vp.row_offset(), 0);
    }

    #[test]
    fn test_scroll_within_screen_is_noop() {
        let mut vp = Viewport::new(80, 10);
        vp.scroll(50, 0);
        vp.scroll(45, 0);
        assert_eq!(vp.row_offset(), 41);
    }

    #[test]
    fn test_horizontal_scroll() {
        let mut vp = Viewport::new(20, 10);
        vp.scroll(0, 30);
        assert_eq!(vp.col_offset(), 11);
        vp.scroll(0, 5);
        assert_eq!(vp.col_offset(), 5);
    }

    #[test]
    fn test_reveal_puts_row_at_top() {
        let mut vp = Viewport::new(80, 10);
        vp.reveal(42);
        vp.scroll(42, 0);
        assert_eq!(vp.row_offset(), 42);
    }

    #[test]
    fn test_visible_rows() {
        let mut vp = Viewport::new(80, 10);
        assert_eq!(vp.visible_rows(100), 0..10);
        assert_eq!(vp.visible_rows(4), 0..4);
        vp.scroll(99, 0);
        assert_eq!(vp.visible_rows(100), 90..100);
    }

    #[test]
    fn test_zero_height_still_tracks_cursor() {
        let mut vp = Viewport::new(0, 0);
        vp.scroll(7, 3);
        assert_eq!(vp.row_offset(), 7);
        assert_eq!(vp.col_offset(), 3);
    }

    #[test]
    fn test_restore() {
        let mut vp = Viewport::new(80, 10);
        vp.scroll(99, 0);
        vp.restore(3, 4);
        assert_eq!((vp.row_offset(), vp.col_offset()), (3, 4));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cursor_always_visible_after_scroll(
                width in 1..200u16,
                height in 1..100u16,
                start_row in 0..10000usize,
                start_col in 0..1000usize,
                row in 0..10000usize,
                col in 0..1000usize,
            ) {
                let mut vp = Viewport::new(width, height);
                vp.restore(start_row, start_col);
                vp.scroll(row, col);
                prop_assert!(vp.row_offset() <= row);
                prop_assert!(row < vp.row_offset() + height as usize);
                prop_assert!(vp.col_offset() <= col);
                prop_assert!(col < vp.col_offset() + width as usize);
            }

            #[test]
            fn scroll_is_idempotent(
                width in 1..200u16,
                height in 1..100u16,
                start_row in 0..10000usize,
                row in 0..10000usize,
                col in 0..1000usize,
            ) {
                let mut vp = Viewport::new(width, height);
                vp.restore(start_row, 0);
                vp.scroll(row, col);
                let once = vp.clone();
                vp.scroll(row, col);
                prop_assert_eq!(vp, once);
            }
        }
    }
}
