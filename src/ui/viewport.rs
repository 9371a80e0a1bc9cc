//! Viewport management for scrolling.
//!
//! Each pane owns a [`Viewport`] tracking its visible slice of lines.
//! The scroll synchronizer reads these to compute pane metrics; the
//! renderer reads them to pick which lines to draw.

use std::ops::Range;

/// The visible portion of one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Range of visible lines, clamped to the document bounds.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_lines);
        self.offset..end
    }

    /// Scroll progress as a percentage (0-100).
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    /// Put `line` at the top of the viewport, clamped to the bounds.
    pub fn go_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_offset());
    }

    /// Scroll so `line` sits `margin` rows below the viewport top.
    pub fn focus_line(&mut self, line: usize, margin: usize) {
        self.go_to_line(line.saturating_sub(margin));
    }

    /// Keep `line` inside the visible range, scrolling minimally.
    pub fn scroll_into_view(&mut self, line: usize) {
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + self.height as usize {
            self.offset = line + 1 - self.height as usize;
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total line count after a re-render.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    pub const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}
