//! Proportional scroll mapping between the two panes.
//!
//! Only the editor pane drives: the preview follows so a reader's
//! relative progress through both representations stays aligned.
//! Preview scroll events move the preview alone and never feed back
//! into the editor.

/// Scroll metrics of one pane, in rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneMetrics {
    /// Current scroll offset.
    pub scroll_top: f64,
    /// Total scrollable height.
    pub scroll_height: f64,
    /// Visible height.
    pub viewport_height: f64,
}

impl PaneMetrics {
    // Pane sizes are far below the 2^52 precision boundary.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(scroll_top: usize, scroll_height: usize, viewport_height: usize) -> Self {
        Self {
            scroll_top: scroll_top as f64,
            scroll_height: scroll_height as f64,
            viewport_height: viewport_height as f64,
        }
    }

    /// Maximum scroll offset of this pane.
    fn max_offset(self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }
}

/// Relative progress through the driving pane, in `[0, 1]`.
///
/// A pane with no scrollable range reports zero.
pub fn scroll_ratio(driver: PaneMetrics) -> f64 {
    let range = driver.max_offset();
    if range <= 0.0 {
        return 0.0;
    }
    (driver.scroll_top / range).clamp(0.0, 1.0)
}

/// Scroll offset the follower pane should take to match the driver,
/// clamped to `[0, follower_max]`.
pub fn follower_offset(driver: PaneMetrics, follower: PaneMetrics) -> f64 {
    (scroll_ratio(driver) * follower.max_offset()).clamp(0.0, follower.max_offset())
}

/// One-way editor → preview scroll synchronizer.
///
/// Disabled entirely while a section target is active: the two-pane
/// free-scroll relationship only applies to the full-document view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSync {
    enabled: bool,
}

impl ScrollSync {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Follower offset for a driver movement, rounded to a row.
    ///
    /// `None` when synchronization is disabled.
    // The offset is clamped to [0, follower_max], so the cast stays in range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn follow(self, driver: PaneMetrics, follower: PaneMetrics) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        Some(follower_offset(driver, follower).round() as usize)
    }
}
