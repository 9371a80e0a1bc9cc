//! Keeping the two panes consistent: pipeline throttling and scroll
//! position mapping.

pub mod scheduler;
pub mod scroll;

pub use scheduler::{DEFAULT_WINDOW_MS, UpdateThrottle};
pub use scroll::{PaneMetrics, ScrollSync, follower_offset, scroll_ratio};
