//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Theming and colors

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::{line_number_width, preview_content_width, render, split_panes};

pub const PANE_LEFT_PADDING: u16 = 2;
pub const EDITOR_WIDTH_PERCENT: u16 = 50;
pub const PREVIEW_WIDTH_PERCENT: u16 = 50;
