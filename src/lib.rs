// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Markpair
//!
//! A split-pane terminal markdown editor with live preview.
//!
//! The left pane holds the raw text buffer, the single source of truth.
//! The right pane shows the derived article preview and is kept in sync
//! through a throttled parse/render pipeline.
//!
//! ## Architecture
//!
//! Markpair uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! Timer-driven behavior (the update throttle, the section-focus settle
//! delay) lives in the event loop so `update` stays pure and tests can
//! drive time deterministically.
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`document`]: Field extraction from raw markdown
//! - [`preview`]: Projection of parsed fields onto the preview pane
//! - [`editor`]: Raw text buffer and fold state
//! - [`sync`]: Update throttling and scroll synchronization
//! - [`section`]: Deep-linked section focus
//! - [`session`]: Dirty tracking and remote collaborators
//! - [`ui`]: Terminal UI rendering

pub mod app;
pub mod document;
pub mod editor;
pub mod preview;
pub mod section;
pub mod session;
pub mod sync;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::document::ParsedDocument;
    pub use crate::preview::PreviewView;
    pub use crate::ui::viewport::Viewport;
}
