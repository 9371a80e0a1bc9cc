//! The preview pane: a derived, replace-wholesale projection of the
//! parsed document.
//!
//! Rendering is split from the terminal UI so the projection and its
//! invariants (placeholders, link retargeting, section focus) are
//! testable without a rendering surface.

mod render;
mod types;

pub use render::{render, retarget_links};
pub use types::{
    InlineSpan, InlineStyle, LineType, LinkDisposition, LinkRef, Placeholder, PreviewLine,
    PreviewView,
};
