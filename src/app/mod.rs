//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Remote calls and timer-driven behavior (the update throttle, the
//! section-focus settle delay) live in the event loop, keeping `update`
//! pure and deterministic.

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, PaneFocus, RemoteAction, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::section::SectionTarget;
use crate::sync::DEFAULT_WINDOW_MS;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    section: Option<SectionTarget>,
    window_ms: u64,
}

impl App {
    /// Create a new application for the given file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            section: None,
            window_ms: DEFAULT_WINDOW_MS,
        }
    }

    /// Open the view focused on one section.
    #[must_use]
    pub const fn with_section(mut self, section: Option<SectionTarget>) -> Self {
        self.section = section;
        self
    }

    /// Override the pipeline throttle window.
    #[must_use]
    pub const fn with_window_ms(mut self, window_ms: u64) -> Self {
        self.window_ms = window_ms;
        self
    }
}

#[cfg(test)]
mod tests;
