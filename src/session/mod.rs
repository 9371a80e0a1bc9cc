//! Session-wide editing state and the remote collaborators.
//!
//! The dirty flag and the action endpoints live in one explicit state
//! struct with accessors, owned by the model rather than any ambient
//! globals. The dirty flag rises on every buffer change and is cleared
//! only by a successful save; it is consulted once, at navigation-away
//! time, to decide whether to warn about unsaved changes.

mod remote;

pub use remote::{
    FileRemote, PublishResponse, Remote, RemoteError, SavePayload, SaveResponse,
};

/// Action endpoints for the current draft, updated from each save
/// response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub edit_url: String,
    pub publish_url: String,
    pub delete_url: String,
}

/// Per-session editing state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    dirty: bool,
    endpoints: Endpoints,
}

impl Session {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            dirty: false,
            endpoints,
        }
    }

    /// Raise the dirty flag (a buffer change happened).
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the dirty flag (a save succeeded).
    pub const fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The unload guard: whether navigating away should warn first.
    pub const fn should_warn_on_exit(&self) -> bool {
        self.dirty
    }

    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Adopt the endpoints returned by a save response.
    pub fn adopt_endpoints(&mut self, response: &SaveResponse) {
        self.endpoints = Endpoints {
            edit_url: response.edit_url.clone(),
            publish_url: response.publish_url.clone(),
            delete_url: response.delete_url.clone(),
        };
    }
}
