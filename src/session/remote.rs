//! The remote side of save, publish, and delete.
//!
//! The editor never performs these itself: it hands the structured
//! fields plus the raw source to a [`Remote`] collaborator and reacts to
//! the outcome. Failures surface as a notification and leave all local
//! state untouched; there is no retry machinery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::document::ParsedDocument;

/// Everything a save submits: the four structured fields and the raw
/// source they were derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavePayload {
    pub title: String,
    pub punchline: String,
    pub description: String,
    pub content: String,
    pub raw_content: String,
}

impl SavePayload {
    pub fn new(parsed: &ParsedDocument, raw: &str) -> Self {
        Self {
            title: parsed.title.clone(),
            punchline: parsed.punchline.clone(),
            description: parsed.description.clone(),
            content: parsed.content.clone(),
            raw_content: raw.to_string(),
        }
    }
}

/// A successful save returns the refreshed action endpoints for the
/// draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveResponse {
    pub edit_url: String,
    pub publish_url: String,
    pub delete_url: String,
}

/// A successful publish returns where the published document lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishResponse {
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("remote rejected the request: {0}")]
    Rejected(String),
}

/// External collaborator handling persistence and lifecycle actions.
pub trait Remote {
    fn save(&mut self, payload: &SavePayload) -> Result<SaveResponse, RemoteError>;
    fn publish(&mut self, publish_url: &str) -> Result<PublishResponse, RemoteError>;
    fn delete(&mut self, delete_url: &str) -> Result<(), RemoteError>;
}

/// File-backed remote: saves write the raw source to the document path
/// and the structured payload to a JSON sidecar next to it.
#[derive(Debug, Clone)]
pub struct FileRemote {
    path: PathBuf,
}

impl FileRemote {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sidecar_path(&self) -> PathBuf {
        let mut sidecar = self.path.clone();
        sidecar.set_extension("json");
        sidecar
    }
}

impl Remote for FileRemote {
    fn save(&mut self, payload: &SavePayload) -> Result<SaveResponse, RemoteError> {
        fs::write(&self.path, &payload.raw_content)?;
        let sidecar = self.sidecar_path();
        fs::write(&sidecar, serde_json::to_string_pretty(payload)?)?;
        tracing::info!(path = %self.path.display(), "saved document");
        let edit_url = self.path.display().to_string();
        Ok(SaveResponse {
            publish_url: format!("{edit_url}#publish"),
            delete_url: format!("{edit_url}#delete"),
            edit_url,
        })
    }

    fn publish(&mut self, publish_url: &str) -> Result<PublishResponse, RemoteError> {
        if publish_url.is_empty() {
            return Err(RemoteError::Rejected("document was never saved".to_string()));
        }
        tracing::info!(url = publish_url, "published document");
        Ok(PublishResponse {
            url: publish_url.trim_end_matches("#publish").to_string(),
        })
    }

    fn delete(&mut self, delete_url: &str) -> Result<(), RemoteError> {
        if delete_url.is_empty() {
            return Err(RemoteError::Rejected("document was never saved".to_string()));
        }
        fs::remove_file(&self.path)?;
        let sidecar = self.sidecar_path();
        if sidecar.exists() {
            fs::remove_file(&sidecar)?;
        }
        tracing::info!(path = %self.path.display(), "deleted document");
        Ok(())
    }
}
