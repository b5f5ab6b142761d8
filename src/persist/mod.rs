//! Save/load of configured job lists.

use crate::foundation::error::{BlastError, BlastResult};
use crate::job::model::Job;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Persisted document format version.
pub const DOCUMENT_VERSION: &str = "1";

/// A saved set of playblast jobs.
///
/// Round-tripping through JSON reproduces an equivalent descriptor list,
/// including resolved output paths and all capture/encode flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Format version tag.
    pub version: String,
    /// Configured jobs, in panel order.
    pub playblasts: Vec<Job>,
}

impl Document {
    /// Wrap `jobs` in a current-version document.
    pub fn new(playblasts: Vec<Job>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_owned(),
            playblasts,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> BlastResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BlastError::serde(e.to_string()))
    }

    /// Parse and version-check a JSON document.
    pub fn from_json(json: &str) -> BlastResult<Self> {
        let doc: Document =
            serde_json::from_str(json).map_err(|e| BlastError::serde(e.to_string()))?;
        if doc.version != DOCUMENT_VERSION {
            return Err(BlastError::serde(format!(
                "unsupported document version '{}'",
                doc.version
            )));
        }
        Ok(doc)
    }

    /// Write the document to `path`.
    pub fn save(&self, path: &Path) -> BlastResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write document '{}'", path.display()))?;
        Ok(())
    }

    /// Read a document from `path`.
    pub fn load(path: &Path) -> BlastResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read document '{}'", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persist/document.rs"]
mod tests;
