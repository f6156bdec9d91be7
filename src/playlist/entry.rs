// SPDX-License-Identifier: MPL-2.0
//! A single playlist entry.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One video in the playlist: identifier, display title, and source path.
///
/// Entries are immutable once created; within this application they are only
/// reordered, never edited. The optional duration is metadata supplied by the
/// seed or manifest, since the player does not probe media files itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoEntry {
    id: String,
    title: String,
    source: PathBuf,
    #[serde(default)]
    duration_secs: Option<f64>,
}

impl VideoEntry {
    /// Creates an entry with no duration metadata.
    pub fn new(id: impl Into<String>, title: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            source: source.into(),
            duration_secs: None,
        }
    }

    /// Attaches duration metadata, consuming the entry.
    #[must_use]
    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = Some(secs);
        self
    }

    /// The unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The media source path, resolved by whatever serves the files.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Total duration in seconds, if the seed or manifest declared one.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }
}
