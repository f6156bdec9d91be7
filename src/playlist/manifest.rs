// SPDX-License-Identifier: MPL-2.0
//! Playlist manifest loading.
//!
//! The initial playlist content is a seed collaborator, not part of the
//! playlist contract, so it is injectable: a TOML manifest of `[[entry]]`
//! tables can be passed on the command line or via `settings.toml`, and a
//! built-in seed is used otherwise.
//!
//! Manifest format:
//!
//! ```toml
//! [[entry]]
//! id = "1"
//! title = "Introduction"
//! source = "media/01-introduction.mp4"
//! duration_secs = 512.0
//! ```

use super::VideoEntry;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "entry", default)]
    entries: Vec<VideoEntry>,
}

/// Loads entries from a TOML manifest file.
///
/// Duplicate ids are rejected: the playlist tracks the current entry by id,
/// so ids must be unique for that reference to be unambiguous.
pub fn load(path: &Path) -> Result<Vec<VideoEntry>> {
    let content = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&content)?;

    let mut seen = HashSet::new();
    for entry in &manifest.entries {
        if !seen.insert(entry.id().to_string()) {
            return Err(Error::Config(format!(
                "duplicate entry id {:?} in {}",
                entry.id(),
                path.display()
            )));
        }
    }

    Ok(manifest.entries)
}

/// The built-in seed used when no manifest is configured.
pub fn builtin_seed() -> Vec<VideoEntry> {
    vec![
        VideoEntry::new("1", "Introduction", "media/01-introduction.mp4").with_duration(512.0),
        VideoEntry::new("2", "Hello World", "media/02-hello-world.mp4").with_duration(468.0),
        VideoEntry::new("3", "Folder Structure", "media/03-folder-structure.mp4")
            .with_duration(547.0),
        VideoEntry::new("4", "Components", "media/04-components.mp4").with_duration(611.0),
        VideoEntry::new("5", "Functional Components", "media/05-functional-components.mp4")
            .with_duration(703.0),
        VideoEntry::new("6", "Class Components", "media/06-class-components.mp4")
            .with_duration(689.0),
    ]
}
