// SPDX-License-Identifier: MPL-2.0
//! Ordered playlist state with an identity-following current entry.

use super::VideoEntry;
use crate::error::PlaylistError;

/// The ordered list of entries plus an optional reference to the entry
/// currently loaded into the player.
///
/// The current reference is stored as an entry id, not an index, so it
/// follows its entry across reorders. Entries are never removed within this
/// application, which keeps the invariant that a set current id always names
/// a present entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    entries: Vec<VideoEntry>,
    current_id: Option<String>,
}

impl Playlist {
    /// Creates a playlist with no current entry.
    pub fn new(entries: Vec<VideoEntry>) -> Self {
        Self {
            entries,
            current_id: None,
        }
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the playlist has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at the given position, if in bounds.
    pub fn get(&self, index: usize) -> Option<&VideoEntry> {
        self.entries.get(index)
    }

    /// Moves the entry at `from` to position `to`, shifting the entries in
    /// between.
    ///
    /// `from == to` is a valid no-op. An out-of-bounds index is rejected
    /// without touching the sequence, so a failed reorder can never leave a
    /// partial splice behind. The current entry is unaffected either way
    /// since it is tracked by id.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), PlaylistError> {
        let len = self.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(PlaylistError::IndexOutOfBounds { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Marks the entry with the given id as current.
    ///
    /// An unknown id is rejected and the current reference is left unchanged.
    pub fn select_current(&mut self, id: &str) -> Result<(), PlaylistError> {
        if !self.entries.iter().any(|entry| entry.id() == id) {
            return Err(PlaylistError::UnknownEntry(id.to_string()));
        }
        self.current_id = Some(id.to_string());
        Ok(())
    }

    /// The current entry, if one is selected.
    pub fn current(&self) -> Option<&VideoEntry> {
        let id = self.current_id.as_deref()?;
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// The current entry's id, if one is selected.
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    /// The position of the entry with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}
