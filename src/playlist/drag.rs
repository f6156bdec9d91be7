// SPDX-License-Identifier: MPL-2.0
//! Drag-reorder gesture state.
//!
//! The gesture is tracked as an explicit value object owned by the
//! application state rather than as ambient transfer data: press on a row
//! begins a session, hovering rows records the pending drop target, and
//! releasing resolves the session into an outcome.

/// The transient association between a drag-start row and the pending drop
/// target.
///
/// Only one session exists at a time. Beginning a new session while another
/// is live replaces it (last press wins), which also covers the case of a
/// release that never reached any row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    source: usize,
    hovered: Option<usize>,
}

/// What a completed gesture asks the playlist to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Press and release on the same row: the user clicked it.
    Select(usize),
    /// The row was dropped elsewhere: move it.
    Move { from: usize, to: usize },
}

impl DragSession {
    /// Begins a session for the row at `source`.
    #[must_use]
    pub fn begin(source: usize) -> Self {
        Self {
            source,
            hovered: None,
        }
    }

    /// The row the gesture started on.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// The row currently hovered as a drop target, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<usize> {
        self.hovered
    }

    /// Records `index` as the pending drop target.
    pub fn hover(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Clears the pending drop target (cursor left the row).
    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// Resolves the gesture against the row it was released on.
    ///
    /// Releasing on the source row is a click, which doubles as the valid
    /// no-op reorder of an index onto itself.
    #[must_use]
    pub fn resolve(self, target: usize) -> DragOutcome {
        if target == self.source {
            DragOutcome::Select(target)
        } else {
            DragOutcome::Move {
                from: self.source,
                to: target,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_records_the_source_row() {
        let session = DragSession::begin(2);
        assert_eq!(session.source(), 2);
        assert!(session.pending_target().is_none());
    }

    #[test]
    fn hover_tracks_the_pending_target() {
        let mut session = DragSession::begin(0);
        session.hover(3);
        assert_eq!(session.pending_target(), Some(3));

        session.clear_hover();
        assert!(session.pending_target().is_none());
    }

    #[test]
    fn release_on_source_row_is_a_click() {
        let session = DragSession::begin(1);
        assert_eq!(session.resolve(1), DragOutcome::Select(1));
    }

    #[test]
    fn release_elsewhere_is_a_move() {
        let mut session = DragSession::begin(0);
        session.hover(2);
        assert_eq!(session.resolve(2), DragOutcome::Move { from: 0, to: 2 });
    }

    #[test]
    fn a_new_session_replaces_the_old_one() {
        // Last press wins; the session value is simply overwritten.
        let mut session = DragSession::begin(0);
        session.hover(4);
        session = DragSession::begin(3);
        assert_eq!(session.source(), 3);
        assert!(session.pending_target().is_none());
    }
}
