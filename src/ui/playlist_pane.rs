// SPDX-License-Identifier: MPL-2.0
//! Playlist pane: the reorderable entry list.
//!
//! Each row is wrapped in a mouse area so a press starts a drag gesture,
//! hovering marks the row as the pending drop target, and a release drops
//! onto it. A release on the pane background (between rows) cancels the
//! gesture; the inner row areas capture their release first, so the
//! background message only fires when no row was hit.

use crate::playlist::{DragSession, Playlist};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, mouse_area, scrollable, text, Column};
use iced::{Element, Length};

/// Messages emitted by the playlist rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Mouse pressed on a row: a drag gesture starts there.
    RowPressed(usize),
    /// Cursor entered a row while a gesture may be live.
    RowEntered(usize),
    /// Cursor left a row.
    RowExited(usize),
    /// Mouse released on a row: the gesture drops onto it.
    RowReleased(usize),
    /// Mouse released on the pane background, off every row.
    BackgroundReleased,
}

/// Renders the playlist: a header strip plus one row per entry.
pub fn view<'a>(playlist: &'a Playlist, drag: Option<&DragSession>) -> Element<'a, Message> {
    let header = container(text("Playlist").size(typography::HEADING))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::playlist_header);

    let mut rows: Column<'a, Message> = Column::new().spacing(spacing::XXS);
    for (index, entry) in playlist.entries().iter().enumerate() {
        let selected = playlist.current_id() == Some(entry.id());
        let dragging = drag.is_some_and(|session| session.source() == index);
        let drop_target = drag
            .is_some_and(|session| session.pending_target() == Some(index) && !dragging);

        let row = container(text(entry.title()).size(typography::BODY))
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::playlist_row(selected, drop_target, dragging));

        rows = rows.push(
            mouse_area(row)
                .on_press(Message::RowPressed(index))
                .on_enter(Message::RowEntered(index))
                .on_exit(Message::RowExited(index))
                .on_release(Message::RowReleased(index))
                .interaction(iced::mouse::Interaction::Grab),
        );
    }

    let list = scrollable(rows.padding(spacing::XXS)).height(Length::Fill);

    let pane = column![header, list].spacing(spacing::XXS);

    mouse_area(pane)
        .on_release(Message::BackgroundReleased)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::VideoEntry;

    fn playlist() -> Playlist {
        Playlist::new(vec![
            VideoEntry::new("1", "A", "a.mp4"),
            VideoEntry::new("2", "B", "b.mp4"),
        ])
    }

    #[test]
    fn view_renders_without_a_gesture() {
        let playlist = playlist();
        let _element = view(&playlist, None);
    }

    #[test]
    fn view_renders_mid_gesture() {
        let playlist = playlist();
        let mut session = DragSession::begin(0);
        session.hover(1);
        let _element = view(&playlist, Some(&session));
    }

    #[test]
    fn view_renders_an_empty_playlist() {
        let playlist = Playlist::new(Vec::new());
        let _element = view(&playlist, None);
    }

    #[test]
    fn messages_are_copyable_values() {
        let msg = Message::RowPressed(1);
        let copy = msg;
        assert_eq!(msg, copy);
    }
}
