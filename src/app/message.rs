// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{player_pane, playlist_pane};
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Playlist(playlist_pane::Message),
    Player(player_pane::Message),
    /// Space was pressed somewhere in the window; toggles playback while a
    /// session is mounted.
    SpacePressed,
    /// Periodic clock tick driving playback position.
    Tick(Instant),
    /// The async window-handle lookup for a fullscreen request finished.
    FullscreenResolved {
        window: Option<window::Id>,
        enter: bool,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a playlist manifest to load instead of the built-in
    /// seed.
    pub playlist_path: Option<String>,
    /// Optional autoplay override; falls back to the config file, then the
    /// built-in default.
    pub autoplay: Option<bool>,
}
