// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions are declarative: Iced diffs them on every update, so
//! registration and teardown are paired with the state that wants them and
//! nothing leaks across session changes.

use super::Message;
use crate::config::PLAYBACK_TICK_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Page-wide space-key listener, active while a playback session is mounted.
///
/// Listens to raw window events so the toggle works regardless of which
/// widget has focus. Keyed on session presence only: play/pause flips must
/// not recreate the listener, they only change what the resulting message
/// does.
pub fn space_key(session_mounted: bool) -> Subscription<Message> {
    if !session_mounted {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Space),
            ..
        }) => Some(Message::SpacePressed),
        _ => None,
    })
}

/// Periodic tick that advances the playback clock, active only while
/// playing.
pub fn playback_tick(playing: bool) -> Subscription<Message> {
    if playing {
        time::every(Duration::from_millis(PLAYBACK_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
