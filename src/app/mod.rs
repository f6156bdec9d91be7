// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the playlist and the
//! player.
//!
//! The `App` struct owns the playlist, the optional playback session, and
//! the in-flight drag gesture, and translates component messages into the
//! mutations and side effects (fullscreen requests, clock ticks) they ask
//! for. All policy around gesture resolution and session mounting lives
//! here so it is easy to audit user-facing behavior.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::playlist::{manifest, DragOutcome, DragSession, Playlist, VideoEntry};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{player_pane, playlist_pane};
use crate::video_player::PlayerSession;
use iced::widget::{column, container, row, text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Root Iced application state bridging the playlist and the player.
#[derive(Debug)]
pub struct App {
    playlist: Playlist,
    /// The mounted playback session, if an entry is current.
    session: Option<PlayerSession>,
    /// The in-flight drag gesture, if any.
    drag: Option<DragSession>,
    /// Whether newly selected entries start playing immediately.
    autoplay: bool,
    fullscreen: bool,
    /// Wall time of the last playback tick, for elapsed-time deltas.
    last_tick: Option<Instant>,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load config: {}", err);
            config::Config::default()
        });

        let autoplay = flags
            .autoplay
            .or(config.autoplay)
            .unwrap_or(config::DEFAULT_AUTOPLAY);

        let manifest_path = flags.playlist_path.map(PathBuf::from).or(config.playlist);
        let entries = match &manifest_path {
            Some(path) => match manifest::load(path) {
                Ok(entries) if !entries.is_empty() => entries,
                Ok(_) => {
                    eprintln!(
                        "Playlist manifest {} has no entries, using built-in seed",
                        path.display()
                    );
                    manifest::builtin_seed()
                }
                Err(err) => {
                    eprintln!("Failed to load playlist manifest: {}", err);
                    manifest::builtin_seed()
                }
            },
            None => manifest::builtin_seed(),
        };

        (Self::from_entries(entries, autoplay), Task::none())
    }

    fn from_entries(entries: Vec<VideoEntry>, autoplay: bool) -> Self {
        Self {
            playlist: Playlist::new(entries),
            session: None,
            drag: None,
            autoplay,
            fullscreen: false,
            last_tick: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Playlist(msg) => self.update_playlist(msg),
            Message::Player(msg) => self.update_player(msg),
            Message::SpacePressed => {
                self.toggle_playback();
                Task::none()
            }
            Message::Tick(now) => {
                if let Some(session) = &mut self.session {
                    let elapsed = self
                        .last_tick
                        .map(|earlier| now.duration_since(earlier))
                        .unwrap_or_default();
                    session.advance(elapsed);
                }
                self.last_tick = Some(now);
                Task::none()
            }
            Message::FullscreenResolved { window: id, enter } => match id {
                Some(id) => {
                    self.fullscreen = enter;
                    let mode = if enter {
                        window::Mode::Fullscreen
                    } else {
                        window::Mode::Windowed
                    };
                    window::set_mode::<Message>(id, mode)
                }
                None => {
                    // Reported but otherwise a no-op: neither the fullscreen
                    // flag nor playback state changes.
                    eprintln!("Fullscreen request failed: no window available");
                    Task::none()
                }
            },
        }
    }

    fn update_playlist(&mut self, message: playlist_pane::Message) -> Task<Message> {
        match message {
            playlist_pane::Message::RowPressed(index) => {
                // A press while another gesture is live replaces it.
                if index < self.playlist.len() {
                    self.drag = Some(DragSession::begin(index));
                }
            }
            playlist_pane::Message::RowEntered(index) => {
                if let Some(session) = &mut self.drag {
                    session.hover(index);
                }
            }
            playlist_pane::Message::RowExited(index) => {
                if let Some(session) = &mut self.drag {
                    if session.pending_target() == Some(index) {
                        session.clear_hover();
                    }
                }
            }
            playlist_pane::Message::RowReleased(index) => {
                if let Some(session) = self.drag.take() {
                    match session.resolve(index) {
                        DragOutcome::Select(target) => self.select_entry_at(target),
                        DragOutcome::Move { from, to } => {
                            if let Err(err) = self.playlist.reorder(from, to) {
                                eprintln!("Ignoring reorder: {}", err);
                            }
                        }
                    }
                }
            }
            playlist_pane::Message::BackgroundReleased => {
                self.drag = None;
            }
        }
        Task::none()
    }

    fn update_player(&mut self, message: player_pane::Message) -> Task<Message> {
        match message {
            player_pane::Message::TogglePlayback => self.toggle_playback(),
            player_pane::Message::Seek(target_secs) => {
                if let Some(session) = &mut self.session {
                    session.seek(target_secs);
                }
            }
            player_pane::Message::SetRate(rate) => {
                if let Some(session) = &mut self.session {
                    session.set_rate(rate);
                }
            }
            player_pane::Message::ToggleFullscreen => {
                let enter = !self.fullscreen;
                return window::latest()
                    .map(move |id| Message::FullscreenResolved { window: id, enter });
            }
        }
        Task::none()
    }

    fn toggle_playback(&mut self) {
        if let Some(session) = &mut self.session {
            session.toggle_play();
            // Restart the elapsed-time baseline so pause time is not counted.
            self.last_tick = None;
        }
    }

    /// Marks the entry at `index` current and mounts a fresh session for it.
    ///
    /// Re-selecting the entry that is already current keeps the running
    /// session instead of resetting playback.
    fn select_entry_at(&mut self, index: usize) {
        let Some(entry) = self.playlist.get(index) else {
            return;
        };
        let id = entry.id().to_string();
        if self.playlist.current_id() == Some(id.as_str()) {
            return;
        }
        let source = entry.source().to_path_buf();
        let duration = entry.duration_secs();

        match self.playlist.select_current(&id) {
            Ok(()) => {
                self.session = Some(PlayerSession::new(source, duration, self.autoplay));
                self.last_tick = None;
            }
            Err(err) => eprintln!("Ignoring selection: {}", err),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let heading = container(text("Video Player").size(typography::TITLE))
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .padding(spacing::XS);

        let playlist = playlist_pane::view(&self.playlist, self.drag.as_ref()).map(Message::Playlist);

        let content: Element<'_, Message> = match (&self.session, self.playlist.current()) {
            (Some(session), Some(entry)) => {
                let player =
                    player_pane::view(session, entry.title(), self.fullscreen).map(Message::Player);
                row![
                    container(player).width(Length::FillPortion(1)),
                    container(playlist).width(Length::Fixed(sizing::PLAYLIST_WIDTH)),
                ]
                .spacing(spacing::MD)
                .into()
            }
            _ => container(container(playlist).width(Length::Fixed(sizing::PLAYLIST_EMPTY_WIDTH)))
                .width(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
                .into(),
        };

        container(column![heading, content].spacing(spacing::XS))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .into()
    }

    pub fn title(&self) -> String {
        match self.playlist.current() {
            Some(entry) => format!("{} - IcedReel", entry.title()),
            None => String::from("IcedReel"),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mounted = self.session.is_some();
        let playing = self.session.as_ref().is_some_and(PlayerSession::is_playing);
        Subscription::batch([
            subscription::space_key(mounted),
            subscription::playback_tick(playing),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::time::Duration;

    fn seeded_app(autoplay: bool) -> App {
        App::from_entries(
            vec![
                VideoEntry::new("1", "A", "a.mp4").with_duration(60.0),
                VideoEntry::new("2", "B", "b.mp4").with_duration(90.0),
                VideoEntry::new("3", "C", "c.mp4").with_duration(120.0),
            ],
            autoplay,
        )
    }

    fn titles(app: &App) -> Vec<&str> {
        app.playlist.entries().iter().map(|e| e.title()).collect()
    }

    #[test]
    fn drag_gesture_reorders_through_messages() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowEntered(2)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(2)));

        assert_eq!(titles(&app), vec!["B", "C", "A"]);
        assert!(app.drag.is_none());
    }

    #[test]
    fn click_gesture_selects_and_mounts_a_session() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(1)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(1)));

        assert_eq!(app.playlist.current_id(), Some("2"));
        let session = app.session.as_ref().expect("session not mounted");
        assert!(session.state().is_paused());
        assert_eq!(session.duration_secs(), Some(90.0));
    }

    #[test]
    fn autoplay_mounts_a_playing_session() {
        let mut app = seeded_app(true);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));

        assert!(app.session.as_ref().is_some_and(PlayerSession::is_playing));
    }

    #[test]
    fn reselecting_the_current_entry_keeps_the_session() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));

        app.session.as_mut().unwrap().seek(30.0);

        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));

        let session = app.session.as_ref().unwrap();
        assert_abs_diff_eq!(session.position_secs(), 30.0);
    }

    #[test]
    fn selection_follows_the_entry_across_reorders() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(1)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(1)));
        assert_eq!(app.playlist.current_id(), Some("2"));

        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(2)));

        assert_eq!(titles(&app), vec!["B", "C", "A"]);
        assert_eq!(app.playlist.current_id(), Some("2"));
        assert_eq!(app.playlist.current().map(|e| e.title()), Some("B"));
    }

    #[test]
    fn background_release_cancels_the_gesture() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::BackgroundReleased));

        assert!(app.drag.is_none());
        assert_eq!(titles(&app), vec!["A", "B", "C"]);
        assert!(app.session.is_none());
    }

    #[test]
    fn release_without_a_gesture_is_ignored() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(1)));

        assert!(app.session.is_none());
        assert!(app.playlist.current_id().is_none());
    }

    #[test]
    fn a_new_press_replaces_a_stale_gesture() {
        // Last press wins when gestures overlap.
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(2)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));

        assert_eq!(titles(&app), vec!["C", "A", "B"]);
    }

    #[test]
    fn space_without_a_session_is_a_no_op() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::SpacePressed);
        assert!(app.session.is_none());
    }

    #[test]
    fn space_toggles_playback_round_trip() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));

        let _ = app.update(Message::SpacePressed);
        assert!(app.session.as_ref().is_some_and(PlayerSession::is_playing));

        let _ = app.update(Message::SpacePressed);
        assert!(app.session.as_ref().is_some_and(|s| s.state().is_paused()));
    }

    #[test]
    fn ticks_advance_the_playback_clock() {
        let mut app = seeded_app(true);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));

        let t0 = Instant::now();
        let _ = app.update(Message::Tick(t0));
        let _ = app.update(Message::Tick(t0 + Duration::from_secs(2)));

        let session = app.session.as_ref().unwrap();
        assert_abs_diff_eq!(session.position_secs(), 2.0);
    }

    #[test]
    fn first_tick_after_resume_counts_no_elapsed_time() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));

        let t0 = Instant::now();
        let _ = app.update(Message::Tick(t0));

        // A long pause later, resuming must not replay the gap.
        let _ = app.update(Message::SpacePressed);
        let _ = app.update(Message::Tick(t0 + Duration::from_secs(3600)));

        let session = app.session.as_ref().unwrap();
        assert_abs_diff_eq!(session.position_secs(), 0.0);
    }

    #[test]
    fn failed_fullscreen_resolution_changes_nothing() {
        let mut app = seeded_app(false);
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(0)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(0)));
        let _ = app.update(Message::SpacePressed);

        let _ = app.update(Message::FullscreenResolved {
            window: None,
            enter: true,
        });

        assert!(!app.fullscreen);
        assert!(app.session.as_ref().is_some_and(PlayerSession::is_playing));
    }

    #[test]
    fn title_names_the_current_entry() {
        let mut app = seeded_app(false);
        assert_eq!(app.title(), "IcedReel");

        let _ = app.update(Message::Playlist(playlist_pane::Message::RowPressed(1)));
        let _ = app.update(Message::Playlist(playlist_pane::Message::RowReleased(1)));
        assert_eq!(app.title(), "B - IcedReel");
    }
}
