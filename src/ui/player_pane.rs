// SPDX-License-Identifier: MPL-2.0
//! Player pane: the playback surface and the transport control bar.
//!
//! The control bar carries play/pause, the timeline slider, the time
//! display, the speed selector, and the fullscreen toggle. Clicking the
//! surface itself also toggles playback, mirroring the usual video-element
//! affordance.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use crate::video_player::time_format::format_time;
use crate::video_player::{PlaybackRate, PlayerSession};
use iced::widget::{button, column, container, mouse_area, pick_list, row, slider, text};
use iced::{Element, Length};

/// Timeline slider step in seconds.
const SLIDER_STEP_SECS: f64 = 0.1;

/// Messages emitted by the transport controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Flip between playing and paused.
    TogglePlayback,
    /// Jump to a position in seconds; the slider bounds the value to
    /// `[0, duration]`.
    Seek(f64),
    /// Apply a rate from the speed menu.
    SetRate(PlaybackRate),
    /// Enter or leave fullscreen presentation.
    ToggleFullscreen,
}

/// Renders the playback surface plus control bar for the mounted session.
pub fn view<'a>(
    session: &PlayerSession,
    title: &'a str,
    fullscreen: bool,
) -> Element<'a, Message> {
    let status = if session.state().is_ended() {
        "Finished"
    } else if session.is_playing() {
        "Playing"
    } else {
        "Paused"
    };

    let surface_content = column![
        text(title).size(typography::TITLE),
        text(status).size(typography::BODY),
    ]
    .spacing(spacing::XS)
    .align_x(iced::Alignment::Center);

    let surface = mouse_area(
        container(surface_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .style(styles::playback_surface),
    )
    .on_press(Message::TogglePlayback);

    let play_pause_svg = if session.is_playing() {
        icons::sized(icons::pause(), sizing::ICON_SM)
    } else {
        icons::sized(icons::play(), sizing::ICON_SM)
    };
    let play_pause_button = button(play_pause_svg)
        .on_press(Message::TogglePlayback)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::control_button());

    // An unknown duration collapses the slider to a zero-length range, which
    // pins the handle at the start until metadata arrives.
    let duration = session.duration_secs().unwrap_or(0.0);
    let timeline = slider(0.0..=duration, session.position_secs(), Message::Seek)
        .step(SLIDER_STEP_SECS)
        .width(Length::FillPortion(1));

    let time_display = text(format!(
        "{} / {}",
        format_time(session.position_secs()),
        format_time(session.duration_secs().unwrap_or(f64::NAN)),
    ))
    .size(typography::BODY);

    let speed_selector = pick_list(
        PlaybackRate::menu(),
        Some(session.rate()),
        Message::SetRate,
    )
    .text_size(typography::BODY)
    .padding(spacing::XXS);

    let fullscreen_svg = if fullscreen {
        icons::sized(icons::fullscreen_exit(), sizing::ICON_SM)
    } else {
        icons::sized(icons::fullscreen(), sizing::ICON_SM)
    };
    let fullscreen_button = button(fullscreen_svg)
        .on_press(Message::ToggleFullscreen)
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::control_button());

    let controls = container(
        row![
            play_pause_button,
            timeline,
            time_display,
            speed_selector,
            fullscreen_button,
        ]
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .style(styles::control_bar);

    column![surface, controls].into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_a_paused_session() {
        let session = PlayerSession::new("media/clip.mp4", Some(120.0), false);
        let _element = view(&session, "Clip", false);
    }

    #[test]
    fn view_renders_without_duration_metadata() {
        let session = PlayerSession::new("media/clip.mp4", None, false);
        let _element = view(&session, "Clip", false);
    }

    #[test]
    fn view_renders_in_fullscreen() {
        let session = PlayerSession::new("media/clip.mp4", Some(120.0), true);
        let _element = view(&session, "Clip", true);
    }
}
