// SPDX-License-Identifier: MPL-2.0
//! Playback state machine and per-source session.
//!
//! Lifecycle: a `PlayerSession` is created when a source is assigned,
//! replaced wholesale when the source changes (which is what resets playback
//! state), and dropped when nothing is selected. Transitions:
//! paused -> playing on play, playing -> paused on pause, playing -> ended
//! when the clock reaches a known duration, ended -> playing on play
//! (restarting from the beginning, the media-default behavior).

use super::PlaybackRate;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The three observable playback states.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackState {
    /// Not advancing; position is retained.
    Paused { position_secs: f64 },

    /// The position clock is running.
    Playing { position_secs: f64 },

    /// The clock reached the end of a known duration.
    Ended,
}

impl PlaybackState {
    /// The current position, if the state carries one.
    pub fn position(&self) -> Option<f64> {
        match self {
            Self::Paused { position_secs } | Self::Playing { position_secs } => {
                Some(*position_secs)
            }
            Self::Ended => None,
        }
    }

    /// Returns true while the clock is running.
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Returns true while paused.
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused { .. })
    }

    /// Returns true once the end of the stream was reached.
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

/// One mounted playback lifecycle over a single source.
///
/// The session is the exclusive owner of its playback state; the playlist
/// never reads it back. Position advances via [`PlayerSession::advance`],
/// driven by a periodic tick while playing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSession {
    source: PathBuf,
    duration_secs: Option<f64>,
    rate: PlaybackRate,
    state: PlaybackState,
}

impl PlayerSession {
    /// Creates a session for `source`, starting at position zero.
    ///
    /// With `autoplay` the session starts in `Playing`, otherwise `Paused`.
    /// `duration_secs` is metadata from the seed layer; `None` means the
    /// duration is not (yet) known and the clock can never reach an end.
    pub fn new(source: impl Into<PathBuf>, duration_secs: Option<f64>, autoplay: bool) -> Self {
        let state = if autoplay {
            PlaybackState::Playing { position_secs: 0.0 }
        } else {
            PlaybackState::Paused { position_secs: 0.0 }
        };
        Self {
            source: source.into(),
            duration_secs: duration_secs.filter(|d| d.is_finite() && *d > 0.0),
            rate: PlaybackRate::default(),
            state,
        }
    }

    /// The source this session plays.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The playback state machine.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Returns true while the position clock is running.
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Current position in seconds. After the end was reached this is the
    /// duration itself.
    pub fn position_secs(&self) -> f64 {
        self.state
            .position()
            .or(self.duration_secs)
            .unwrap_or(0.0)
    }

    /// Total duration in seconds, if known.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Current playback rate.
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    /// Applies a rate from the fixed menu. Takes effect on the next tick.
    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
    }

    /// Flips between playing and paused.
    ///
    /// Play after the end restarts from the beginning, mirroring what media
    /// elements do when play is issued on an ended stream.
    pub fn toggle_play(&mut self) {
        self.state = match &self.state {
            PlaybackState::Paused { position_secs } => PlaybackState::Playing {
                position_secs: *position_secs,
            },
            PlaybackState::Playing { position_secs } => PlaybackState::Paused {
                position_secs: *position_secs,
            },
            PlaybackState::Ended => PlaybackState::Playing { position_secs: 0.0 },
        };
    }

    /// Jumps to `target_secs`, clamped to `[0, duration]`.
    ///
    /// The position updates immediately, ahead of the next clock tick, so the
    /// control bar reflects the jump without waiting. Seeking an ended
    /// session leaves it paused at the target.
    pub fn seek(&mut self, target_secs: f64) {
        let mut target = target_secs.max(0.0);
        if !target.is_finite() {
            target = 0.0;
        }
        if let Some(duration) = self.duration_secs {
            target = target.min(duration);
        }

        self.state = match &self.state {
            PlaybackState::Playing { .. } => PlaybackState::Playing {
                position_secs: target,
            },
            PlaybackState::Paused { .. } | PlaybackState::Ended => PlaybackState::Paused {
                position_secs: target,
            },
        };
    }

    /// Advances the position clock by `elapsed` wall time, scaled by the
    /// playback rate. Does nothing unless playing.
    ///
    /// Reaching a known duration transitions to `Ended` with the position
    /// saturated at that duration; an unknown duration never ends.
    pub fn advance(&mut self, elapsed: Duration) {
        let PlaybackState::Playing { position_secs } = self.state else {
            return;
        };

        let next = position_secs + elapsed.as_secs_f64() * self.rate.value();
        self.state = match self.duration_secs {
            Some(duration) if next >= duration => PlaybackState::Ended,
            _ => PlaybackState::Playing {
                position_secs: next,
            },
        };
    }
}
