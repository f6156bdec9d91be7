// SPDX-License-Identifier: MPL-2.0
//! Playback control surface for the video widget.
//!
//! This module owns everything behind the transport controls: the playback
//! state machine, the per-source session that drives a position clock, the
//! discrete playback-rate menu, and time display formatting. It knows nothing
//! about the playlist; the application hands it a source and an autoplay flag.

mod playback_rate;
mod state;
pub mod time_format;

pub use playback_rate::PlaybackRate;
pub use state::{PlaybackState, PlayerSession};
