// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.
//!
//! # Categories
//!
//! - **Playback rate**: the discrete rate menu and its bounds
//! - **Playback clock**: position refresh cadence
//! - **Startup**: autoplay behavior

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// The discrete playback-rate menu offered by the speed selector.
///
/// Rates outside this menu are not constructible through the UI; the
/// `PlaybackRate` type enforces membership for programmatic callers too.
pub const PLAYBACK_RATE_MENU: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Normal playback rate.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Slowest selectable rate.
pub const MIN_PLAYBACK_RATE: f64 = 0.25;

/// Fastest selectable rate.
pub const MAX_PLAYBACK_RATE: f64 = 2.0;

// ==========================================================================
// Playback Clock Defaults
// ==========================================================================

/// Position refresh cadence while playing, in milliseconds.
///
/// The elapsed wall time between ticks is what advances the position, so
/// this value only bounds display latency, not clock accuracy.
pub const PLAYBACK_TICK_MS: u64 = 250;

// ==========================================================================
// Startup Defaults
// ==========================================================================

/// Whether selecting an entry starts playback immediately.
pub const DEFAULT_AUTOPLAY: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Menu bounds match the declared min/max
    assert!(PLAYBACK_RATE_MENU[0] == MIN_PLAYBACK_RATE);
    assert!(PLAYBACK_RATE_MENU[PLAYBACK_RATE_MENU.len() - 1] == MAX_PLAYBACK_RATE);

    // Menu is strictly ascending
    let mut i = 1;
    while i < PLAYBACK_RATE_MENU.len() {
        assert!(PLAYBACK_RATE_MENU[i] > PLAYBACK_RATE_MENU[i - 1]);
        i += 1;
    }

    // The default rate is a menu entry
    let mut found = false;
    let mut j = 0;
    while j < PLAYBACK_RATE_MENU.len() {
        if PLAYBACK_RATE_MENU[j] == DEFAULT_PLAYBACK_RATE {
            found = true;
        }
        j += 1;
    }
    assert!(found);

    // Clock cadence validation
    assert!(PLAYBACK_TICK_MS > 0);
    assert!(PLAYBACK_TICK_MS <= 1000);
};
