// SPDX-License-Identifier: MPL-2.0
//! Playback rate domain type.
//!
//! A rate is always one of the fixed menu in
//! [`crate::config::PLAYBACK_RATE_MENU`]; values outside the menu are not
//! constructible, which is what keeps the speed selector and programmatic
//! callers in agreement.

use crate::config::{DEFAULT_PLAYBACK_RATE, PLAYBACK_RATE_MENU};
use std::fmt;

/// Playback-rate multiplier, guaranteed to be a menu value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Creates a rate if `rate` is exactly one of the menu values.
    #[must_use]
    pub fn try_new(rate: f64) -> Option<Self> {
        PLAYBACK_RATE_MENU.contains(&rate).then_some(Self(rate))
    }

    /// Returns the multiplier as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true for the normal 1x rate.
    #[must_use]
    pub fn is_normal(self) -> bool {
        self.0 == DEFAULT_PLAYBACK_RATE
    }

    /// All selectable rates in menu order, for the speed selector.
    #[must_use]
    pub fn menu() -> Vec<Self> {
        PLAYBACK_RATE_MENU.iter().copied().map(Self).collect()
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn try_new_accepts_every_menu_value() {
        for &rate in &PLAYBACK_RATE_MENU {
            let accepted = PlaybackRate::try_new(rate).expect("menu value rejected");
            assert_abs_diff_eq!(accepted.value(), rate);
        }
    }

    #[test]
    fn try_new_rejects_values_outside_the_menu() {
        assert!(PlaybackRate::try_new(0.0).is_none());
        assert!(PlaybackRate::try_new(0.3).is_none());
        assert!(PlaybackRate::try_new(1.1).is_none());
        assert!(PlaybackRate::try_new(3.0).is_none());
        assert!(PlaybackRate::try_new(-1.0).is_none());
        assert!(PlaybackRate::try_new(f64::NAN).is_none());
    }

    #[test]
    fn default_is_normal_speed() {
        let rate = PlaybackRate::default();
        assert_abs_diff_eq!(rate.value(), 1.0);
        assert!(rate.is_normal());
    }

    #[test]
    fn menu_matches_the_configured_presets() {
        let menu = PlaybackRate::menu();
        assert_eq!(menu.len(), PLAYBACK_RATE_MENU.len());
        for (rate, &preset) in menu.iter().zip(PLAYBACK_RATE_MENU.iter()) {
            assert_abs_diff_eq!(rate.value(), preset);
        }
    }

    #[test]
    fn display_renders_compact_multiplier() {
        assert_eq!(PlaybackRate::try_new(1.0).unwrap().to_string(), "1x");
        assert_eq!(PlaybackRate::try_new(0.25).unwrap().to_string(), "0.25x");
        assert_eq!(PlaybackRate::try_new(1.5).unwrap().to_string(), "1.5x");
    }
}
