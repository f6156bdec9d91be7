// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: the playlist pane, the player pane, and the shared
//! icons, styles, and design tokens they draw from.

pub mod design_tokens;
pub mod icons;
pub mod player_pane;
pub mod playlist_pane;
pub mod styles;
