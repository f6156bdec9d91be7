// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a reorderable video playlist player built with the Iced
//! GUI framework.
//!
//! It pairs a drag-to-reorder playlist with a playback widget exposing the
//! usual transport controls (play/pause, seek, speed, fullscreen), and
//! demonstrates injectable playlist seeding and user preference management.

pub mod app;
pub mod config;
pub mod error;
pub mod playlist;
pub mod ui;
pub mod video_player;
