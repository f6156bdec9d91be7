// SPDX-License-Identifier: MPL-2.0
//! Time display formatting for the control bar.

/// Formats a position or duration as `MM:SS`, zero-padded and
/// floor-truncated to whole seconds.
///
/// Non-finite and negative inputs render as `00:00`, which is also how an
/// unknown duration is displayed before metadata is available. Minutes are
/// not split into hours, so long media simply shows large minute values.
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", minutes, secs)
}
