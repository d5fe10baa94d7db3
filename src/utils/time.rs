//! Human-readable durations for progress and trace output

use std::time::Duration;

/// `2h5min7s`, `3min12s` or `4.25s`.
pub fn format_duration(elapsed: Duration) -> String {
    let total = elapsed.as_secs_f64();
    let hours = (total / 3600.0).floor() as u64;
    let minutes = ((total - hours as f64 * 3600.0) / 60.0).floor() as u64;
    let seconds = total - hours as f64 * 3600.0 - minutes as f64 * 60.0;

    if hours > 0 {
        format!("{}h{}min{:.0}s", hours, minutes, seconds.floor())
    } else if minutes > 0 {
        format!("{}min{:.0}s", minutes, seconds.floor())
    } else {
        format!("{:.2}s", seconds)
    }
}
