// src/timer/format.rs — Human-readable durations for the clock label and summaries.

/// Format seconds as `HH:MM:SS`.
///
/// Fractional seconds are truncated and negative input is shown as zero.
/// Hours are not wrapped at 24.
pub fn format_hms(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Compact duration for tables: `45s`, `12m 03s`, `1h 05m`.
pub fn format_short(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    };
    if total >= 3600 {
        format!("{}h {:02}m", total / 3600, (total % 3600) / 60)
    } else if total >= 60 {
        format!("{}m {:02}s", total / 60, total % 60)
    } else {
        format!("{total}s")
    }
}
