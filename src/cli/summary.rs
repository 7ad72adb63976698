// src/cli/summary.rs — Plain-text recap printed after the timer exits.

use std::fmt::Write;

use crate::timer::format::format_short;
use crate::timer::SessionLog;

/// Text recap of a run. Empty runs get a one-liner.
pub fn render_summary(log: &SessionLog) -> String {
    if log.is_empty() {
        return "No sessions recorded.\n".to_string();
    }

    let mut out = String::from("Jonodoro summary:\n");
    for (i, s) in log.iter().enumerate() {
        let _ = writeln!(
            out,
            "  Session {:<3} work {:>8}  break {:>8}  ({} end, {})",
            i + 1,
            format_short(s.work_seconds),
            format_short(s.break_seconds),
            s.ended.as_str(),
            s.finished_at.format("%H:%M"),
        );
    }
    let _ = writeln!(
        out,
        "  Total       work {:>8}  break {:>8}",
        format_short(log.total_work_seconds()),
        format_short(log.total_break_seconds()),
    );
    out
}

pub fn print_summary(log: &SessionLog) {
    print!("{}", render_summary(log));
}
