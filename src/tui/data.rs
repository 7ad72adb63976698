// src/tui/data.rs — Display-ready snapshots of the session log.
//
// Widgets never look at `Session` directly; they get these structs, with
// units already converted.

use crate::timer::format::format_short;
use crate::timer::SessionLog;

// ── Chart ────────────────────────────────────────────────────────

/// One stacked bar: work at the bottom, break on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub work_minutes: f64,
    pub break_minutes: f64,
}

impl ChartBar {
    pub fn total_minutes(&self) -> f64 {
        self.work_minutes + self.break_minutes
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub bars: Vec<ChartBar>,
}

impl ChartData {
    /// `None` when there is nothing to plot.
    pub fn from_sessions(log: &SessionLog) -> Option<Self> {
        if log.is_empty() {
            return None;
        }
        let bars = log
            .iter()
            .enumerate()
            .map(|(i, s)| ChartBar {
                label: format!("Session {}", i + 1),
                work_minutes: s.work_minutes(),
                break_minutes: s.break_minutes(),
            })
            .collect();
        Some(Self { bars })
    }

    /// Tallest stack among `bars`.
    pub fn max_total(bars: &[ChartBar]) -> f64 {
        bars.iter().map(ChartBar::total_minutes).fold(0.0_f64, f64::max)
    }

    /// The most recent `count` bars, oldest first.
    pub fn latest(&self, count: usize) -> &[ChartBar] {
        let start = self.bars.len().saturating_sub(count);
        &self.bars[start..]
    }
}

// ── History table ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub number: usize,
    pub work: String,
    pub rest: String,
    pub ended: &'static str,
    pub finished_at: String,
}

/// Rows newest first.
pub fn history_rows(log: &SessionLog) -> Vec<HistoryRow> {
    log.iter()
        .enumerate()
        .rev()
        .map(|(i, s)| HistoryRow {
            number: i + 1,
            work: format_short(s.work_seconds),
            rest: format_short(s.break_seconds),
            ended: s.ended.as_str(),
            finished_at: s.finished_at.format("%H:%M:%S").to_string(),
        })
        .collect()
}

// ── Totals ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryData {
    pub sessions: usize,
    pub total_work: String,
    pub total_break: String,
}

pub fn summary(log: &SessionLog) -> SummaryData {
    SummaryData {
        sessions: log.len(),
        total_work: format_short(log.total_work_seconds()),
        total_break: format_short(log.total_break_seconds()),
    }
}
