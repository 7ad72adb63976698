// src/timer/session.rs — Completed work/break pairs and the in-memory log.
//
// Sessions are kept for the lifetime of the process only.

use chrono::{DateTime, Local};

/// How a break came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakEnd {
    /// The countdown reached zero.
    Natural,
    /// The user ended the break before the countdown finished.
    Early,
}

impl BreakEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakEnd::Natural => "natural",
            BreakEnd::Early => "early",
        }
    }
}

/// One completed work/break cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub work_seconds: f64,
    pub break_seconds: f64,
    pub ended: BreakEnd,
    pub finished_at: DateTime<Local>,
}

impl Session {
    pub fn new(work_seconds: f64, break_seconds: f64, ended: BreakEnd) -> Self {
        Self {
            work_seconds,
            break_seconds,
            ended,
            finished_at: Local::now(),
        }
    }

    pub fn work_minutes(&self) -> f64 {
        self.work_seconds / 60.0
    }

    pub fn break_minutes(&self) -> f64 {
        self.break_seconds / 60.0
    }
}

/// Append-only, chronologically ordered record of sessions.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    sessions: Vec<Session>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, session: Session) {
        self.sessions.push(session);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn last(&self) -> Option<&Session> {
        self.sessions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }

    pub fn as_slice(&self) -> &[Session] {
        &self.sessions
    }

    pub fn total_work_seconds(&self) -> f64 {
        self.sessions.iter().map(|s| s.work_seconds).sum()
    }

    pub fn total_break_seconds(&self) -> f64 {
        self.sessions.iter().map(|s| s.break_seconds).sum()
    }
}

impl<'a> IntoIterator for &'a SessionLog {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.iter()
    }
}
