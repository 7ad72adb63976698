// src/timer/state.rs — The work/break state machine.
//
// Every transition takes the current `Instant` from the caller, so the event
// loop decides what "now" is and tests can move time forward without sleeping.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::format::format_hms;
use super::fraction::{Fraction, FractionError};
use super::session::{BreakEnd, Session, SessionLog};
use crate::infra::errors::JonodoroError;

pub type TimerError = JonodoroError;

/// Current mode of the timer. Data that only makes sense inside a phase
/// lives inside that variant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Working {
        started_at: Instant,
    },
    OnBreak {
        work_seconds: f64,
        break_seconds: f64,
        ends_at: Instant,
    },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Working { .. } => "working",
            Phase::OnBreak { .. } => "on break",
        }
    }
}

/// The break that was scheduled when work stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakPlan {
    pub work_seconds: f64,
    pub break_seconds: f64,
}

/// What a user action did.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    WorkStarted,
    BreakStarted(BreakPlan),
    /// The break was cut short, the session recorded and a new work
    /// interval started.
    BreakEndedEarly(Session),
}

/// Result of one periodic tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// New clock label, if the phase shows one.
    pub display: Option<String>,
    /// Set when this tick observed the natural end of a break.
    pub finished: Option<Session>,
    /// Whether the controller should schedule another tick.
    pub reschedule: bool,
}

/// Enabled state and labels of the on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub primary_label: &'static str,
    pub primary_enabled: bool,
    pub stop_enabled: bool,
    pub chart_enabled: bool,
}

pub const START_WORK_LABEL: &str = "Start Work";
pub const END_BREAK_LABEL: &str = "End Break";
pub const STOP_WORK_LABEL: &str = "Stop Work";

#[derive(Debug, Default)]
pub struct IntervalTimer {
    phase: Phase,
    sessions: SessionLog,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sessions(&self) -> &SessionLog {
        &self.sessions
    }

    /// Consumes the timer, handing back the recorded sessions.
    pub fn into_sessions(self) -> SessionLog {
        self.sessions
    }

    pub fn controls(&self) -> Controls {
        match self.phase {
            Phase::Idle => Controls {
                primary_label: START_WORK_LABEL,
                primary_enabled: true,
                stop_enabled: false,
                chart_enabled: true,
            },
            Phase::Working { .. } => Controls {
                primary_label: START_WORK_LABEL,
                primary_enabled: false,
                stop_enabled: true,
                chart_enabled: true,
            },
            Phase::OnBreak { .. } => Controls {
                primary_label: END_BREAK_LABEL,
                primary_enabled: true,
                stop_enabled: false,
                chart_enabled: true,
            },
        }
    }

    /// Idle → Working.
    pub fn start_work(&mut self, now: Instant) -> Result<(), TimerError> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Working { started_at: now };
                debug!("work started");
                Ok(())
            }
            other => Err(self.invalid("start work", other)),
        }
    }

    /// Working → OnBreak, with the break sized by `fraction_text`.
    ///
    /// A malformed fraction discards the work interval and leaves the timer
    /// idle.
    pub fn stop_work(&mut self, now: Instant, fraction_text: &str) -> Result<BreakPlan, TimerError> {
        let started_at = match self.phase {
            Phase::Working { started_at } => started_at,
            other => return Err(self.invalid("stop work", other)),
        };
        let work_seconds = now.saturating_duration_since(started_at).as_secs_f64();

        match schedule_break(now, work_seconds, fraction_text) {
            Ok((break_seconds, ends_at)) => {
                self.phase = Phase::OnBreak {
                    work_seconds,
                    break_seconds,
                    ends_at,
                };
                debug!(work_seconds, break_seconds, "break started");
                Ok(BreakPlan {
                    work_seconds,
                    break_seconds,
                })
            }
            Err(e) => {
                self.phase = Phase::Idle;
                warn!(input = fraction_text, "discarding work interval: {e}");
                Err(e.into())
            }
        }
    }

    /// OnBreak → Working. Records only the break time actually taken.
    pub fn end_break(&mut self, now: Instant) -> Result<Session, TimerError> {
        let (work_seconds, break_seconds, ends_at) = match self.phase {
            Phase::OnBreak {
                work_seconds,
                break_seconds,
                ends_at,
            } => (work_seconds, break_seconds, ends_at),
            other => return Err(self.invalid("end break", other)),
        };

        // Clamped at zero when the deadline already passed.
        let remaining = ends_at.saturating_duration_since(now).as_secs_f64();
        let taken = (break_seconds - remaining).max(0.0);

        let session = self.record(Session::new(work_seconds, taken, BreakEnd::Early));
        self.phase = Phase::Working { started_at: now };
        debug!("work started");
        Ok(session)
    }

    /// Primary control: ends the break when on one, otherwise starts work.
    pub fn primary_action(&mut self, now: Instant) -> Result<Action, TimerError> {
        match self.phase {
            Phase::OnBreak { .. } => self.end_break(now).map(Action::BreakEndedEarly),
            _ => self.start_work(now).map(|()| Action::WorkStarted),
        }
    }

    /// Single-key shortcut cycling start → stop → end break.
    pub fn toggle(&mut self, now: Instant, fraction_text: &str) -> Result<Action, TimerError> {
        match self.phase {
            Phase::Idle => self.start_work(now).map(|()| Action::WorkStarted),
            Phase::Working { .. } => self
                .stop_work(now, fraction_text)
                .map(Action::BreakStarted),
            Phase::OnBreak { .. } => self.end_break(now).map(Action::BreakEndedEarly),
        }
    }

    /// Periodic update. Observes the natural end of a break.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        match self.phase {
            Phase::Idle => TickOutcome {
                display: None,
                finished: None,
                reschedule: false,
            },
            Phase::Working { started_at } => TickOutcome {
                display: Some(format_hms(
                    now.saturating_duration_since(started_at).as_secs_f64(),
                )),
                finished: None,
                reschedule: true,
            },
            Phase::OnBreak {
                work_seconds,
                break_seconds,
                ends_at,
            } => {
                let remaining = ends_at.saturating_duration_since(now);
                let display = Some(format!("Break: {}", format_hms(remaining.as_secs_f64())));
                if remaining > Duration::ZERO {
                    return TickOutcome {
                        display,
                        finished: None,
                        reschedule: true,
                    };
                }

                let session =
                    self.record(Session::new(work_seconds, break_seconds, BreakEnd::Natural));
                self.phase = Phase::Idle;
                TickOutcome {
                    display,
                    finished: Some(session),
                    reschedule: false,
                }
            }
        }
    }

    fn record(&mut self, session: Session) -> Session {
        info!(
            work_seconds = session.work_seconds,
            break_seconds = session.break_seconds,
            ended = session.ended.as_str(),
            "session {} recorded",
            self.sessions.len() + 1
        );
        self.sessions.push(session.clone());
        session
    }

    fn invalid(&self, action: &'static str, phase: Phase) -> TimerError {
        JonodoroError::InvalidAction {
            action,
            phase: phase.name(),
        }
    }
}

/// Break length and deadline for `work_seconds` of work.
fn schedule_break(
    now: Instant,
    work_seconds: f64,
    fraction_text: &str,
) -> Result<(f64, Instant), FractionError> {
    let fraction: Fraction = fraction_text.parse()?;
    let break_seconds = fraction.apply(work_seconds);
    let too_large = || FractionError::TooLarge {
        input: fraction_text.trim().to_string(),
    };
    let length = Duration::try_from_secs_f64(break_seconds).map_err(|_| too_large())?;
    let ends_at = now.checked_add(length).ok_or_else(too_large)?;
    Ok((break_seconds, ends_at))
}
