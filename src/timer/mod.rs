// src/timer/mod.rs — Work/break interval timer core.
//
// Pure state: no terminal, no clock of its own. The TUI controller owns one
// `IntervalTimer` and feeds it input events and ticks.

pub mod format;
pub mod fraction;
pub mod session;
pub mod state;

pub use fraction::{Fraction, FractionError};
pub use session::{BreakEnd, Session, SessionLog};
pub use state::{Action, BreakPlan, Controls, IntervalTimer, Phase, TickOutcome, TimerError};
