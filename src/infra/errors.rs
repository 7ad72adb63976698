// src/infra/errors.rs — Error types for Jonodoro

use thiserror::Error;

use crate::timer::fraction::FractionError;

#[derive(Error, Debug)]
pub enum JonodoroError {
    // User input (recoverable, shown in the UI)
    #[error("Invalid fraction. Please enter a valid fraction (e.g., 1/3): {0}")]
    MalformedFraction(#[from] FractionError),

    // Control misuse: the UI disables these, the library API reports them
    #[error("Cannot {action} while {phase}")]
    InvalidAction {
        action: &'static str,
        phase: &'static str,
    },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),
}
