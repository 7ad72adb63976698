// src/lib.rs — Library root for Jonodoro

pub mod cli;
pub mod infra;
pub mod timer;
pub mod tui;
