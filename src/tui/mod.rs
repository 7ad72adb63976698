// src/tui/mod.rs — Terminal UI for the interval timer.
//
// Built with ratatui on the crossterm backend. Launched by default when
// `jonodoro` runs without a subcommand.

pub mod app;
pub mod data;
pub mod theme;
pub mod widgets;

pub use app::run_timer;
