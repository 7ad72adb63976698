// src/tui/widgets/mod.rs — Panels that make up the timer screen.

pub mod chart;
pub mod clock;
pub mod controls;
pub mod fraction;
pub mod history;
pub mod notice;
