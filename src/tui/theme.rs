// src/tui/theme.rs — Color scheme and style definitions for the timer UI.

use ratatui::style::{Color, Modifier, Style};

use crate::timer::Phase;

/// Tomato-and-tea palette.
pub struct Theme;

impl Theme {
    // ── Brand colors ─────────────────────────────────────────────
    pub const TOMATO: Color = Color::Rgb(240, 90, 60);
    pub const TEA: Color = Color::Rgb(90, 190, 120);
    pub const CREAM: Color = Color::Rgb(240, 236, 225);
    pub const SLATE: Color = Color::Rgb(40, 40, 55);
    pub const MUSTARD: Color = Color::Rgb(225, 190, 70);
    pub const ASH: Color = Color::Rgb(125, 125, 140);
    pub const SMOKE: Color = Color::Rgb(80, 80, 95);

    // ── Semantic styles ──────────────────────────────────────────

    /// Main title / header bar.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::TOMATO)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::SMOKE)
    }

    /// Block border (focused / selected).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::TOMATO)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::CREAM)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::ASH)
    }

    pub fn warning() -> Style {
        Style::default().fg(Theme::MUSTARD)
    }

    pub fn error() -> Style {
        Style::default().fg(Theme::TOMATO)
    }

    /// Table header row.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::TOMATO)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::TOMATO)
    }

    /// Description next to key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::ASH)
    }

    /// Work segment in the chart and the clock while working.
    pub fn work() -> Style {
        Style::default().fg(Theme::TOMATO)
    }

    /// Break segment in the chart and the clock while on a break.
    pub fn rest() -> Style {
        Style::default().fg(Theme::TEA)
    }

    /// A control that can be pressed.
    pub fn button() -> Style {
        Style::default()
            .fg(Theme::CREAM)
            .bg(Theme::SLATE)
            .add_modifier(Modifier::BOLD)
    }

    /// A control that is currently disabled.
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Theme::SMOKE)
            .add_modifier(Modifier::DIM)
    }

    /// Clock label, colored by phase.
    pub fn clock(phase: &Phase) -> Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        match phase {
            Phase::Idle => base.fg(Theme::CREAM),
            Phase::Working { .. } => base.fg(Theme::TOMATO),
            Phase::OnBreak { .. } => base.fg(Theme::TEA),
        }
    }
}
