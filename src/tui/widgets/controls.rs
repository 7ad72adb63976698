// src/tui/widgets/controls.rs — Primary / Stop Work / Chart buttons.
//
// Returns where each button landed so mouse clicks can be mapped back.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::timer::state::STOP_WORK_LABEL;
use crate::timer::Controls;
use crate::tui::theme::Theme;

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Primary,
    Stop,
    Chart,
}

/// Screen areas of the last rendered buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonAreas {
    pub primary: Rect,
    pub stop: Rect,
    pub chart: Rect,
}

impl ButtonAreas {
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        if self.primary.contains(pos) {
            Some(Control::Primary)
        } else if self.stop.contains(pos) {
            Some(Control::Stop)
        } else if self.chart.contains(pos) {
            Some(Control::Chart)
        } else {
            None
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, controls: &Controls, chart_open: bool) -> ButtonAreas {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let chart_label = if chart_open { "Hide Chart" } else { "Show Chart" };

    render_button(f, chunks[0], "s", controls.primary_label, controls.primary_enabled);
    render_button(f, chunks[1], "x", STOP_WORK_LABEL, controls.stop_enabled);
    render_button(f, chunks[2], "c", chart_label, controls.chart_enabled);

    ButtonAreas {
        primary: chunks[0],
        stop: chunks[1],
        chart: chunks[2],
    }
}

fn render_button(f: &mut Frame, area: Rect, key: &str, label: &str, enabled: bool) {
    let (style, border) = if enabled {
        (Theme::button(), Theme::border_focus())
    } else {
        (Theme::button_disabled(), Theme::border())
    };

    let block = Block::default().borders(Borders::ALL).border_style(border);
    let line = Line::from(vec![
        Span::styled(format!("[{key}] "), Theme::key_hint()),
        Span::styled(label.to_string(), style),
    ]);

    let p = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(p, area);
}
