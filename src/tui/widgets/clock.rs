// src/tui/widgets/clock.rs — Clock label panel.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::timer::Phase;
use crate::tui::data::SummaryData;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, label: &str, phase: &Phase, summary: &SummaryData) {
    let block = Block::default()
        .title(" Timer ")
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let status = match phase {
        Phase::Idle => Span::styled("idle", Theme::text_dim()),
        Phase::Working { .. } => Span::styled("working", Theme::work()),
        Phase::OnBreak { .. } => Span::styled("on break", Theme::rest()),
    };

    let lines = vec![
        Line::from(Span::styled(label.to_string(), Theme::clock(phase))),
        Line::from(""),
        Line::from(vec![
            status,
            Span::styled(
                format!(
                    "  ·  {} sessions  ·  worked {}  ·  rested {}",
                    summary.sessions, summary.total_work, summary.total_break
                ),
                Theme::text_dim(),
            ),
        ]),
    ];

    let p = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(p, area);
}
