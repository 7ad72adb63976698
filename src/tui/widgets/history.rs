// src/tui/widgets/history.rs — Session table (newest first).

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::data::HistoryRow;
use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, rows: &[HistoryRow]) {
    let block = Block::default()
        .title(format!(" Sessions ({}) ", rows.len()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    if rows.is_empty() {
        let p = Paragraph::new(Line::from(Span::styled(
            "  No sessions yet. A session is recorded when a break ends.",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("#").style(Theme::table_header()),
        Cell::from("Work").style(Theme::table_header()),
        Cell::from("Break").style(Theme::table_header()),
        Cell::from("Ended").style(Theme::table_header()),
        Cell::from("At").style(Theme::table_header()),
    ]);

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.number.to_string()).style(Theme::text_dim()),
                Cell::from(r.work.clone()).style(Theme::work()),
                Cell::from(r.rest.clone()).style(Theme::rest()),
                Cell::from(r.ended).style(if r.ended == "early" {
                    Theme::warning()
                } else {
                    Theme::text()
                }),
                Cell::from(r.finished_at.clone()).style(Theme::text_dim()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Min(8),
    ];

    let table = Table::new(table_rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
