// src/tui/widgets/notice.rs — Modal popup for break-finished, errors and "no data".

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the user has to acknowledge before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, notice: &Notice) {
    let popup = centered_rect(60, 30, area);

    let (title_style, border_style) = match notice.kind {
        NoticeKind::Info => (Theme::header(), Theme::border_focus()),
        NoticeKind::Error => (Theme::error(), Theme::error()),
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", notice.title), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(notice.body.clone(), Theme::text())),
        Line::from(""),
        Line::from(Span::styled("press any key", Theme::text_dim())),
    ];

    let p = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup);
    f.render_widget(p, popup);
}

/// A rectangle of `percent_x` by `percent_y` centered in `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 30, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 12);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 14);
    }

    #[test]
    fn test_constructors() {
        let n = Notice::error("Error", "bad");
        assert_eq!(n.kind, NoticeKind::Error);
        let n = Notice::info("Break Finished", "ok");
        assert_eq!(n.kind, NoticeKind::Info);
        assert_eq!(n.title, "Break Finished");
    }
}
