// src/tui/widgets/fraction.rs — Break-fraction text field.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, value: &str, focused: bool) {
    let block = Block::default()
        .title(" Break fraction (e.g., 1/3) ")
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focus()
        } else {
            Theme::border()
        });

    let mut spans = vec![Span::styled(value.to_string(), Theme::text())];
    if focused {
        spans.push(Span::styled("\u{258f}", Theme::key_hint()));
    } else {
        spans.push(Span::styled("   (Tab to edit)", Theme::text_dim()));
    }

    let p = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(p, area);
}
