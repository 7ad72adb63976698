// src/tui/widgets/chart.rs — Stacked bar chart of work/break minutes.
//
// One column per session, work drawn from the baseline up and break stacked
// on top. When the bars do not all fit, the most recent ones are shown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
    Frame,
};

use crate::tui::data::{ChartBar, ChartData};
use crate::tui::theme::Theme;

const BLOCK_CHAR: &str = "\u{2588}";
const AXIS_WIDTH: u16 = 8;

pub fn render(f: &mut Frame, area: Rect, data: &ChartData) {
    let block = Block::default()
        .title(format!(" Session durations ({}) ", data.bars.len()))
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(SessionChart { data }, inner);
}

/// The bars, axis, labels and legend, without a surrounding block.
pub struct SessionChart<'a> {
    pub data: &'a ChartData,
}

impl SessionChart<'_> {
    /// Width of one bar slot: the widest label plus a gap on each side.
    fn slot_width(&self) -> u16 {
        let widest = self
            .data
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        widest as u16 + 2
    }
}

impl Widget for SessionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Legend line, plot, label line.
        if area.height < 4 || area.width <= AXIS_WIDTH {
            return;
        }

        render_legend(area, buf);

        let plot = Rect {
            x: area.x + AXIS_WIDTH,
            y: area.y + 1,
            width: area.width - AXIS_WIDTH,
            height: area.height - 2,
        };
        let label_y = plot.y + plot.height;

        let slot = self.slot_width();
        let fit = (plot.width / slot).max(1) as usize;
        let bars = self.data.latest(fit);
        let max_total = ChartData::max_total(bars);

        render_axis(area.x, plot, max_total, buf);

        for (i, bar) in bars.iter().enumerate() {
            let slot_x = plot.x + i as u16 * slot;
            let bar_width = slot.saturating_sub(2).max(1);
            let bar_x = slot_x + 1;
            render_bar(bar, bar_x, bar_width, plot, max_total, buf);

            let label_x = slot_x + (slot.saturating_sub(bar.label.chars().count() as u16)) / 2;
            buf.set_string(label_x, label_y, &bar.label, Theme::text_dim());
        }
    }
}

fn render_legend(area: Rect, buf: &mut Buffer) {
    let legend = Line::from(vec![
        Span::styled(BLOCK_CHAR, Theme::work()),
        Span::styled(" Work   ", Theme::text()),
        Span::styled(BLOCK_CHAR, Theme::rest()),
        Span::styled(" Break   ", Theme::text()),
        Span::styled("(minutes)", Theme::text_dim()),
    ]);
    buf.set_line(area.x + AXIS_WIDTH, area.y, &legend, area.width - AXIS_WIDTH);
}

fn render_axis(x: u16, plot: Rect, max_total: f64, buf: &mut Buffer) {
    let top = format!("{:>6.1} ", max_total);
    let bottom = format!("{:>6.1} ", 0.0);
    buf.set_string(x, plot.y, top, Theme::text_dim());
    buf.set_string(x, plot.y + plot.height - 1, bottom, Theme::text_dim());
    for y in plot.y..plot.y + plot.height {
        buf.set_string(x + AXIS_WIDTH - 1, y, "\u{2502}", Theme::border());
    }
}

/// Number of rows a value occupies out of `height` rows for `max`.
fn rows_for(value: f64, max: f64, height: u16) -> u16 {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * height as f64).round().min(height as f64) as u16
}

fn render_bar(bar: &ChartBar, x: u16, width: u16, plot: Rect, max_total: f64, buf: &mut Buffer) {
    let total_rows = rows_for(bar.total_minutes(), max_total, plot.height);
    let work_rows = rows_for(bar.work_minutes, max_total, plot.height).min(total_rows);
    let baseline = plot.y + plot.height;

    for row in 0..total_rows {
        let style = if row < work_rows {
            Theme::work()
        } else {
            Theme::rest()
        };
        fill_row(buf, x, baseline - 1 - row, width, style);
    }

    // Value above the bar when there is room for it.
    if total_rows < plot.height {
        let text = format!("{:.1}", bar.total_minutes());
        if text.chars().count() as u16 <= width {
            let y = baseline - 1 - total_rows;
            buf.set_string(x, y, text, Theme::text_dim());
        }
    }
}

fn fill_row(buf: &mut Buffer, x: u16, y: u16, width: u16, style: Style) {
    for dx in 0..width {
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_symbol(BLOCK_CHAR).set_style(style);
        }
    }
}
