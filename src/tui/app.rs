// src/tui/app.rs — Controller state, event loop, and rendering.
//
// The controller owns the `IntervalTimer`. Input events and the periodic tick
// are the only things that touch it, all from this single loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::debug;

use crate::infra::config::Config;
use crate::infra::errors::JonodoroError;
use crate::timer::{Action, IntervalTimer, SessionLog};

use super::data::{self, ChartData};
use super::theme::Theme;
use super::widgets;
use super::widgets::controls::{ButtonAreas, Control};
use super::widgets::notice::Notice;

/// How long to wait for input when no tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);
const MAX_FRACTION_LEN: usize = 32;

pub const BREAK_FINISHED_TITLE: &str = "Break Finished";
pub const BREAK_FINISHED_BODY: &str = "Break time is over. Ready to start working?";
pub const NO_DATA_TITLE: &str = "No Data";
pub const NO_DATA_BODY: &str = "No sessions recorded yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Timer,
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Controls,
    Fraction,
}

// ── App state ────────────────────────────────────────────────────

pub struct App {
    timer: IntervalTimer,
    fraction: String,
    label: String,
    view: View,
    focus: Focus,
    notice: Option<Notice>,
    next_tick: Option<Instant>,
    tick_interval: Duration,
    show_key_hints: bool,
    show_history: bool,
    buttons: ButtonAreas,
    fraction_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, fraction: String) -> Self {
        Self {
            timer: IntervalTimer::new(),
            fraction,
            label: "00:00:00".into(),
            view: View::Timer,
            focus: Focus::Controls,
            notice: None,
            next_tick: None,
            tick_interval: Duration::from_millis(config.timer.tick_interval_ms),
            show_key_hints: config.ui.show_key_hints,
            show_history: config.ui.show_history,
            buttons: ButtonAreas::default(),
            fraction_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fraction(&self) -> &str {
        &self.fraction
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn into_sessions(self) -> SessionLog {
        self.timer.into_sessions()
    }

    // ── Controls ─────────────────────────────────────────────────

    /// Press a control. Disabled controls and presses behind a popup are
    /// ignored.
    pub fn press(&mut self, control: Control, now: Instant) {
        if self.notice.is_some() {
            return;
        }
        let controls = self.timer.controls();
        match control {
            Control::Primary if controls.primary_enabled => {
                let result = self.timer.primary_action(now);
                self.apply(result, now);
            }
            Control::Stop if controls.stop_enabled => {
                let result = self
                    .timer
                    .stop_work(now, &self.fraction)
                    .map(Action::BreakStarted);
                self.apply(result, now);
            }
            Control::Chart if controls.chart_enabled => self.toggle_chart(),
            _ => debug!(?control, phase = self.timer.phase().name(), "control disabled"),
        }
    }

    /// Single-key shortcut: start, stop or end the break depending on phase.
    pub fn toggle(&mut self, now: Instant) {
        if self.notice.is_some() {
            return;
        }
        let result = self.timer.toggle(now, &self.fraction);
        self.apply(result, now);
    }

    fn apply(&mut self, result: Result<Action, JonodoroError>, now: Instant) {
        match result {
            Ok(action) => {
                debug!(?action, "action applied");
                // Refresh the label right away instead of a tick later.
                self.next_tick = Some(now);
            }
            Err(e) => {
                self.notice = Some(Notice::error("Error", e.to_string()));
            }
        }
    }

    fn toggle_chart(&mut self) {
        match self.view {
            View::Chart => self.view = View::Timer,
            View::Timer if self.timer.sessions().is_empty() => {
                self.notice = Some(Notice::info(NO_DATA_TITLE, NO_DATA_BODY));
            }
            View::Timer => {
                self.view = View::Chart;
                self.focus = Focus::Controls;
            }
        }
    }

    // ── Ticks ────────────────────────────────────────────────────

    pub fn tick_due(&self, now: Instant) -> bool {
        self.next_tick.is_some_and(|t| now >= t)
    }

    /// Run one periodic update and decide whether another is needed.
    pub fn on_tick(&mut self, now: Instant) {
        let outcome = self.timer.tick(now);
        if let Some(display) = outcome.display {
            self.label = display;
        }
        if outcome.finished.is_some() {
            self.notice = Some(Notice::info(BREAK_FINISHED_TITLE, BREAK_FINISHED_BODY));
        }
        self.next_tick = if outcome.reschedule {
            Some(now + self.tick_interval)
        } else {
            None
        };
    }

    /// How long the loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.next_tick {
            Some(t) => t.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    // ── Input ────────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.notice.is_some() {
            self.notice = None;
            return;
        }
        if self.focus == Focus::Fraction {
            self.edit_fraction(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc if self.view == View::Chart => self.view = View::Timer,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') => self.press(Control::Primary, now),
            KeyCode::Char('x') => self.press(Control::Stop, now),
            KeyCode::Char('c') => self.press(Control::Chart, now),
            KeyCode::Char(' ') => self.toggle(now),
            KeyCode::Tab | KeyCode::Char('f') if self.view == View::Timer => {
                self.focus = Focus::Fraction;
            }
            _ => {}
        }
    }

    fn edit_fraction(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Controls,
            KeyCode::Backspace => {
                self.fraction.pop();
            }
            KeyCode::Char(c) if self.fraction.chars().count() < MAX_FRACTION_LEN => {
                self.fraction.push(c);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.notice.is_some() {
            self.notice = None;
            return;
        }
        if let Some(control) = self.buttons.hit(mouse.column, mouse.row) {
            self.focus = Focus::Controls;
            self.press(control, now);
        } else if self.view == View::Timer
            && self
                .fraction_area
                .contains(Position::new(mouse.column, mouse.row))
        {
            self.focus = Focus::Fraction;
        } else {
            self.focus = Focus::Controls;
        }
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the timer UI. Blocks until the user quits (q / Esc / Ctrl-C) and
/// returns the sessions recorded during the run.
pub fn run_timer(config: &Config, fraction: String) -> anyhow::Result<SessionLog> {
    let mut app = App::new(config, fraction);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.map(|()| app.into_sessions())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        if app.tick_due(Instant::now()) {
            app.on_tick(Instant::now());
        }

        terminal.draw(|f| render(f, app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let footer_height = if app.show_key_hints { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Min(10),               // Main content
            Constraint::Length(footer_height), // Key hints
        ])
        .split(size);

    render_header(f, chunks[0], app);
    match app.view {
        View::Timer => render_timer_view(f, chunks[1], app),
        View::Chart => render_chart_view(f, chunks[1], app),
    }
    if app.show_key_hints {
        render_footer(f, chunks[2], app);
    }

    if let Some(notice) = &app.notice {
        widgets::notice::render(f, size, notice);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let phase = app.timer.phase();
    let title = Line::from(vec![
        Span::styled(" Jonodoro ", Theme::header()),
        Span::styled(format!("· {} ", phase.name()), Theme::clock(&phase)),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let p = Paragraph::new(Line::from(Span::styled(
        format!(" break = work \u{00d7} {}", app.fraction),
        Theme::text_dim(),
    )))
    .block(block);
    f.render_widget(p, area);
}

fn render_timer_view(f: &mut Frame, area: Rect, app: &mut App) {
    let mut constraints = vec![
        Constraint::Length(5), // Clock
        Constraint::Length(3), // Buttons
        Constraint::Length(3), // Fraction field
    ];
    if app.show_history {
        constraints.push(Constraint::Min(3));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let phase = app.timer.phase();
    let summary = data::summary(app.timer.sessions());
    widgets::clock::render(f, chunks[0], &app.label, &phase, &summary);
    app.buttons = widgets::controls::render(f, chunks[1], &app.timer.controls(), false);
    widgets::fraction::render(f, chunks[2], &app.fraction, app.focus == Focus::Fraction);
    app.fraction_area = chunks[2];

    if app.show_history {
        let rows = data::history_rows(app.timer.sessions());
        widgets::history::render(f, chunks[3], &rows);
    }
}

fn render_chart_view(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    app.buttons = widgets::controls::render(f, chunks[0], &app.timer.controls(), true);
    app.fraction_area = Rect::default();

    match ChartData::from_sessions(app.timer.sessions()) {
        Some(chart) => widgets::chart::render(f, chunks[1], &chart),
        None => app.view = View::Timer,
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = if app.focus == Focus::Fraction {
        Line::from(vec![
            Span::styled(" type", Theme::key_hint()),
            Span::styled(" edit fraction  ", Theme::key_desc()),
            Span::styled("Enter/Esc/Tab", Theme::key_hint()),
            Span::styled(" done", Theme::key_desc()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" q", Theme::key_hint()),
            Span::styled(" quit  ", Theme::key_desc()),
            Span::styled("space", Theme::key_hint()),
            Span::styled(" start/stop/end break  ", Theme::key_desc()),
            Span::styled("s", Theme::key_hint()),
            Span::styled(" start/end break  ", Theme::key_desc()),
            Span::styled("x", Theme::key_hint()),
            Span::styled(" stop work  ", Theme::key_desc()),
            Span::styled("c", Theme::key_hint()),
            Span::styled(" chart  ", Theme::key_desc()),
            Span::styled("Tab", Theme::key_hint()),
            Span::styled(" fraction", Theme::key_desc()),
        ])
    };

    f.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::BreakEnd;
    use crossterm::event::KeyEventState;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        App::new(&Config::default(), "1/3".into())
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_new_app_is_idle() {
        let a = app();
        assert_eq!(a.label(), "00:00:00");
        assert_eq!(a.view(), View::Timer);
        assert!(a.next_tick().is_none());
        assert!(a.notice().is_none());
    }

    #[test]
    fn test_start_arms_immediate_tick() {
        let mut a = app();
        let t0 = Instant::now();
        a.handle_key(key(KeyCode::Char('s')), t0);
        assert_eq!(a.next_tick(), Some(t0));
        assert!(a.tick_due(t0));
        a.on_tick(t0 + Duration::from_secs(3));
        assert_eq!(a.label(), "00:00:03");
        assert_eq!(a.next_tick(), Some(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn test_stop_key_ignored_while_idle() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('x')), Instant::now());
        assert!(a.notice().is_none());
        assert!(a.next_tick().is_none());
    }

    #[test]
    fn test_break_finishes_with_notice_and_stops_ticking() {
        let mut a = app();
        let t0 = Instant::now();
        a.handle_key(key(KeyCode::Char(' ')), t0);
        a.handle_key(key(KeyCode::Char(' ')), t0 + Duration::from_secs(30));
        a.on_tick(t0 + Duration::from_secs(31));
        assert_eq!(a.label(), "Break: 00:00:09");
        a.on_tick(t0 + Duration::from_secs(41));
        assert_eq!(a.notice().unwrap().title, BREAK_FINISHED_TITLE);
        assert!(a.next_tick().is_none());
        assert_eq!(a.timer().sessions().len(), 1);

        // Any key dismisses without acting.
        a.handle_key(key(KeyCode::Char('s')), t0 + Duration::from_secs(42));
        assert!(a.notice().is_none());
        assert!(a.next_tick().is_none());
    }

    #[test]
    fn test_into_sessions_after_early_end() {
        let mut a = app();
        let t0 = Instant::now();
        a.handle_key(key(KeyCode::Char('s')), t0);
        a.handle_key(key(KeyCode::Char('x')), t0 + Duration::from_secs(60));
        a.handle_key(key(KeyCode::Char('s')), t0 + Duration::from_secs(65));
        let sessions = a.into_sessions();
        assert_eq!(sessions.len(), 1);
        let session = sessions.last().unwrap();
        assert_eq!(session.ended, BreakEnd::Early);
        assert!((session.break_seconds - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_bad_fraction_shows_error() {
        let mut a = App::new(&Config::default(), "abc".into());
        let t0 = Instant::now();
        a.handle_key(key(KeyCode::Char('s')), t0);
        a.handle_key(key(KeyCode::Char('x')), t0 + Duration::from_secs(5));
        let notice = a.notice().unwrap();
        assert_eq!(notice.title, "Error");
        assert!(notice.body.contains("Invalid fraction"));
        assert!(a.timer().sessions().is_empty());
        assert_eq!(a.timer().controls().primary_label, "Start Work");
    }

    #[test]
    fn test_fraction_editing() {
        let mut a = app();
        a.handle_key(key(KeyCode::Tab), Instant::now());
        assert_eq!(a.focus(), Focus::Fraction);
        for _ in 0..3 {
            a.handle_key(key(KeyCode::Backspace), Instant::now());
        }
        for c in "1/4".chars() {
            a.handle_key(key(KeyCode::Char(c)), Instant::now());
        }
        a.handle_key(key(KeyCode::Char(' ')), Instant::now());
        // Space is text while the field has focus, not the toggle.
        assert!(a.next_tick().is_none());
        a.handle_key(key(KeyCode::Backspace), Instant::now());
        a.handle_key(key(KeyCode::Enter), Instant::now());
        assert_eq!(a.focus(), Focus::Controls);
        assert_eq!(a.fraction(), "1/4");
    }

    #[test]
    fn test_chart_without_sessions_shows_notice() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('c')), Instant::now());
        assert_eq!(a.view(), View::Timer);
        assert_eq!(a.notice().unwrap().title, NO_DATA_TITLE);
    }

    #[test]
    fn test_chart_opens_after_a_session() {
        let mut a = app();
        let t0 = Instant::now();
        a.handle_key(key(KeyCode::Char(' ')), t0);
        a.handle_key(key(KeyCode::Char(' ')), t0 + Duration::from_secs(60));
        a.handle_key(key(KeyCode::Char(' ')), t0 + Duration::from_secs(65));
        a.handle_key(key(KeyCode::Char('c')), t0 + Duration::from_secs(66));
        assert_eq!(a.view(), View::Chart);
        assert!(screen_text(&mut a).contains("Session 1"));
        a.handle_key(key(KeyCode::Esc), t0 + Duration::from_secs(67));
        assert_eq!(a.view(), View::Timer);
        assert!(!a.should_quit());
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        a.handle_key(key(KeyCode::Char('q')), Instant::now());
        assert!(a.should_quit());

        let mut a = app();
        a.handle_key(
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
            Instant::now(),
        );
        assert!(a.should_quit());
    }

    #[test]
    fn test_render_shows_controls() {
        let mut a = app();
        let text = screen_text(&mut a);
        assert!(text.contains("Start Work"));
        assert!(text.contains("Stop Work"));
        assert!(text.contains("Show Chart"));
        assert!(text.contains("00:00:00"));
    }

    #[test]
    fn test_mouse_click_on_primary_button() {
        let mut a = app();
        screen_text(&mut a);
        let area = a.buttons.primary;
        let t0 = Instant::now();
        a.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: area.x + 1,
                row: area.y + 1,
                modifiers: KeyModifiers::NONE,
            },
            t0,
        );
        assert!(matches!(
            a.timer().phase(),
            crate::timer::Phase::Working { .. }
        ));
    }

    #[test]
    fn test_poll_timeout_bounded() {
        let mut a = app();
        let t0 = Instant::now();
        assert_eq!(a.poll_timeout(t0), IDLE_POLL);
        a.press(Control::Primary, t0);
        assert_eq!(a.poll_timeout(t0), Duration::ZERO);
    }
}
