//! Terminal setup, event loop and top-level layout.

use super::app::{DashboardApp, Focus};
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{render_footer_hints, FooterHints, Styles};
use super::views;
use super::widgets::{check_terminal_size, render_size_warning};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::Paragraph};
use std::io::{self, stdout};

/// Run the dashboard until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_dashboard_tui(app: &mut DashboardApp) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut DashboardApp) -> io::Result<()> {
    let events = EventHandler::new(app.tick_rate);
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) | Event::Tick => {}
        }
        // ticks after key events too
        app.on_tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
pub(crate) fn render(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, chunks[0], app);

    let percent = app.slide_over_percent();
    if percent == 0 {
        views::render_cards(frame, chunks[1], app);
    } else {
        let body = Layout::horizontal([
            Constraint::Percentage(100 - percent),
            Constraint::Percentage(percent),
        ])
        .split(chunks[1]);
        views::render_cards(frame, body[0], app);
        views::render_slide_over(frame, body[1], app);
    }

    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut spans = vec![Span::styled(" Counsel Dashboard ", Styles::header_title())];
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(format!("  {message}"), Styles::text_muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let hints = match app.focus() {
        Focus::Cards => FooterHints::dashboard(),
        Focus::SlideOver => FooterHints::slide_over(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(render_footer_hints(&hints))).style(Styles::status_bar()),
        area,
    );
}
