//! Event polling and key handling for the dashboard.

use super::app::{DashboardApp, Focus};
use super::theme::toggle_theme;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick (drives deferred clears and the slide-out)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event, yielding `Tick` when none arrives in time
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match (app.focus(), key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('T')) => {
            let name = toggle_theme();
            app.status_message = Some(format!("theme: {name}"));
        }

        (Focus::Cards, KeyCode::Enter) => app.open_selected_card(),
        (Focus::Cards, KeyCode::Right | KeyCode::Char('l')) => app.grid.right(),
        (Focus::Cards, KeyCode::Left | KeyCode::Char('h')) => app.grid.left(),
        (Focus::Cards, KeyCode::Down | KeyCode::Char('j')) => app.grid.down(),
        (Focus::Cards, KeyCode::Up | KeyCode::Char('k')) => app.grid.up(),

        (Focus::SlideOver, KeyCode::Esc) => app.close_slide_over(),
        (Focus::SlideOver, KeyCode::Char('r')) => app.toggle_related(),
        (Focus::SlideOver, KeyCode::Down | KeyCode::Char('j')) => app.select_next_row(),
        (Focus::SlideOver, KeyCode::Up | KeyCode::Char('k')) => app.select_prev_row(),
        (Focus::SlideOver, KeyCode::PageDown) => app.page_down(),
        (Focus::SlideOver, KeyCode::PageUp) => app.page_up(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::controller::{ControllerState, DrillDownController};
    use crate::source::SyntheticSource;

    fn press(app: &mut DashboardApp, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> DashboardApp {
        let controller = DrillDownController::new(Box::new(SyntheticSource::seeded(5)));
        DashboardApp::new(controller, &AppConfig::default()).unwrap()
    }

    #[test]
    fn test_enter_opens_and_esc_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller().state(), ControllerState::Open);
        assert_eq!(app.session().map(|s| s.title.as_str()), Some("Active Matters"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller().state(), ControllerState::Closing);
        assert_eq!(app.focus(), Focus::Cards);
    }

    #[test]
    fn test_row_keys_only_when_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.grid.selected, 4);
        assert_eq!(app.rows.selected, 0);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.rows.selected, 1);
        assert_eq!(app.grid.selected, 4);
    }

    #[test]
    fn test_r_toggles_related() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.session().unwrap().show_relationships);
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.session().unwrap().show_relationships);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
