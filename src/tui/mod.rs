//! Interactive drill-down dashboard using ratatui.
//!
//! A grid of metric cards, each bound to a category and filter set.
//! Activating a card opens a drill-down through the controller; the
//! slide-over renders the session and slides out over the grace period
//! after `Esc`, while the event loop ticks the controller so the session is
//! cleared once the grace period has passed.

mod app;
mod cards;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
mod ui;
mod views;
pub(crate) mod widgets;

pub use app::{DashboardApp, Focus};
pub use cards::{default_cards, CardMetric, MetricCard};
pub use events::{handle_key_event, Event, EventHandler};
pub use state::{GridState, ListNavigation, ListState};
pub use theme::{colors, toggle_theme, ColorScheme, Styles, Theme};
pub use ui::run_dashboard_tui;
