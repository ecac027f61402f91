//! Dashboard application state.

use super::cards::{default_cards, MetricCard};
use super::constants::{CARD_COLUMNS, SLIDE_OVER_PERCENT};
use super::state::{GridState, ListNavigation, ListState};
use super::widgets::shrink_width;
use crate::config::AppConfig;
use crate::controller::{ControllerEvent, ControllerState, DrillDownController};
use crate::error::Result;
use crate::model::{RelatedItem, Session};
use crate::pipeline::build_source;
use crate::present::FormatOptions;
use crate::relationships::RelationshipService;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Which part of the screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Cards,
    SlideOver,
}

/// State of the interactive dashboard.
pub struct DashboardApp {
    controller: DrillDownController,
    relationships: RelationshipService,
    events: Rc<RefCell<Vec<ControllerEvent>>>,
    pub cards: Vec<MetricCard>,
    /// Headline per card, same order as `cards`
    pub headlines: Vec<String>,
    pub grid: GridState,
    pub rows: ListState,
    pub format_options: FormatOptions,
    pub due_soon_days: i64,
    pub tick_rate: Duration,
    /// Show relationships for the selected row whenever a session opens
    pub auto_related: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub tick: u64,
}

impl DashboardApp {
    /// Build the dashboard around `controller`. A session already open on
    /// the controller is shown in the slide-over.
    pub fn new(mut controller: DrillDownController, config: &AppConfig) -> Result<Self> {
        let source = build_source(config)?;
        let cards = default_cards();
        let headlines = cards.iter().map(|c| c.headline(source.as_ref())).collect();

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        controller.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let rows = ListState::with_total(controller.drill_down_data().map_or(0, Session::record_count));
        let mut app = Self {
            controller,
            relationships: RelationshipService::builtin()?,
            events,
            grid: GridState::new(cards.len(), CARD_COLUMNS),
            cards,
            headlines,
            rows,
            format_options: config.presentation.format_options(),
            due_soon_days: config.presentation.due_soon_days,
            tick_rate: config.tui.tick_rate(),
            auto_related: config.tui.show_relationships,
            status_message: None,
            should_quit: false,
            tick: 0,
        };
        if app.auto_related {
            app.sync_related();
        }
        Ok(app)
    }

    #[must_use]
    pub const fn controller(&self) -> &DrillDownController {
        &self.controller
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        if self.controller.is_slide_over_open() {
            Focus::SlideOver
        } else {
            Focus::Cards
        }
    }

    /// The session backing the slide-over, including while it slides out.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.controller.drill_down_data()
    }

    /// Open the drill-down bound to the selected card.
    pub fn open_selected_card(&mut self) {
        let Some(card) = self.cards.get(self.grid.selected) else {
            return;
        };
        let (category, title, filters) = (card.category.clone(), card.title, card.filter_map());
        let records = self
            .controller
            .open_drill_down(category, title, "Dashboard", filters)
            .record_count();
        self.rows = ListState::with_total(records);
        if self.auto_related {
            self.sync_related();
        }
    }

    /// Hide the slide-over; the controller clears it after its grace period.
    pub fn close_slide_over(&mut self) {
        self.controller.close_drill_down();
    }

    /// Show or hide the related-items panel for the selected row.
    pub fn toggle_related(&mut self) {
        let showing = self.session().is_some_and(|s| s.show_relationships);
        if showing {
            self.auto_related = false;
            self.controller.show_related(None);
        } else {
            self.auto_related = true;
            self.sync_related();
        }
    }

    pub fn select_next_row(&mut self) {
        self.rows.select_next();
        self.after_row_move();
    }

    pub fn select_prev_row(&mut self) {
        self.rows.select_prev();
        self.after_row_move();
    }

    pub fn page_down(&mut self) {
        self.rows.page_down();
        self.after_row_move();
    }

    pub fn page_up(&mut self) {
        self.rows.page_up();
        self.after_row_move();
    }

    /// Id of the highlighted row.
    #[must_use]
    pub fn selected_record_id(&self) -> Option<&str> {
        self.session()?.data.get(self.rows.selected)?.id()
    }

    /// Items linked to the row the relationships panel points at.
    #[must_use]
    pub fn related_items(&self) -> &[RelatedItem] {
        let Some(session) = self.session().filter(|s| s.wants_relationships()) else {
            return &[];
        };
        match (&session.selected_item_id, &session.item_type) {
            (Some(id), Some(item_type)) => self.relationships.related_items(id, item_type),
            _ => &[],
        }
    }

    /// Slide-over width as a percentage of the screen: full while open,
    /// shrinking over the grace period while closing, zero when idle.
    #[must_use]
    pub fn slide_over_percent(&self) -> u16 {
        match self.controller.state() {
            ControllerState::Open => SLIDE_OVER_PERCENT,
            ControllerState::Closing => shrink_width(
                SLIDE_OVER_PERCENT,
                self.controller.closing_progress().unwrap_or(1.0),
            ),
            ControllerState::Idle => 0,
        }
    }

    /// Advance deferred clears and fold controller events into the status line.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.controller.tick() {
            self.rows = ListState::default();
        }
        let events: Vec<ControllerEvent> = self.events.borrow_mut().drain(..).collect();
        for event in events {
            match event {
                ControllerEvent::Opened { records, .. } => {
                    self.status_message = Some(format!("{records} records"));
                }
                ControllerEvent::Hidden { .. } | ControllerEvent::Cleared { .. } => {
                    self.status_message = None;
                }
                ControllerEvent::StaleClearDropped { .. } => {}
            }
        }
    }

    fn after_row_move(&mut self) {
        if self.session().is_some_and(|s| s.show_relationships) {
            self.sync_related();
        }
    }

    fn sync_related(&mut self) {
        let id = self.selected_record_id().map(str::to_string);
        if let Some(id) = id {
            self.controller.show_related(Some(&id));
        }
    }
}
