//! Drill-down session controller.
//!
//! [`DrillDownController`] owns at most one [`Session`] and the visibility
//! flag of the surface rendering it. Opening is synchronous and always
//! succeeds; closing hides the surface at once and clears the session after
//! a grace period so an exit transition can finish with data still present.
//!
//! The deferred clear is a `(generation, deadline)` pair driven by
//! [`DrillDownController::tick`]. Every open bumps the generation, so a
//! clear scheduled before a later open is dropped when it comes due instead
//! of wiping the newer session.
//!
//! ```
//! use counsel_drilldown::controller::{ControllerState, DrillDownController, ManualClock};
//! use counsel_drilldown::source::SyntheticSource;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let clock = Arc::new(ManualClock::new());
//! let mut controller = DrillDownController::new(Box::new(SyntheticSource::seeded(7)))
//!     .with_clock(clock.clone());
//!
//! controller.open_drill_down("contracts", "Active Contracts", "Dashboard", None);
//! controller.close_drill_down();
//! assert_eq!(controller.state(), ControllerState::Closing);
//!
//! clock.advance(Duration::from_millis(300));
//! controller.tick();
//! assert!(controller.drill_down_data().is_none());
//! ```

mod clock;
mod request;

pub use clock::{Clock, ManualClock, SystemClock};
pub use request::OpenRequest;

use crate::catalog;
use crate::filter::FilterMap;
use crate::model::{Category, RelatedItemType, Session};
use crate::source::RecordSource;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Grace period between hiding a session and dropping it.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_millis(300);

/// Observable controller state, derived from the session and visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No session, nothing shown
    Idle,
    /// Session present and visible
    Open,
    /// Session hidden, waiting for its deferred clear
    Closing,
}

impl std::fmt::Display for ControllerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Open => write!(f, "open"),
            Self::Closing => write!(f, "closing"),
        }
    }
}

/// Lifecycle notifications delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    Opened {
        session_id: String,
        category: Category,
        records: usize,
    },
    Hidden {
        session_id: String,
    },
    Cleared {
        session_id: String,
    },
    /// A deferred clear came due after a newer open and was ignored
    StaleClearDropped {
        scheduled_for: u64,
        current: u64,
    },
}

#[derive(Debug, Clone, Copy)]
struct PendingClear {
    generation: u64,
    due: Instant,
}

type Listener = Box<dyn FnMut(&ControllerEvent)>;

/// Single owner of the active drill-down session.
pub struct DrillDownController {
    source: Box<dyn RecordSource>,
    clock: Arc<dyn Clock>,
    grace_period: Duration,
    session: Option<Session>,
    visible: bool,
    generation: u64,
    pending: Vec<PendingClear>,
    listeners: Vec<Listener>,
}

impl DrillDownController {
    #[must_use]
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            grace_period: DEFAULT_GRACE_PERIOD,
            session: None,
            visible: false,
            generation: 0,
            pending: Vec::new(),
            listeners: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Register a listener for lifecycle events.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ControllerEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Open a drill-down, replacing any current session.
    pub fn open_drill_down(
        &mut self,
        category: impl Into<Category>,
        title: &str,
        module: &str,
        filters: Option<FilterMap>,
    ) -> &Session {
        self.open(OpenRequest::new(category, title, module).maybe_filters(filters))
    }

    /// Open a drill-down from a full request.
    ///
    /// Source failures do not propagate: the session opens with no rows and
    /// `error` set.
    pub fn open(&mut self, request: OpenRequest) -> &Session {
        self.generation += 1;
        let generation = self.generation;

        let OpenRequest {
            category,
            title,
            module,
            filters,
            show_relationships,
            item_type,
            selected_item_id,
            on_related_item_click,
        } = request;

        let (data, error) = match self.source.query(&category, filters.as_ref()) {
            Ok(records) => (records, None),
            Err(err) => {
                tracing::warn!(
                    category = %category,
                    source = self.source.name(),
                    error = %err,
                    "record source failed; opening empty session"
                );
                (Vec::new(), Some(err.full_message()))
            }
        };

        let created_at = self.clock.utc();
        let session = Session {
            id: Session::make_id(&category, created_at, generation),
            columns: catalog::get_columns(&category),
            category,
            title,
            module,
            filters,
            data,
            show_relationships,
            item_type,
            selected_item_id,
            on_related_item_click,
            error,
            generation,
            created_at,
        };

        if let Some(previous) = &self.session {
            tracing::debug!(previous = %previous.id, "replacing session");
        }
        tracing::info!(
            session = %session.id,
            records = session.data.len(),
            "drill-down opened"
        );

        let event = ControllerEvent::Opened {
            session_id: session.id.clone(),
            category: session.category.clone(),
            records: session.data.len(),
        };
        self.visible = true;
        self.emit(&event);
        self.session.insert(session)
    }

    /// Hide the current session and schedule its clear.
    ///
    /// No-op when idle. Closing an already hidden session keeps the deadline
    /// scheduled by the first close.
    pub fn close_drill_down(&mut self) {
        let Some(session) = &self.session else {
            tracing::debug!("close requested while idle");
            return;
        };
        if !self.visible {
            tracing::debug!(session = %session.id, "close requested while closing");
            return;
        }

        let session_id = session.id.clone();
        self.visible = false;
        let due = self.clock.now() + self.grace_period;
        self.pending.push(PendingClear {
            generation: self.generation,
            due,
        });
        tracing::debug!(
            session = %session_id,
            grace_ms = self.grace_period.as_millis() as u64,
            "drill-down hidden"
        );
        self.emit(&ControllerEvent::Hidden { session_id });
    }

    /// Fire every deferred clear that has come due.
    ///
    /// Returns `true` if the current session was cleared.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        let mut cleared = false;
        for clear in due {
            if clear.generation != self.generation {
                tracing::debug!(
                    scheduled_for = clear.generation,
                    current = self.generation,
                    "dropping stale clear"
                );
                self.emit(&ControllerEvent::StaleClearDropped {
                    scheduled_for: clear.generation,
                    current: self.generation,
                });
                continue;
            }
            if let Some(session) = self.session.take() {
                tracing::info!(session = %session.id, "drill-down cleared");
                cleared = true;
                self.emit(&ControllerEvent::Cleared {
                    session_id: session.id,
                });
            }
        }
        cleared
    }

    /// Earliest pending clear, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// How far the current session is through its grace period, in `0.0..=1.0`.
    ///
    /// `None` unless closing.
    #[must_use]
    pub fn closing_progress(&self) -> Option<f64> {
        if self.state() != ControllerState::Closing {
            return None;
        }
        let clear = self
            .pending
            .iter()
            .find(|p| p.generation == self.generation)?;
        if self.grace_period.is_zero() {
            return Some(1.0);
        }
        let remaining = clear.due.saturating_duration_since(self.clock.now());
        let progress = 1.0 - remaining.as_secs_f64() / self.grace_period.as_secs_f64();
        Some(progress.clamp(0.0, 1.0))
    }

    #[must_use]
    pub const fn state(&self) -> ControllerState {
        match (&self.session, self.visible) {
            (None, _) => ControllerState::Idle,
            (Some(_), true) => ControllerState::Open,
            (Some(_), false) => ControllerState::Closing,
        }
    }

    /// The current session, including one that is hidden but not yet cleared.
    #[must_use]
    pub const fn drill_down_data(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn is_slide_over_open(&self) -> bool {
        self.visible
    }

    /// Number of opens so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// Point the relationships panel of the open session at one record, or
    /// hide it with `None`.
    ///
    /// Returns `false` when there is no visible session.
    pub fn show_related(&mut self, item_id: Option<&str>) -> bool {
        if !self.visible {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match item_id {
            Some(id) => {
                session.show_relationships = true;
                session.selected_item_id = Some(id.to_string());
                if session.item_type.is_none() {
                    session.item_type = RelatedItemType::parse(session.category.as_str())
                        .map(|t| t.as_str().to_string());
                }
            }
            None => {
                session.show_relationships = false;
                session.selected_item_id = None;
            }
        }
        true
    }

    fn emit(&mut self, event: &ControllerEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for DrillDownController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrillDownController")
            .field("source", &self.source.name())
            .field("state", &self.state())
            .field("generation", &self.generation)
            .field("pending", &self.pending.len())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
