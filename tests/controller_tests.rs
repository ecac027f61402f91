//! Controller lifecycle tests.
//!
//! Open, close, grace-period clear and the open-during-grace race, driven by
//! a manual clock so no test sleeps.

use counsel_drilldown::catalog;
use counsel_drilldown::controller::{
    ControllerEvent, ControllerState, DrillDownController, ManualClock, OpenRequest,
};
use counsel_drilldown::error::{DrillDownError, Result};
use counsel_drilldown::filter::FilterMap;
use counsel_drilldown::model::{Category, Record, Value};
use counsel_drilldown::source::{FixtureSource, RecordSource, SyntheticSource};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

const GRACE: Duration = Duration::from_millis(300);

fn controller() -> (DrillDownController, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let controller = DrillDownController::new(Box::new(SyntheticSource::seeded(2024)))
        .with_clock(clock.clone())
        .with_grace_period(GRACE);
    (controller, clock)
}

fn all_have(records: &[Record], key: &str, value: &str) -> bool {
    records
        .iter()
        .all(|r| r.get(key) == Some(&Value::from(value)))
}

// ============================================================================
// Opening
// ============================================================================

mod open {
    use super::*;

    #[test]
    fn executed_contracts_are_filtered() {
        let (mut controller, _) = controller();
        let session = controller.open_drill_down(
            "contracts",
            "Active Contracts",
            "Dashboard",
            Some(FilterMap::new().with("status", "executed")),
        );
        assert!(!session.data.is_empty());
        assert!(all_have(&session.data, "status", "executed"));
        assert_eq!(session.columns[0].key, "title");
        assert_eq!(session.title, "Active Contracts");
        assert_eq!(session.module, "Dashboard");
        assert!(controller.is_slide_over_open());
    }

    #[test]
    fn unknown_category_opens_empty_with_generic_columns() {
        let (mut controller, _) = controller();
        let session =
            controller.open_drill_down("not-a-real-category", "Mystery", "Dashboard", None);
        assert!(session.data.is_empty());
        assert!(session.error.is_none());
        let keys: Vec<&str> = session.columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["id", "title", "status"]);
        assert_eq!(controller.state(), ControllerState::Open);
    }

    #[test]
    fn second_open_replaces_first() {
        let (mut controller, _) = controller();
        controller.open_drill_down("contracts", "Contracts", "Dashboard", None);
        let first_id = controller.drill_down_data().map(|s| s.id.clone());
        controller.open_drill_down("matters", "Matters", "Dashboard", None);

        let session = controller.drill_down_data().unwrap();
        assert_eq!(session.category, Category::Matters);
        assert_ne!(Some(session.id.clone()), first_id);
        assert_eq!(session.generation, 2);
        assert!(controller.is_slide_over_open());
    }

    #[test]
    fn request_carries_relationship_flags() {
        let (mut controller, _) = controller();
        let session = controller.open(
            OpenRequest::new(Category::Contracts, "Contract", "Contract Management")
                .relationships("contract", "contract-001")
                .on_related_item_click(|_| {}),
        );
        assert!(session.wants_relationships());
        assert!(session.on_related_item_click.is_some());
        assert_eq!(session.selected_record().and_then(Record::id), Some("contract-001"));
    }

    #[test]
    fn fixture_source_is_served_verbatim() {
        let path =
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/records.json");
        let source = FixtureSource::from_path(&path).unwrap();
        let mut controller = DrillDownController::new(Box::new(source));
        let session = controller.open_drill_down(
            "risks",
            "Critical",
            "Risk Management",
            Some(FilterMap::new().with("severity", "critical")),
        );
        assert_eq!(session.record_count(), 1);
        assert_eq!(session.data[0].id(), Some("risk-001"));
    }
}

// ============================================================================
// Closing and the grace period
// ============================================================================

mod close {
    use super::*;

    #[test]
    fn hides_before_clearing() {
        let (mut controller, clock) = controller();
        controller.open_drill_down("tasks", "Tasks", "Dashboard", None);
        controller.close_drill_down();

        assert!(!controller.is_slide_over_open());
        assert!(controller.drill_down_data().is_some());
        assert_eq!(controller.state(), ControllerState::Closing);

        clock.advance(GRACE - Duration::from_millis(1));
        assert!(!controller.tick());
        assert!(controller.drill_down_data().is_some());

        clock.advance(Duration::from_millis(1));
        assert!(controller.tick());
        assert!(controller.drill_down_data().is_none());
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn close_while_idle_is_noop() {
        let (mut controller, _) = controller();
        controller.close_drill_down();
        assert_eq!(controller.state(), ControllerState::Idle);
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn repeated_close_keeps_first_deadline() {
        let (mut controller, clock) = controller();
        controller.open_drill_down("risks", "Risks", "Dashboard", None);
        controller.close_drill_down();
        let deadline = controller.next_deadline();

        clock.advance(Duration::from_millis(200));
        controller.close_drill_down();
        assert_eq!(controller.next_deadline(), deadline);

        clock.advance(Duration::from_millis(100));
        assert!(controller.tick());
    }

    #[test]
    fn reopen_during_grace_survives_stale_clear() {
        let (mut controller, clock) = controller();
        controller.open_drill_down(
            "risks",
            "High Risks",
            "Dashboard",
            Some(FilterMap::new().with("severity", "critical")),
        );
        controller.close_drill_down();

        clock.advance(Duration::from_millis(100));
        controller.open_drill_down("tasks", "Tasks", "Dashboard", None);

        clock.advance(GRACE);
        assert!(!controller.tick());

        let session = controller.drill_down_data().unwrap();
        assert_eq!(session.category, Category::Tasks);
        assert!(session.data.iter().all(|r| r
            .id()
            .is_some_and(|id| id.starts_with("task-"))));
        assert!(controller.is_slide_over_open());
    }

    #[test]
    fn closing_progress_tracks_grace() {
        let (mut controller, clock) = controller();
        assert_eq!(controller.closing_progress(), None);
        controller.open_drill_down("matters", "Matters", "Dashboard", None);
        assert_eq!(controller.closing_progress(), None);

        controller.close_drill_down();
        assert_eq!(controller.closing_progress(), Some(0.0));
        clock.advance(Duration::from_millis(150));
        let progress = controller.closing_progress().unwrap();
        assert!((progress - 0.5).abs() < 1e-9);
    }
}

// ============================================================================
// Events and failures
// ============================================================================

mod events {
    use super::*;

    struct BrokenSource;

    impl RecordSource for BrokenSource {
        fn name(&self) -> &str {
            "broken"
        }

        fn fetch(&self, _category: &Category) -> Result<Vec<Record>> {
            Err(DrillDownError::unavailable("fetching records", "backend offline"))
        }
    }

    #[test]
    fn lifecycle_events_in_order() {
        let (mut controller, clock) = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        controller.open_drill_down("compliance", "Compliance", "Dashboard", None);
        controller.close_drill_down();
        clock.advance(Duration::from_millis(50));
        controller.open_drill_down("contracts", "Contracts", "Dashboard", None);
        clock.advance(GRACE);
        controller.tick();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(matches!(seen[0], ControllerEvent::Opened { records: 15, .. }));
        assert!(matches!(seen[1], ControllerEvent::Hidden { .. }));
        assert!(matches!(seen[2], ControllerEvent::Opened { records: 25, .. }));
        assert_eq!(
            seen[3],
            ControllerEvent::StaleClearDropped {
                scheduled_for: 1,
                current: 2
            }
        );
    }

    #[test]
    fn source_failure_opens_empty_session_with_error() {
        let mut controller = DrillDownController::new(Box::new(BrokenSource));
        let session = controller.open_drill_down("contracts", "Contracts", "Dashboard", None);
        assert!(session.data.is_empty());
        assert!(session.error.as_deref().is_some_and(|e| e.contains("backend offline")));
        assert_eq!(
            session.columns.len(),
            catalog::get_columns(&Category::Contracts).len()
        );
        assert!(controller.is_slide_over_open());
    }

    #[test]
    fn independent_controllers_do_not_interfere() {
        let (mut a, _) = controller();
        let (mut b, _) = controller();
        a.open_drill_down("contracts", "A", "Dashboard", None);
        b.open_drill_down("tasks", "B", "Dashboard", None);
        a.close_drill_down();
        assert!(b.is_slide_over_open());
        assert_eq!(b.drill_down_data().map(|s| s.title.as_str()), Some("B"));
    }
}
