//! # counsel-drilldown
//!
//! `counsel-drilldown` is the drill-down engine behind a legal practice
//! dashboard. A dashboard widget names a record category (contracts,
//! matters, tasks, risks, compliance), a title, a module label and an
//! optional filter set; the [`controller::DrillDownController`] turns that
//! into a [`model::Session`]: filtered records plus the column schema that
//! displays them. Closing hides the session at once and discards it after
//! a short grace period.
//!
//! ## Core Concepts
//!
//! - **Catalog** ([`catalog`]): per category, a record generator and its
//!   column schema, authored side by side.
//! - **Record sources** ([`source`]): seeded synthetic records, or JSON
//!   fixtures, behind the [`source::RecordSource`] trait.
//! - **Controller** ([`controller`]): the single owner of the active
//!   session, with a generation-guarded deferred clear.
//! - **Presentation** ([`present`], [`reports`], [`tui`]): cell formatting,
//!   footer statistics, exportable reports and an interactive dashboard.
//! - **Relationships** ([`relationships`]): items linked to a record across
//!   modules.
//!
//! ## Getting Started
//!
//! ```
//! use counsel_drilldown::controller::DrillDownController;
//! use counsel_drilldown::filter::FilterMap;
//! use counsel_drilldown::present::SessionSummary;
//! use counsel_drilldown::source::SyntheticSource;
//!
//! let mut controller = DrillDownController::new(Box::new(SyntheticSource::seeded(42)));
//! let filters = FilterMap::new().with("status", "executed");
//! let session = controller.open_drill_down("contracts", "Executed Contracts", "Dashboard", Some(filters));
//!
//! assert_eq!(session.record_count(), 5);
//! assert_eq!(session.columns[0].label, "Contract Title");
//!
//! let summary = SessionSummary::compute(session, chrono::Utc::now(), 30);
//! assert!(summary.total_value.is_some());
//!
//! controller.close_drill_down();
//! assert!(!controller.is_slide_over_open());
//! ```
//!
//! ## Exporting a session
//!
//! ```
//! use counsel_drilldown::controller::DrillDownController;
//! use counsel_drilldown::reports::{create_reporter, ReportConfig, ReportFormat};
//! use counsel_drilldown::source::SyntheticSource;
//!
//! let mut controller = DrillDownController::new(Box::new(SyntheticSource::seeded(1)));
//! let session = controller.open_drill_down("risks", "Risks", "Risk Management", None);
//!
//! let reporter = create_reporter(ReportFormat::Csv, false).unwrap();
//! let csv = reporter.generate(session, &ReportConfig::default()).unwrap();
//! assert!(csv.starts_with("Risk Title,Category,Severity"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize/f64/u16 casts in layout math and statistics are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod model;
pub mod pipeline;
pub mod present;
pub mod relationships;
pub mod reports;
pub mod source;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use controller::{ControllerEvent, ControllerState, DrillDownController, OpenRequest};
pub use error::{DrillDownError, ErrorContext, OptionContext, Result};
pub use filter::FilterMap;
pub use model::{Category, ColumnDescriptor, ColumnKind, Record, RelatedItem, Session, Value};
pub use relationships::RelationshipService;
pub use reports::{ReportFormat, SessionReporter};
pub use source::{FixtureSource, RecordSource, SyntheticSource};
