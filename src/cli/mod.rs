//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod catalog;
mod dashboard;
mod open;
mod related;

pub use catalog::{list_categories, run_categories, run_columns, CategoryInfo};
pub use dashboard::run_dashboard;
pub use open::{open_session, run_open, OpenConfig};
pub use related::{find_related, run_related, RelatedQuery};
