//! Presentation helpers shared by reports and the dashboard.
//!
//! Formatting is driven by each column's [`ColumnKind`](crate::model::ColumnKind);
//! summary statistics are computed over a whole session.

mod format;
mod summary;

pub use format::{
    format_cell, format_currency, format_number, format_value, truncate_to_width, FormatOptions,
    DEFAULT_DATE_FORMAT,
};
pub use summary::{SessionSummary, DEFAULT_DUE_SOON_DAYS, SUCCESS_STATUSES};
