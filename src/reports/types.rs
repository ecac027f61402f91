//! Report type definitions.

use crate::present::{FormatOptions, DEFAULT_DUE_SOON_DAYS};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for a drill-down session
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: TUI if TTY, table otherwise
    #[default]
    Auto,
    /// Interactive slide-over in the terminal
    Tui,
    /// Aligned table with a statistics footer
    Table,
    /// Title, filters and statistics only
    Summary,
    /// Session payload with raw values
    Json,
    /// CSV for spreadsheet import
    Csv,
}

impl ReportFormat {
    /// Whether this format renders to text without a terminal UI.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        !matches!(self, Self::Auto | Self::Tui)
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Tui => write!(f, "tui"),
            Self::Table => write!(f, "table"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Settings shared by every reporter.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub format_options: FormatOptions,
    /// Reference time for due-soon statistics
    pub now: DateTime<Utc>,
    pub due_soon_days: i64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format_options: FormatOptions::default(),
            now: Utc::now(),
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }
}
