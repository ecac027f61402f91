//! Configuration types for counsel-drilldown.

use super::defaults::{
    DEFAULT_GRACE_PERIOD_MS, DEFAULT_MAX_CELL_WIDTH, DEFAULT_SEED, DEFAULT_TICK_RATE_MS,
};
use crate::present::{FormatOptions, DEFAULT_DATE_FORMAT, DEFAULT_DUE_SOON_DAYS};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration loaded from a YAML file and CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Controller and record source settings
    pub drilldown: DrillDownConfig,
    /// Cell formatting and statistics
    pub presentation: PresentationConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Dashboard settings
    pub tui: TuiConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn grace_period_ms(mut self, ms: u64) -> Self {
        self.config.drilldown.grace_period_ms = ms;
        self
    }

    /// Seed for synthetic data; `None` draws from OS entropy.
    pub const fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.drilldown.seed = seed;
        self
    }

    pub fn fixtures(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.drilldown.fixtures = Some(path.into());
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        self.config.presentation.date_format = pattern.into();
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Controller and record source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DrillDownConfig {
    /// Delay between hiding a session and clearing it, in milliseconds
    pub grace_period_ms: u64,
    /// Seed for synthetic records; null for fresh data on every open
    pub seed: Option<u64>,
    /// JSON file of records per category, replacing synthetic data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixtures: Option<PathBuf>,
}

impl DrillDownConfig {
    #[must_use]
    pub const fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }
}

impl Default for DrillDownConfig {
    fn default() -> Self {
        Self {
            grace_period_ms: DEFAULT_GRACE_PERIOD_MS,
            seed: Some(DEFAULT_SEED),
            fixtures: None,
        }
    }
}

/// Cell formatting and statistics configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PresentationConfig {
    /// Window for the "due soon" statistic, in days
    #[schemars(range(min = 0))]
    pub due_soon_days: i64,
    /// strftime pattern for date columns
    pub date_format: String,
    /// Display-width limit for table cells; 0 disables truncation
    pub max_cell_width: usize,
}

impl PresentationConfig {
    /// Cell formatting options derived from this section.
    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            date_format: self.date_format.clone(),
            max_cell_width: (self.max_cell_width > 0).then_some(self.max_cell_width),
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Event-loop tick interval, in milliseconds
    #[schemars(range(min = 1))]
    pub tick_rate_ms: u64,
    /// Open the relationships panel with each drill-down
    pub show_relationships: bool,
}

impl TuiConfig {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            show_relationships: false,
        }
    }
}
