//! Configuration for counsel-drilldown.
//!
//! - Type-safe configuration structures with defaults
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.counsel-drilldown.yaml` file in your project root or
//! `~/.config/counsel-drilldown/`:
//!
//! ```yaml
//! drilldown:
//!   grace_period_ms: 300
//!   seed: 42
//! presentation:
//!   date_format: "%Y-%m-%d"
//! output:
//!   format: table
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_GRACE_PERIOD_MS, DEFAULT_MAX_CELL_WIDTH, DEFAULT_SEED, DEFAULT_TICK_RATE_MS,
};
pub use file::{
    default_config_path, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError,
};
pub use types::{
    AppConfig, AppConfigBuilder, DrillDownConfig, OutputConfig, PresentationConfig, TuiConfig,
};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.counsel-drilldown.yaml`.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).map_err(|e| {
        crate::error::DrillDownError::report(
            "serializing config schema",
            crate::error::ReportErrorKind::JsonSerialization(e.to_string()),
        )
    })
}
