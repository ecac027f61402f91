//! Configuration validation.

use super::defaults::MAX_DUE_SOON_DAYS;
use super::types::{AppConfig, DrillDownConfig, OutputConfig, PresentationConfig, TuiConfig};
use chrono::format::{Item, StrftimeItems};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Fail with every validation error, `; `-separated.
    fn ensure_valid(&self) -> crate::error::Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(crate::error::DrillDownError::config(details.join("; ")))
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.drilldown.validate());
        errors.extend(self.presentation.validate());
        errors.extend(self.output.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for DrillDownConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(path) = &self.fixtures {
            if !path.is_file() {
                errors.push(ConfigError::new(
                    "drilldown.fixtures",
                    format!("Fixture file not found: {}", path.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for PresentationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(0..=MAX_DUE_SOON_DAYS).contains(&self.due_soon_days) {
            errors.push(ConfigError::new(
                "presentation.due_soon_days",
                format!(
                    "Must be between 0 and {MAX_DUE_SOON_DAYS}, got {}",
                    self.due_soon_days
                ),
            ));
        }
        if self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
        {
            errors.push(ConfigError::new(
                "presentation.date_format",
                format!("Invalid strftime pattern '{}'", self.date_format),
            ));
        }
        if (1..4).contains(&self.max_cell_width) {
            errors.push(ConfigError::new(
                "presentation.max_cell_width",
                "Must be 0 (unlimited) or at least 4",
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.tick_rate_ms == 0 {
            errors.push(ConfigError::new("tui.tick_rate_ms", "Must be at least 1"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_date_format() {
        let config = PresentationConfig {
            date_format: "%Q".to_string(),
            ..PresentationConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "presentation.date_format");
    }

    #[test]
    fn test_due_soon_range() {
        let config = PresentationConfig {
            due_soon_days: -1,
            ..PresentationConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_missing_fixture_file() {
        let config = DrillDownConfig {
            fixtures: Some("/nonexistent/records.json".into()),
            ..DrillDownConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors[0].field, "drilldown.fixtures");
    }

    #[test]
    fn test_zero_tick_rate() {
        let config = TuiConfig {
            tick_rate_ms: 0,
            ..TuiConfig::default()
        };
        assert_eq!(
            config.validate()[0].to_string(),
            "tui.tick_rate_ms: Must be at least 1"
        );
    }

    #[test]
    fn test_errors_accumulate() {
        let mut config = AppConfig::default();
        config.tui.tick_rate_ms = 0;
        config.presentation.max_cell_width = 2;
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_ensure_valid_reports_every_field() {
        assert!(AppConfig::default().ensure_valid().is_ok());

        let mut config = AppConfig::default();
        config.tui.tick_rate_ms = 0;
        config.presentation.max_cell_width = 2;
        let err = config.ensure_valid().unwrap_err();
        assert!(matches!(err, crate::error::DrillDownError::Config(_)));
        let message = err.to_string();
        assert!(message.starts_with("Invalid configuration: presentation.max_cell_width"));
        assert!(message.contains("; tui.tick_rate_ms"));
    }
}
