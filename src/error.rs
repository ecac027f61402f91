//! Unified error types for counsel-drilldown.
//!
//! The drill-down core itself has no failure modes: unknown categories
//! degrade to empty data and source failures are folded into the session.
//! These errors cover the edges: record sources, reports, config and I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for counsel-drilldown operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DrillDownError {
    /// A record source could not produce records
    #[error("Record source failed: {context}")]
    Source {
        context: String,
        #[source]
        source: SourceErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific record source error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SourceErrorKind {
    #[error("Invalid fixture document: {0}")]
    InvalidFixture(String),

    #[error("Record for '{category}' is not an object: {detail}")]
    InvalidRecord { category: String, detail: String },

    #[error("Source unavailable: {0}")]
    Unavailable(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),

    #[error("Formatting failed: {0}")]
    Format(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for counsel-drilldown operations
pub type Result<T> = std::result::Result<T, DrillDownError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl DrillDownError {
    /// Create a source error with context
    pub fn source_failure(context: impl Into<String>, source: SourceErrorKind) -> Self {
        Self::Source {
            context: context.into(),
            source,
        }
    }

    /// Create a source error for an unreachable backend
    pub fn unavailable(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::source_failure(context, SourceErrorKind::Unavailable(reason.into()))
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The message followed by every underlying cause, `": "`-separated.
    #[must_use]
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for DrillDownError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DrillDownError {
    fn from(err: serde_json::Error) -> Self {
        Self::source_failure(
            "JSON deserialization",
            SourceErrorKind::InvalidFixture(err.to_string()),
        )
    }
}

impl From<std::fmt::Error> for DrillDownError {
    fn from(err: std::fmt::Error) -> Self {
        Self::report("writing report", ReportErrorKind::Format(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first, so a failure three calls deep
/// reads `"outer: middle: base"`.
///
/// ```ignore
/// use counsel_drilldown::error::ErrorContext;
///
/// let source = FixtureSource::from_path(&path)
///     .with_context(|| format!("loading fixtures from {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DrillDownError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: DrillDownError, new_ctx: &str) -> DrillDownError {
    match err {
        DrillDownError::Source {
            context: existing,
            source,
        } => DrillDownError::Source {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DrillDownError::Report {
            context: existing,
            source,
        } => DrillDownError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DrillDownError::Io {
            path,
            message,
            source,
        } => DrillDownError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DrillDownError::Config(msg) => DrillDownError::Config(chain_context(new_ctx, &msg)),
        DrillDownError::Validation(msg) => {
            DrillDownError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| DrillDownError::Validation(context.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DrillDownError::unavailable("fetching contracts", "connection refused");
        let display = err.to_string();
        assert!(
            display.contains("fetching contracts"),
            "Error message should carry its context: {display}"
        );
    }

    #[test]
    fn test_full_message_includes_causes() {
        let err = DrillDownError::unavailable("fetching contracts", "connection refused");
        assert_eq!(
            err.full_message(),
            "Record source failed: fetching contracts: Source unavailable: connection refused"
        );
    }

    #[test]
    fn test_io_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DrillDownError::io("/path/to/fixtures.json", io_err);

        assert!(err.to_string().contains("/path/to/fixtures.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(DrillDownError::unavailable("base", "down"))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(DrillDownError::Source { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Source error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(DrillDownError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(DrillDownError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(Some(7).context_none("unused").unwrap(), 7);
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
