//! JSON report generator.

use super::{ReportConfig, ReportFormat, SessionReporter};
use crate::error::{DrillDownError, ReportErrorKind, Result};
use crate::model::Session;
use crate::present::SessionSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON reporter: the session with raw values, plus its summary.
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tool_version: &'static str,
    generated_at: DateTime<Utc>,
    session: &'a Session,
    summary: SessionSummary,
}

impl SessionReporter for JsonReporter {
    fn generate(&self, session: &Session, config: &ReportConfig) -> Result<String> {
        let report = JsonReport {
            tool_version: env!("CARGO_PKG_VERSION"),
            generated_at: config.now,
            session,
            summary: SessionSummary::compute(session, config.now, config.due_soon_days),
        };
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        encoded.map_err(|e| {
            DrillDownError::report(
                "serializing session",
                ReportErrorKind::JsonSerialization(e.to_string()),
            )
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
