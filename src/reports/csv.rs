//! CSV report generator.
//!
//! One header row of column labels, then one row per record with raw
//! values. Fields are quoted per RFC 4180 when needed.

use super::{ReportConfig, ReportFormat, SessionReporter};
use crate::error::Result;
use crate::model::Session;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionReporter for CsvReporter {
    fn generate(&self, session: &Session, _config: &ReportConfig) -> Result<String> {
        let mut content = String::new();
        let header: Vec<String> = session.columns.iter().map(|c| escape_csv(&c.label)).collect();
        content.push_str(&header.join(","));
        content.push('\n');

        for record in &session.data {
            let row: Vec<String> = session
                .columns
                .iter()
                .map(|c| {
                    record
                        .get(&c.key)
                        .map(|v| escape_csv(&v.to_string()))
                        .unwrap_or_default()
                })
                .collect();
            content.push_str(&row.join(","));
            content.push('\n');
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

/// Quote a field when it contains a delimiter, quote or line break.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
