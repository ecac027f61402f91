//! Report generation for drill-down sessions.
//!
//! - Table: aligned rows with formatted cells and a statistics footer
//! - Summary: compact shell-friendly overview
//! - JSON: session payload with raw values for programmatic use
//! - CSV: raw values for spreadsheet import

mod csv;
mod json;
mod summary;
mod table;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use table::TableReporter;
pub use types::{ReportConfig, ReportFormat};

use crate::error::{DrillDownError, ReportErrorKind, Result};
use crate::model::Session;
use std::io::Write;

/// Trait for session reporters
pub trait SessionReporter {
    /// Render a session
    fn generate(&self, session: &Session, config: &ReportConfig) -> Result<String>;

    /// Render a session into a writer
    fn write_report(
        &self,
        session: &Session,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let report = self.generate(session, config)?;
        writer.write_all(report.as_bytes())?;
        if !report.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Get the format this reporter produces
    fn format(&self) -> ReportFormat;
}

/// Create a reporter for a textual format.
///
/// `Auto` and `Tui` must be resolved by the caller first.
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Result<Box<dyn SessionReporter>> {
    match format {
        ReportFormat::Table => Ok(Box::new(TableReporter::new().colored(use_color))),
        ReportFormat::Summary => Ok(Box::new(SummaryReporter::new().colored(use_color))),
        ReportFormat::Json => Ok(Box::new(JsonReporter::new())),
        ReportFormat::Csv => Ok(Box::new(CsvReporter::new())),
        ReportFormat::Auto | ReportFormat::Tui => Err(DrillDownError::report(
            "creating reporter",
            ReportErrorKind::UnsupportedFormat(format.to_string()),
        )),
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if !colored {
        return text.to_string();
    }
    match color {
        "red" => format!("\x1b[31m{text}\x1b[0m"),
        "green" => format!("\x1b[32m{text}\x1b[0m"),
        "yellow" => format!("\x1b[33m{text}\x1b[0m"),
        "cyan" => format!("\x1b[36m{text}\x1b[0m"),
        "bold" => format!("\x1b[1m{text}\x1b[0m"),
        "dim" => format!("\x1b[2m{text}\x1b[0m"),
        _ => text.to_string(),
    }
}

/// Subtitle line: `<module> • <n> records`.
pub(crate) fn subtitle(session: &Session) -> String {
    format!("{} • {} records", session.module, session.record_count())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_matches_format() {
        for format in [
            ReportFormat::Table,
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Csv,
        ] {
            assert_eq!(create_reporter(format, false).unwrap().format(), format);
        }
    }

    #[test]
    fn test_interactive_formats_rejected() {
        assert!(create_reporter(ReportFormat::Tui, false).is_err());
        assert!(create_reporter(ReportFormat::Auto, false).is_err());
    }

    #[test]
    fn test_write_report_appends_newline() {
        let session = test_support::contracts_session();
        let mut out = Vec::new();
        CsvReporter::new()
            .write_report(&session, &test_support::config(), &mut out)
            .unwrap();
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn test_ansi_color_disabled() {
        assert_eq!(ansi_color("x", "red", false), "x");
        assert_eq!(ansi_color("x", "red", true), "\x1b[31mx\x1b[0m");
    }
}
