//! Session output stage.

use super::{should_use_color, write_output, OutputTarget};
use crate::config::AppConfig;
use crate::model::Session;
use crate::reports::{create_reporter, ReportConfig, ReportFormat};
use anyhow::Result;

/// Reporter settings derived from the application config.
#[must_use]
pub fn report_config(config: &AppConfig) -> ReportConfig {
    ReportConfig {
        format_options: config.presentation.format_options(),
        due_soon_days: config.presentation.due_soon_days,
        ..ReportConfig::default()
    }
}

/// Render `session` in a textual `format` and write it to `target`.
pub fn output_session(
    session: &Session,
    format: ReportFormat,
    target: &OutputTarget,
    config: &AppConfig,
    quiet: bool,
) -> Result<()> {
    // color codes never go to files
    let use_color = should_use_color(config.output.no_color) && target.is_terminal();
    let reporter = create_reporter(format, use_color)?;
    let report = reporter.generate(session, &report_config(config))?;
    write_output(&report, target, quiet)
}
