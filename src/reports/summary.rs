//! Compact summary output.

use super::{ansi_color, subtitle, ReportConfig, ReportFormat, SessionReporter};
use crate::error::Result;
use crate::model::Session;
use crate::present::{format_currency, SessionSummary};

/// Summary reporter: title, filters and statistics without rows.
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    #[must_use]
    pub const fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn field(&self, label: &str, value: impl std::fmt::Display) -> String {
        format!("{}  {value}", self.color(label, "cyan"))
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionReporter for SummaryReporter {
    fn generate(&self, session: &Session, config: &ReportConfig) -> Result<String> {
        let summary = SessionSummary::compute(session, config.now, config.due_soon_days);
        let mut lines = Vec::new();

        lines.push(self.color(&session.title, "bold"));
        lines.push(self.color(&subtitle(session), "dim"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(self.field("Category:", &session.category));
        if !summary.filter_chips.is_empty() {
            lines.push(self.field("Filters:", summary.filter_chips.join(", ")));
        }
        lines.push(self.field("Total Records:", summary.total_records));
        if let Some(total) = summary.total_value {
            lines.push(self.field("Total Value:", format_currency(total)));
        }
        if let Some(due) = summary.due_soon {
            lines.push(self.field("Due Soon:", due));
        }
        match summary.success_rate {
            Some(rate) => lines.push(self.field("Success Rate:", format!("{rate}%"))),
            None => lines.push(self.field("Success Rate:", "-")),
        }
        if let Some(error) = &session.error {
            lines.push(String::new());
            lines.push(self.color(&format!("Failed to load records: {error}"), "red"));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
