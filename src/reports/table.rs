//! Aligned table output.

use super::{ansi_color, subtitle, ReportConfig, ReportFormat, SessionReporter};
use crate::error::Result;
use crate::model::Session;
use crate::present::{format_cell, format_currency, truncate_to_width, SessionSummary};
use unicode_width::UnicodeWidthStr;

/// Table reporter: one row per record, cells formatted per column kind.
pub struct TableReporter {
    colored: bool,
}

impl TableReporter {
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
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

impl SessionReporter for TableReporter {
    fn generate(&self, session: &Session, config: &ReportConfig) -> Result<String> {
        let options = &config.format_options;
        let limit = |s: String| match options.max_cell_width {
            Some(max) => truncate_to_width(&s, max),
            None => s,
        };

        let headers: Vec<String> = session
            .columns
            .iter()
            .map(|c| limit(c.label.to_uppercase()))
            .collect();
        let rows: Vec<Vec<String>> = session
            .data
            .iter()
            .map(|record| {
                session
                    .columns
                    .iter()
                    .map(|c| limit(format_cell(c, record, options)))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut lines = Vec::new();
        lines.push(self.color(&session.title, "bold"));
        lines.push(self.color(&subtitle(session), "dim"));
        let summary = SessionSummary::compute(session, config.now, config.due_soon_days);
        if !summary.filter_chips.is_empty() {
            lines.push(format!(
                "{} {}",
                self.color("Filters:", "cyan"),
                summary.filter_chips.join(", ")
            ));
        }
        if let Some(error) = &session.error {
            lines.push(self.color(&format!("Failed to load records: {error}"), "red"));
        }
        lines.push(String::new());

        let header = headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| self.color(&pad(h, *w), "bold"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(header.trim_end().to_string());
        lines.push("─".repeat(rule_width));

        if rows.is_empty() {
            lines.push(self.color("No records.", "dim"));
        }
        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| pad(cell, *w))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }
        lines.push("─".repeat(rule_width));

        let mut footer = vec![format!("Total Records: {}", summary.total_records)];
        if let Some(total) = summary.total_value {
            footer.push(format!("Total Value: {}", format_currency(total)));
        }
        if let Some(due) = summary.due_soon {
            footer.push(format!("Due Soon: {due}"));
        }
        if let Some(rate) = summary.success_rate {
            footer.push(format!("Success Rate: {rate}%"));
        }
        lines.push(footer.join("   "));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{config, contracts_session};

    #[test]
    fn test_table_layout() {
        let report = TableReporter::new()
            .colored(false)
            .generate(&contracts_session(), &config())
            .unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Active Contracts");
        assert_eq!(lines[1], "Dashboard • 2 records");
        assert_eq!(lines[2], "Filters: status: executed");
        assert!(lines[4].starts_with("CONTRACT TITLE"));
        assert!(report.contains("$125,000.00"));
        assert!(report.contains("[executed]"));
        assert!(report.contains("06/10/2024"));
        assert!(report.contains("Total Value: $127,500.50"));
        assert!(report.contains("Due Soon: 1"));
        assert!(report.contains("Success Rate: 0%"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn test_columns_align() {
        let report = TableReporter::new()
            .colored(false)
            .generate(&contracts_session(), &config())
            .unwrap();
        let rows: Vec<&str> = report
            .lines()
            .filter(|l| l.contains("[executed]"))
            .collect();
        assert_eq!(rows.len(), 2);
        let status_col = |l: &str| l.find('[').unwrap();
        assert_eq!(status_col(rows[0]), status_col(rows[1]));
    }

    #[test]
    fn test_max_cell_width_truncates() {
        let mut cfg = config();
        cfg.format_options.max_cell_width = Some(8);
        let report = TableReporter::new()
            .colored(false)
            .generate(&contracts_session(), &cfg)
            .unwrap();
        assert!(report.contains("NDA C..."));
    }

    #[test]
    fn test_empty_and_error_sessions() {
        let mut session = contracts_session();
        session.data.clear();
        session.error = Some("backend down".to_string());
        let report = TableReporter::new()
            .colored(false)
            .generate(&session, &config())
            .unwrap();
        assert!(report.contains("No records."));
        assert!(report.contains("Failed to load records: backend down"));
        assert!(!report.contains("Success Rate"));
    }
}
