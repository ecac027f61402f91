//! Cell formatting per column kind.

use crate::model::{ColumnDescriptor, ColumnKind, Record, Value};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Placeholder for null and missing values.
const EMPTY_CELL: &str = "-";

static NULL: Value = Value::Null;

/// Options for rendering cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// strftime pattern for `date` columns
    pub date_format: String,
    /// Display-width limit applied by table renderers; `None` for no limit
    pub max_cell_width: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            max_cell_width: None,
        }
    }
}

/// Render the value stored under `column.key` in `record`.
#[must_use]
pub fn format_cell(column: &ColumnDescriptor, record: &Record, options: &FormatOptions) -> String {
    let value = record.get(&column.key).unwrap_or(&NULL);
    format_value(column, value, record, options)
}

/// Render one value for a column.
///
/// A custom renderer always wins, including for null values.
#[must_use]
pub fn format_value(
    column: &ColumnDescriptor,
    value: &Value,
    record: &Record,
    options: &FormatOptions,
) -> String {
    if let Some(render) = &column.render {
        return render(value, record);
    }
    if value.is_null() {
        return EMPTY_CELL.to_string();
    }

    match column.kind {
        ColumnKind::Currency => value
            .as_f64()
            .map_or_else(|| value.to_string(), format_currency),
        ColumnKind::Number => match value {
            Value::Int(n) => group_digits(n.unsigned_abs(), *n < 0),
            Value::Float(f) => format_number(*f),
            other => other.to_string(),
        },
        ColumnKind::Date => value
            .as_str()
            .and_then(|s| format_date(s, &options.date_format))
            .unwrap_or_else(|| value.to_string()),
        ColumnKind::Badge => format!("[{value}]"),
        ColumnKind::Text => value.to_string(),
    }
}

/// US dollars with thousands separators and cents: `$1,234.50`, `-$5.00`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;
    let dollars = group_digits(cents / 100, false);
    format!(
        "{}${dollars}.{:02}",
        if negative { "-" } else { "" },
        cents % 100
    )
}

/// Thousands separators and at most two decimals, trailing zeros dropped.
#[must_use]
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let hundredths = (n.abs() * 100.0).round() as u64;
    let negative = n < 0.0 && hundredths > 0;
    let mut out = group_digits(hundredths / 100, negative);
    let frac = hundredths % 100;
    if frac != 0 {
        let digits = format!("{frac:02}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_digits(n: u64, negative: bool) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_date(raw: &str, pattern: &str) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    let mut out = String::new();
    // invalid patterns surface as fmt errors rather than panics
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Cut `s` to at most `max_width` display columns, ending in `...` when cut.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(kind: ColumnKind) -> ColumnDescriptor {
        ColumnDescriptor::new("field", "Field", kind)
    }

    fn render(kind: ColumnKind, value: impl Into<Value>) -> String {
        let record = Record::new().with("field", value);
        format_cell(&column(kind), &record, &FormatOptions::default())
    }

    #[test]
    fn test_currency() {
        assert_eq!(render(ColumnKind::Currency, 125_000), "$125,000.00");
        assert_eq!(render(ColumnKind::Currency, 1234.5), "$1,234.50");
        assert_eq!(render(ColumnKind::Currency, -5), "-$5.00");
        assert_eq!(render(ColumnKind::Currency, 0), "$0.00");
        assert_eq!(render(ColumnKind::Currency, "n/a"), "n/a");
    }

    #[test]
    fn test_number() {
        assert_eq!(render(ColumnKind::Number, 1_234_567), "1,234,567");
        assert_eq!(render(ColumnKind::Number, -1000), "-1,000");
        assert_eq!(render(ColumnKind::Number, 12.5), "12.5");
        assert_eq!(render(ColumnKind::Number, 1234.567), "1,234.57");
        assert_eq!(render(ColumnKind::Number, 3.0), "3");
        assert_eq!(render(ColumnKind::Number, "seven"), "seven");
    }

    #[test]
    fn test_date() {
        assert_eq!(
            render(ColumnKind::Date, "2024-03-05T10:15:00.000Z"),
            "03/05/2024"
        );
        assert_eq!(render(ColumnKind::Date, "2024-12-31"), "12/31/2024");
        assert_eq!(render(ColumnKind::Date, "someday"), "someday");

        let options = FormatOptions {
            date_format: "%Y-%m-%d".to_string(),
            ..FormatOptions::default()
        };
        let record = Record::new().with("field", "2024-03-05T23:59:59Z");
        assert_eq!(
            format_cell(&column(ColumnKind::Date), &record, &options),
            "2024-03-05"
        );
    }

    #[test]
    fn test_badge_and_text() {
        assert_eq!(render(ColumnKind::Badge, "under_review"), "[under_review]");
        assert_eq!(render(ColumnKind::Text, "Company A"), "Company A");
        assert_eq!(render(ColumnKind::Text, true), "true");
    }

    #[test]
    fn test_null_and_missing() {
        assert_eq!(render(ColumnKind::Currency, Value::Null), "-");
        let empty = Record::new();
        assert_eq!(
            format_cell(&column(ColumnKind::Badge), &empty, &FormatOptions::default()),
            "-"
        );
    }

    #[test]
    fn test_custom_renderer_wins() {
        let column = column(ColumnKind::Currency)
            .with_render(|value, record| format!("{}:{value}", record.id().unwrap_or("?")));
        let record = Record::new().with("id", "c-1").with("field", 10);
        assert_eq!(
            format_cell(&column, &record, &FormatOptions::default()),
            "c-1:10"
        );
        let missing = Record::new().with("id", "c-2");
        assert_eq!(
            format_cell(&column, &missing, &FormatOptions::default()),
            "c-2:"
        );
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("Service Agreement", 10), "Service...");
        assert_eq!(truncate_to_width("abc", 2), "..");
        // wide characters count double
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本...");
    }
}
