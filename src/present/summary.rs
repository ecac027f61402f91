//! Footer statistics for a drill-down session.

use crate::model::{ColumnKind, Record, Session, Value};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

pub const DEFAULT_DUE_SOON_DAYS: i64 = 30;

/// Statuses counted as successful outcomes.
pub const SUCCESS_STATUSES: &[&str] = &["completed", "active", "approved"];

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Aggregate view of a session's rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub total_records: usize,
    /// Sum of the first currency column; absent without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    /// Rows whose first date column falls within the due-soon window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_soon: Option<usize>,
    /// Rounded percentage of rows in a success status; absent with no rows
    pub success_rate: Option<u32>,
    pub filter_chips: Vec<String>,
}

impl SessionSummary {
    /// Compute the summary as of `now`.
    #[must_use]
    pub fn compute(session: &Session, now: DateTime<Utc>, due_soon_days: i64) -> Self {
        let first_of = |kind: ColumnKind| {
            session
                .columns
                .iter()
                .find(|c| c.kind == kind)
                .map(|c| c.key.as_str())
        };

        let total_value = first_of(ColumnKind::Currency).map(|key| {
            session
                .data
                .iter()
                .map(|r| numeric(r.get(key)))
                .sum::<f64>()
        });

        let due_soon = first_of(ColumnKind::Date).map(|key| {
            session
                .data
                .iter()
                .filter_map(|r| days_until(r, key, now))
                .filter(|days| (0..=due_soon_days).contains(days))
                .count()
        });

        let success_rate = if session.data.is_empty() {
            None
        } else {
            let successes = session
                .data
                .iter()
                .filter(|r| {
                    r.get("status")
                        .and_then(Value::as_str)
                        .is_some_and(|s| SUCCESS_STATUSES.contains(&s))
                })
                .count();
            Some((successes as f64 / session.data.len() as f64 * 100.0).round() as u32)
        };

        Self {
            total_records: session.data.len(),
            total_value,
            due_soon,
            success_rate,
            filter_chips: session
                .filters
                .as_ref()
                .map(crate::filter::FilterMap::chips)
                .unwrap_or_default(),
        }
    }
}

/// Numeric value of a cell; text is parsed, anything else counts as zero.
fn numeric(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Text(s)) => s.trim().parse().unwrap_or(0.0),
        Some(v) => v.as_f64().unwrap_or(0.0),
        None => 0.0,
    }
}

/// Whole days from `now` until the date in `key`, rounded up.
fn days_until(record: &Record, key: &str, now: DateTime<Utc>) -> Option<i64> {
    let raw = record.get(key)?.as_str()?;
    let at = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
        })
        .ok()?;
    let millis = (at - now).num_milliseconds() as f64;
    Some((millis / MILLIS_PER_DAY).ceil() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterMap;
    use crate::model::{Category, ColumnDescriptor};
    use chrono::{Duration, SecondsFormat, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn iso(at: DateTime<Utc>) -> String {
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn session(columns: Vec<ColumnDescriptor>, data: Vec<Record>) -> Session {
        Session {
            id: "contracts-0-1".to_string(),
            category: Category::Contracts,
            title: "Contracts".to_string(),
            module: "Dashboard".to_string(),
            filters: None,
            data,
            columns,
            show_relationships: false,
            item_type: None,
            selected_item_id: None,
            on_related_item_click: None,
            error: None,
            generation: 1,
            created_at: now(),
        }
    }

    #[test]
    fn test_empty_session_has_no_success_rate() {
        let summary = SessionSummary::compute(&session(Vec::new(), Vec::new()), now(), 30);
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.success_rate, None);
        assert_eq!(summary.total_value, None);
        assert_eq!(summary.due_soon, None);
    }

    #[test]
    fn test_total_value_uses_first_currency_column() {
        let columns = vec![
            ColumnDescriptor::new("budget", "Budget", ColumnKind::Currency),
            ColumnDescriptor::new("spent", "Spent", ColumnKind::Currency),
        ];
        let data = vec![
            Record::new().with("budget", 100).with("spent", 5),
            Record::new().with("budget", 50.5).with("spent", 5),
            Record::new().with("budget", "12").with("spent", 5),
            Record::new().with("budget", "lots"),
        ];
        let summary = SessionSummary::compute(&session(columns, data), now(), 30);
        assert_eq!(summary.total_value, Some(162.5));
    }

    #[test]
    fn test_due_soon_window() {
        let columns = vec![ColumnDescriptor::new("due", "Due", ColumnKind::Date)];
        let data = vec![
            Record::new().with("due", iso(now() + Duration::days(3))),
            Record::new().with("due", iso(now() + Duration::days(30))),
            Record::new().with("due", iso(now() + Duration::days(31))),
            Record::new().with("due", iso(now() - Duration::days(2))),
            // less than a day ago rounds up to zero
            Record::new().with("due", iso(now() - Duration::hours(5))),
            Record::new().with("due", "not a date"),
        ];
        let summary = SessionSummary::compute(&session(columns, data), now(), 30);
        assert_eq!(summary.due_soon, Some(3));
    }

    #[test]
    fn test_success_rate_rounds() {
        let data = vec![
            Record::new().with("status", "completed"),
            Record::new().with("status", "active"),
            Record::new().with("status", "pending"),
        ];
        let summary = SessionSummary::compute(&session(Vec::new(), data), now(), 30);
        assert_eq!(summary.success_rate, Some(67));
    }

    #[test]
    fn test_filter_chips_in_insertion_order() {
        let mut s = session(Vec::new(), Vec::new());
        s.filters = Some(FilterMap::new().with("status", "executed").with("priority", "high"));
        let summary = SessionSummary::compute(&s, now(), 30);
        assert_eq!(summary.filter_chips, vec!["status: executed", "priority: high"]);
    }
}
