//! Exact-match record filtering.
//!
//! A record passes a [`FilterMap`] iff every `(key, value)` entry is present
//! in the record with a strictly equal [`Value`]. Integers and floats compare
//! as numbers; otherwise there is no coercion, no partial matching and no
//! wildcard support. A missing field never matches.

use crate::error::{DrillDownError, Result};
use crate::model::{Record, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Conjunction of exact field requirements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterMap {
    entries: IndexMap<String, Value>,
}

impl FilterMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `record` satisfies every entry.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.entries
            .iter()
            .all(|(key, required)| record.get(key) == Some(required))
    }

    /// `key: value` labels for display, in insertion order.
    #[must_use]
    pub fn chips(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FilterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Filter predicate. An absent or empty filter map matches everything.
#[must_use]
pub fn matches(record: &Record, filters: Option<&FilterMap>) -> bool {
    filters.map_or(true, |f| f.matches(record))
}

/// Keep the records that pass `filters`, preserving their relative order.
#[must_use]
pub fn apply(mut records: Vec<Record>, filters: Option<&FilterMap>) -> Vec<Record> {
    if let Some(filters) = filters.filter(|f| !f.is_empty()) {
        records.retain(|record| filters.matches(record));
    }
    records
}

/// Parse a `key=value` filter argument.
///
/// The value is read as a JSON scalar when it is one (`5`, `true`, `null`,
/// `"5"`), otherwise it is taken verbatim as text. This is the only place a
/// string is interpreted; matching itself never coerces.
pub fn parse_filter_arg(arg: &str) -> Result<(String, Value)> {
    let (key, raw) = arg.split_once('=').ok_or_else(|| {
        DrillDownError::validation(format!("filter '{arg}' must have the form key=value"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(DrillDownError::validation(format!(
            "filter '{arg}' has an empty key"
        )));
    }

    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Null) => Value::Null,
        Ok(serde_json::Value::Bool(b)) => Value::Bool(b),
        Ok(serde_json::Value::String(s)) => Value::Text(s),
        Ok(serde_json::Value::Number(n)) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float))
            .unwrap_or_else(|| Value::Text(raw.to_string())),
        _ => Value::Text(raw.to_string()),
    };

    Ok((key.to_string(), value))
}

/// Parse a list of `key=value` arguments into a filter map.
///
/// Returns `None` for an empty list so callers get identity filtering.
pub fn parse_filter_args<S: AsRef<str>>(args: &[S]) -> Result<Option<FilterMap>> {
    if args.is_empty() {
        return Ok(None);
    }
    let mut filters = FilterMap::new();
    for arg in args {
        let (key, value) = parse_filter_arg(arg.as_ref())?;
        filters.insert(key, value);
    }
    Ok(Some(filters))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(status: &str, value: i64) -> Record {
        Record::new()
            .with("id", "contract-001")
            .with("status", status)
            .with("value", value)
    }

    #[test]
    fn test_absent_and_empty_filters_match() {
        let record = contract("executed", 10);
        assert!(matches(&record, None));
        assert!(matches(&record, Some(&FilterMap::new())));
    }

    #[test]
    fn test_all_entries_must_match() {
        let record = contract("executed", 10);
        let both = FilterMap::new().with("status", "executed").with("value", 10);
        assert!(matches(&record, Some(&both)));

        let one_off = FilterMap::new().with("status", "executed").with("value", 11);
        assert!(!matches(&record, Some(&one_off)));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let record = contract("executed", 10);
        let filters = FilterMap::new().with("severity", "critical");
        assert!(!matches(&record, Some(&filters)));

        // Not even a null requirement: absence is not null
        let null_filter = FilterMap::new().with("severity", Value::Null);
        assert!(!matches(&record, Some(&null_filter)));
    }

    #[test]
    fn test_no_type_coercion() {
        let record = contract("executed", 10);
        assert!(!matches(&record, Some(&FilterMap::new().with("value", "10"))));
        assert!(!matches(&record, Some(&FilterMap::new().with("value", true))));
        // one numeric domain: 10 and 10.0 are the same number
        assert!(matches(&record, Some(&FilterMap::new().with("value", 10.0))));
        assert!(!matches(&record, Some(&FilterMap::new().with("value", 10.5))));
    }

    #[test]
    fn test_float_filter_arg_matches_integer_field() {
        let record = Record::new().with("probability", 5);
        let filters = parse_filter_args(&["probability=5.0"]).unwrap();
        assert!(matches(&record, filters.as_ref()));
    }

    #[test]
    fn test_comma_list_is_a_literal_value() {
        let record = Record::new().with("severity", "critical");
        let filters = FilterMap::new().with("severity", "critical,high");
        assert!(!matches(&record, Some(&filters)));
    }

    #[test]
    fn test_apply_is_stable() {
        let records = vec![
            contract("draft", 1).with("id", "a"),
            contract("executed", 2).with("id", "b"),
            contract("draft", 3).with("id", "c"),
            contract("executed", 4).with("id", "d"),
        ];
        let filters = FilterMap::new().with("status", "executed");
        let ids: Vec<_> = apply(records, Some(&filters))
            .iter()
            .map(|r| r.id().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["b", "d"]);
    }

    #[test]
    fn test_parse_filter_arg_scalars() {
        assert_eq!(
            parse_filter_arg("status=executed").unwrap(),
            ("status".to_string(), Value::Text("executed".to_string()))
        );
        assert_eq!(parse_filter_arg("value=5").unwrap().1, Value::Int(5));
        assert_eq!(parse_filter_arg("ratio=0.5").unwrap().1, Value::Float(0.5));
        assert_eq!(parse_filter_arg("flag=true").unwrap().1, Value::Bool(true));
        assert_eq!(
            parse_filter_arg("code=\"5\"").unwrap().1,
            Value::Text("5".to_string())
        );
        // Only the first '=' splits
        assert_eq!(
            parse_filter_arg("expr=a=b").unwrap().1,
            Value::Text("a=b".to_string())
        );
    }

    #[test]
    fn test_parse_filter_arg_rejects_malformed() {
        assert!(parse_filter_arg("status").is_err());
        assert!(parse_filter_arg("=executed").is_err());
    }

    #[test]
    fn test_parse_filter_args_empty_is_none() {
        let empty: [&str; 0] = [];
        assert!(parse_filter_args(&empty).unwrap().is_none());
        let some = parse_filter_args(&["status=active", "priority=high"])
            .unwrap()
            .unwrap();
        assert_eq!(some.len(), 2);
        assert_eq!(some.chips(), vec!["status: active", "priority: high"]);
    }
}
