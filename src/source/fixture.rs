//! Records loaded from a JSON fixture document.
//!
//! The document maps category tags to arrays of flat objects:
//!
//! ```json
//! { "contracts": [ { "id": "c-1", "title": "NDA", "status": "executed" } ] }
//! ```

use super::RecordSource;
use crate::error::{DrillDownError, ErrorContext, Result, SourceErrorKind};
use crate::model::{Category, Record};
use indexmap::IndexMap;
use std::path::Path;

/// A fixed set of records per category.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    records: IndexMap<Category, Vec<Record>>,
}

impl FixtureSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the records served for `category`.
    #[must_use]
    pub fn with_records(mut self, category: impl Into<Category>, records: Vec<Record>) -> Self {
        self.records.insert(category.into(), records);
        self
    }

    /// Parse a fixture document.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: IndexMap<String, serde_json::Value> =
            serde_json::from_str(content).context("parsing fixture document")?;

        let mut records = IndexMap::with_capacity(document.len());
        for (tag, value) in document {
            let serde_json::Value::Array(items) = value else {
                return Err(DrillDownError::source_failure(
                    "parsing fixture document",
                    SourceErrorKind::InvalidFixture(format!(
                        "category '{tag}' must map to an array"
                    )),
                ));
            };
            let batch = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| parse_record(&tag, index, item))
                .collect::<Result<Vec<_>>>()?;
            tracing::debug!(category = %tag, count = batch.len(), "loaded fixture records");
            records.insert(Category::from_tag(&tag), batch);
        }
        Ok(Self { records })
    }

    /// Read and parse a fixture file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DrillDownError::io(path, e))?;
        Self::from_json(&content)
            .with_context(|| format!("loading fixtures from {}", path.display()))
    }

    /// Categories present in the document, in document order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.records.keys()
    }
}

fn parse_record(tag: &str, index: usize, item: serde_json::Value) -> Result<Record> {
    if !item.is_object() {
        return Err(invalid_record(tag, format!("entry {index} is not an object")));
    }
    serde_json::from_value(item).map_err(|e| invalid_record(tag, format!("entry {index}: {e}")))
}

fn invalid_record(tag: &str, detail: String) -> DrillDownError {
    DrillDownError::source_failure(
        "parsing fixture document",
        SourceErrorKind::InvalidRecord {
            category: tag.to_string(),
            detail,
        },
    )
}

impl RecordSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch(&self, category: &Category) -> Result<Vec<Record>> {
        Ok(self.records.get(category).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterMap;
    use crate::model::Value;

    const DOC: &str = r#"{
        "contracts": [
            { "id": "c-1", "title": "NDA", "status": "executed", "value": 1200 },
            { "id": "c-2", "title": "MSA", "status": "draft", "value": 99.5 },
            { "id": "c-3", "title": "SOW", "status": "executed", "value": null }
        ],
        "disputes": [
            { "id": "d-1", "title": "Billing dispute" }
        ]
    }"#;

    #[test]
    fn test_from_json_preserves_order_and_values() {
        let source = FixtureSource::from_json(DOC).unwrap();
        let records = source.fetch(&Category::Contracts).unwrap();
        let ids: Vec<_> = records.iter().filter_map(Record::id).collect();
        assert_eq!(ids, vec!["c-1", "c-2", "c-3"]);
        assert_eq!(records[0].get("value"), Some(&Value::Int(1200)));
        assert_eq!(records[1].get("value"), Some(&Value::Float(99.5)));
        assert_eq!(records[2].get("value"), Some(&Value::Null));
    }

    #[test]
    fn test_unregistered_tags_are_served() {
        let source = FixtureSource::from_json(DOC).unwrap();
        let disputes = source.fetch(&Category::from_tag("disputes")).unwrap();
        assert_eq!(disputes.len(), 1);
        assert_eq!(source.categories().count(), 2);
    }

    #[test]
    fn test_missing_category_is_empty() {
        let source = FixtureSource::from_json(DOC).unwrap();
        assert!(source.fetch(&Category::Risks).unwrap().is_empty());
    }

    #[test]
    fn test_query_filters_exactly() {
        let source = FixtureSource::from_json(DOC).unwrap();
        let filters = FilterMap::new().with("status", "executed");
        let records = source.query(&Category::Contracts, Some(&filters)).unwrap();
        assert_eq!(records.len(), 2);

        // 1200 and 1200.0 are different values
        let filters = FilterMap::new().with("value", 1200.0);
        assert!(source
            .query(&Category::Contracts, Some(&filters))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_non_array_category_rejected() {
        let err = FixtureSource::from_json(r#"{ "contracts": { "id": "x" } }"#).unwrap_err();
        assert!(matches!(
            err,
            DrillDownError::Source {
                source: SourceErrorKind::InvalidFixture(_),
                ..
            }
        ));
    }

    #[test]
    fn test_nested_value_rejected() {
        let err =
            FixtureSource::from_json(r#"{ "tasks": [ { "id": "t", "tags": ["a"] } ] }"#).unwrap_err();
        match err {
            DrillDownError::Source {
                source: SourceErrorKind::InvalidRecord { category, .. },
                ..
            } => assert_eq!(category, "tasks"),
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(FixtureSource::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixtureSource::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DrillDownError::Io { .. }));
    }
}
