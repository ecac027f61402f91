//! In-memory relationship graph behind the related-items panel.
//!
//! Items are grouped by source type and source id. Lookups take the source
//! type as either its singular name (`"contract"`) or plural key
//! (`"contracts"`); unknown types and ids resolve to no items.

use crate::error::{DrillDownError, ErrorContext, Result, SourceErrorKind};
use crate::model::{RelatedItem, RelatedItemType, RelationshipKind};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

const BUILTIN_GRAPH: &str = include_str!("seed.json");

type Graph = IndexMap<RelatedItemType, IndexMap<String, Vec<RelatedItem>>>;

/// Relationship store.
#[derive(Debug, Clone, Default)]
pub struct RelationshipService {
    graph: Graph,
}

/// Counts over the related items of one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipSummary {
    pub total: usize,
    pub by_type: BTreeMap<RelatedItemType, usize>,
    pub by_module: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
    pub by_relationship: BTreeMap<RelationshipKind, usize>,
}

impl RelationshipService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in demo graph linking contracts, matters, tasks, risks,
    /// disputes, compliance items and templates.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_GRAPH).context("loading built-in relationship graph")
    }

    /// Parse a graph document: `{ "<source type>": { "<source id>": [items] } }`.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: IndexMap<String, IndexMap<String, Vec<RelatedItem>>> =
            serde_json::from_str(content)?;
        let mut graph = Graph::with_capacity(raw.len());
        for (key, sources) in raw {
            let item_type = RelatedItemType::parse(&key).ok_or_else(|| {
                DrillDownError::source_failure(
                    "parsing relationship graph",
                    SourceErrorKind::InvalidFixture(format!("unknown source type '{key}'")),
                )
            })?;
            graph.entry(item_type).or_default().extend(sources);
        }
        Ok(Self { graph })
    }

    /// Related items of one source, in stored order.
    #[must_use]
    pub fn related_items(&self, item_id: &str, item_type: &str) -> &[RelatedItem] {
        RelatedItemType::parse(item_type)
            .and_then(|ty| self.graph.get(&ty))
            .and_then(|sources| sources.get(item_id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Link `item` to a source. Returns `false` when the source type is
    /// unknown or the target is already linked.
    pub fn add_relationship(&mut self, source_id: &str, source_type: &str, item: RelatedItem) -> bool {
        let Some(ty) = RelatedItemType::parse(source_type) else {
            tracing::debug!(source_type, "cannot link from unknown source type");
            return false;
        };
        let items = self
            .graph
            .entry(ty)
            .or_default()
            .entry(source_id.to_string())
            .or_default();
        if items.iter().any(|existing| existing.id == item.id) {
            return false;
        }
        tracing::debug!(
            source = %format_args!("{ty}:{source_id}"),
            target = %format_args!("{}:{}", item.item_type, item.id),
            relationship = %item.relationship,
            "adding relationship"
        );
        items.push(item);
        true
    }

    /// Unlink `target_id` from a source. Returns `true` iff something was removed.
    pub fn remove_relationship(&mut self, source_id: &str, source_type: &str, target_id: &str) -> bool {
        let Some(items) = RelatedItemType::parse(source_type)
            .and_then(|ty| self.graph.get_mut(&ty))
            .and_then(|sources| sources.get_mut(source_id))
        else {
            return false;
        };
        let before = items.len();
        items.retain(|item| item.id != target_id);
        let removed = items.len() != before;
        if removed {
            tracing::debug!(source_type, source_id, target_id, "removed relationship");
        }
        removed
    }

    #[must_use]
    pub fn by_type(&self, item_id: &str, item_type: &str, related: RelatedItemType) -> Vec<&RelatedItem> {
        self.related_items(item_id, item_type)
            .iter()
            .filter(|item| item.item_type == related)
            .collect()
    }

    #[must_use]
    pub fn by_module(&self, item_id: &str, item_type: &str, module: &str) -> Vec<&RelatedItem> {
        self.related_items(item_id, item_type)
            .iter()
            .filter(|item| item.module == module)
            .collect()
    }

    #[must_use]
    pub fn by_relationship(
        &self,
        item_id: &str,
        item_type: &str,
        kind: RelationshipKind,
    ) -> Vec<&RelatedItem> {
        self.related_items(item_id, item_type)
            .iter()
            .filter(|item| item.relationship == kind)
            .collect()
    }

    /// Case-insensitive substring search over title and module.
    #[must_use]
    pub fn search(&self, item_id: &str, item_type: &str, term: &str) -> Vec<&RelatedItem> {
        let needle = term.to_lowercase();
        self.related_items(item_id, item_type)
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.module.to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn summary(&self, item_id: &str, item_type: &str) -> RelationshipSummary {
        let mut summary = RelationshipSummary::default();
        for item in self.related_items(item_id, item_type) {
            summary.total += 1;
            *summary.by_type.entry(item.item_type).or_default() += 1;
            *summary.by_module.entry(item.module.clone()).or_default() += 1;
            *summary.by_status.entry(item.status.clone()).or_default() += 1;
            *summary.by_relationship.entry(item.relationship).or_default() += 1;
        }
        summary
    }

    /// Number of sources with at least one stored item list.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.graph.values().map(IndexMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: &str, item_type: RelatedItemType) -> RelatedItem {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        RelatedItem {
            id: id.to_string(),
            item_type,
            title: format!("Item {id}"),
            status: "open".to_string(),
            module: "Risk Management".to_string(),
            relationship: RelationshipKind::Related,
            created_at: date,
            updated_at: date,
        }
    }

    #[test]
    fn test_builtin_graph_loads() {
        let service = RelationshipService::builtin().unwrap();
        let items = service.related_items("contract-001", "contract");
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].id, "matter-001");
        // plural key resolves to the same source
        assert_eq!(service.related_items("contract-001", "contracts"), items);
        assert_eq!(service.source_count(), 11);
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        let service = RelationshipService::builtin().unwrap();
        assert!(service.related_items("contract-999", "contract").is_empty());
        assert!(service.related_items("contract-001", "widget").is_empty());
    }

    #[test]
    fn test_filters() {
        let service = RelationshipService::builtin().unwrap();
        let risks = service.by_type("contract-001", "contract", RelatedItemType::Risk);
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].id, "risk-001");

        let tasks = service.by_module("matter-002", "matter", "Task Management");
        assert_eq!(tasks.len(), 1);

        let primary = service.by_relationship("dispute-001", "dispute", RelationshipKind::Primary);
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].id, "matter-002");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let service = RelationshipService::builtin().unwrap();
        let hits = service.search("contract-001", "contract", "RISK");
        assert_eq!(hits.len(), 1);
        let by_module = service.search("contract-001", "contract", "knowledge");
        assert_eq!(by_module.len(), 1);
        assert_eq!(by_module[0].item_type, RelatedItemType::Template);
    }

    #[test]
    fn test_summary_counts() {
        let service = RelationshipService::builtin().unwrap();
        let summary = service.summary("contract-001", "contract");
        assert_eq!(summary.total, 5);
        assert_eq!(summary.by_type.get(&RelatedItemType::Matter), Some(&1));
        assert_eq!(summary.by_relationship.get(&RelationshipKind::Related), Some(&2));
        assert_eq!(summary.by_status.values().sum::<usize>(), 5);

        let empty = service.summary("nothing", "contract");
        assert_eq!(empty, RelationshipSummary::default());
    }

    #[test]
    fn test_add_and_remove() {
        let mut service = RelationshipService::new();
        assert!(service.add_relationship("risk-001", "risk", item("task-009", RelatedItemType::Task)));
        assert!(!service.add_relationship("risk-001", "risk", item("task-009", RelatedItemType::Task)));
        assert!(!service.add_relationship("risk-001", "widget", item("task-010", RelatedItemType::Task)));
        assert_eq!(service.related_items("risk-001", "risks").len(), 1);

        assert!(service.remove_relationship("risk-001", "risk", "task-009"));
        assert!(!service.remove_relationship("risk-001", "risk", "task-009"));
        assert!(!service.remove_relationship("risk-404", "risk", "task-009"));
        assert!(service.related_items("risk-001", "risk").is_empty());
    }

    #[test]
    fn test_unknown_source_type_rejected() {
        let err = RelationshipService::from_json(r#"{ "widgets": {} }"#).unwrap_err();
        assert!(err.to_string().contains("relationship graph"));
    }
}
