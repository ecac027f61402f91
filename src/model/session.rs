//! The payload backing one open drill-down.

use super::{Category, ColumnDescriptor, Record, RelatedItemHandler};
use crate::filter::FilterMap;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A drill-down session: title, records, schema and relationship flags.
///
/// Sessions are created by the controller on open and dropped shortly after
/// close. Records are generated fresh per session and never mutated.
#[derive(Clone, Serialize)]
pub struct Session {
    /// `<category>-<unix millis>-<generation>`
    pub id: String,
    pub category: Category,
    pub title: String,
    pub module: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterMap>,
    pub data: Vec<Record>,
    pub columns: Vec<ColumnDescriptor>,
    pub show_relationships: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_item_id: Option<String>,
    #[serde(skip)]
    pub on_related_item_click: Option<RelatedItemHandler>,
    /// Set when the record source failed; `data` is then empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Controller generation that produced this session
    pub generation: u64,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Build the session id from its category, creation time and generation.
    #[must_use]
    pub fn make_id(category: &Category, created_at: DateTime<Utc>, generation: u64) -> String {
        format!(
            "{}-{}-{}",
            category.as_str(),
            created_at.timestamp_millis(),
            generation
        )
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Find a column by record key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// The record matching `selected_item_id`, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selected_item_id.as_deref()?;
        self.data.iter().find(|r| r.id() == Some(id))
    }

    /// Whether the relationships panel has enough to render.
    #[must_use]
    pub fn wants_relationships(&self) -> bool {
        self.show_relationships && self.item_type.is_some() && self.selected_item_id.is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("title", &self.title)
            .field("module", &self.module)
            .field("filters", &self.filters)
            .field("records", &self.data.len())
            .field("columns", &self.columns.len())
            .field("show_relationships", &self.show_relationships)
            .field("error", &self.error)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
