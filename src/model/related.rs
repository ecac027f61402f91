//! Cross-module relationship items shown next to a drill-down.

use super::Category;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kind of record on the far side of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedItemType {
    Contract,
    Matter,
    Task,
    Risk,
    Dispute,
    Compliance,
    Template,
    Entity,
    Vendor,
    Document,
}

impl RelatedItemType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Matter => "matter",
            Self::Task => "task",
            Self::Risk => "risk",
            Self::Dispute => "dispute",
            Self::Compliance => "compliance",
            Self::Template => "template",
            Self::Entity => "entity",
            Self::Vendor => "vendor",
            Self::Document => "document",
        }
    }

    /// Parse a singular type name (`"contract"`) or its plural source key
    /// (`"contracts"`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let singular = match lower.as_str() {
            "compliance" => "compliance",
            other => other.strip_suffix('s').unwrap_or(other),
        };
        match singular {
            "contract" => Some(Self::Contract),
            "matter" => Some(Self::Matter),
            "task" => Some(Self::Task),
            "risk" => Some(Self::Risk),
            "dispute" => Some(Self::Dispute),
            "compliance" => Some(Self::Compliance),
            "template" => Some(Self::Template),
            "entity" | "entitie" => Some(Self::Entity),
            "vendor" => Some(Self::Vendor),
            "document" => Some(Self::Document),
            _ => None,
        }
    }

    /// Key under which items of this type are stored as relationship sources.
    #[must_use]
    pub const fn source_key(&self) -> &'static str {
        match self {
            Self::Contract => "contracts",
            Self::Matter => "matters",
            Self::Task => "tasks",
            Self::Risk => "risks",
            Self::Dispute => "disputes",
            Self::Compliance => "compliance",
            Self::Template => "templates",
            Self::Entity => "entities",
            Self::Vendor => "vendors",
            Self::Document => "documents",
        }
    }

    /// Drill-down category for this item type, if one exists.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::Contract => Some(Category::Contracts),
            Self::Matter => Some(Category::Matters),
            Self::Task => Some(Category::Tasks),
            Self::Risk => Some(Category::Risks),
            Self::Compliance => Some(Category::Compliance),
            _ => None,
        }
    }
}

impl std::fmt::Display for RelatedItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a related item is linked to its source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Primary,
    Related,
    Dependent,
    Referenced,
}

impl RelationshipKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Related => "related",
            Self::Dependent => "dependent",
            Self::Referenced => "referenced",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item linked to a drill-down record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: RelatedItemType,
    pub title: String,
    pub status: String,
    /// Owning application module, e.g. "Matter Management"
    pub module: String,
    pub relationship: RelationshipKind,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Callback invoked by a presentation surface when a related item is chosen.
///
/// Opaque to the controller, which only carries it on the session.
pub type RelatedItemHandler = Arc<dyn Fn(&RelatedItem) + Send + Sync>;
