//! Column descriptors for drill-down tables.

use super::{Record, Value};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default formatting applied to a column's cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Date,
    Badge,
    Currency,
}

impl ColumnKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Badge => "badge",
            Self::Currency => "currency",
        }
    }

    /// Whether cells of this kind read better right-aligned.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Currency)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custom cell renderer: receives the cell value and its whole row.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// One column of a drill-down table.
#[derive(Clone, Serialize)]
pub struct ColumnDescriptor {
    /// Record field the column reads
    pub key: String,
    /// Header label
    pub label: String,
    /// Default formatting
    pub kind: ColumnKind,
    /// Overrides default formatting when set
    #[serde(skip)]
    pub render: Option<CellRenderer>,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            render: None,
        }
    }

    /// Attach a custom renderer.
    #[must_use]
    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    #[must_use]
    pub const fn has_custom_render(&self) -> bool {
        self.render.is_some()
    }
}

impl std::fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl PartialEq for ColumnDescriptor {
    /// Renderers are opaque; two descriptors are equal when their data is.
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.label == other.label && self.kind == other.kind
    }
}
