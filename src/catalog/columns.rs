//! Hand-authored column schemas, one per category.

use crate::model::{ColumnDescriptor, ColumnKind};

fn col(key: &str, label: &str, kind: ColumnKind) -> ColumnDescriptor {
    ColumnDescriptor::new(key, label, kind)
}

pub(super) fn contracts() -> Vec<ColumnDescriptor> {
    use ColumnKind::{Badge, Currency, Date, Text};
    vec![
        col("title", "Contract Title", Text),
        col("counterparty", "Counterparty", Text),
        col("value", "Value", Currency),
        col("status", "Status", Badge),
        col("priority", "Priority", Badge),
        col("created_date", "Created", Date),
        col("expiry_date", "Expires", Date),
        col("owner", "Owner", Text),
    ]
}

pub(super) fn matters() -> Vec<ColumnDescriptor> {
    use ColumnKind::{Badge, Currency, Date, Text};
    vec![
        col("title", "Matter Title", Text),
        col("client", "Client", Text),
        col("budget", "Budget", Currency),
        col("spent", "Spent", Currency),
        col("status", "Status", Badge),
        col("priority", "Priority", Badge),
        col("opened_date", "Opened", Date),
        col("deadline", "Deadline", Date),
        col("attorney", "Attorney", Text),
    ]
}

pub(super) fn tasks() -> Vec<ColumnDescriptor> {
    use ColumnKind::{Badge, Date, Number, Text};
    vec![
        col("title", "Task Title", Text),
        col("assignee", "Assignee", Text),
        col("status", "Status", Badge),
        col("priority", "Priority", Badge),
        col("created_date", "Created", Date),
        col("due_date", "Due Date", Date),
        col("estimated_hours", "Est. Hours", Number),
        col("actual_hours", "Actual Hours", Number),
    ]
}

pub(super) fn risks() -> Vec<ColumnDescriptor> {
    use ColumnKind::{Badge, Date, Number, Text};
    vec![
        col("title", "Risk Title", Text),
        col("category", "Category", Badge),
        col("severity", "Severity", Badge),
        col("status", "Status", Badge),
        col("probability", "Probability %", Number),
        col("impact", "Impact %", Number),
        col("identified_date", "Identified", Date),
        col("review_date", "Review Date", Date),
        col("owner", "Owner", Text),
    ]
}

pub(super) fn compliance() -> Vec<ColumnDescriptor> {
    use ColumnKind::{Badge, Date, Number, Text};
    vec![
        col("framework", "Framework", Badge),
        col("requirement", "Requirement", Text),
        col("status", "Status", Badge),
        col("priority", "Priority", Badge),
        col("score", "Score %", Number),
        col("last_assessment", "Last Assessment", Date),
        col("next_review", "Next Review", Date),
        col("owner", "Owner", Text),
    ]
}

/// Minimal schema for categories without a registered entry.
pub(super) fn generic() -> Vec<ColumnDescriptor> {
    vec![
        col("id", "ID", ColumnKind::Text),
        col("title", "Title", ColumnKind::Text),
        col("status", "Status", ColumnKind::Badge),
    ]
}
