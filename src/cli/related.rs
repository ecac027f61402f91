//! Related command handler.

use crate::model::{RelatedItem, RelationshipKind};
use crate::pipeline::exit_codes;
use crate::relationships::RelationshipService;
use anyhow::{Context, Result};

/// Inputs of the `related` command
#[derive(Debug, Clone, Default)]
pub struct RelatedQuery {
    pub item_id: String,
    /// Source type, singular or plural
    pub item_type: String,
    pub kind: Option<RelationshipKind>,
    pub module: Option<String>,
    pub search: Option<String>,
}

/// Items linked to the queried source, narrowed by every given criterion.
#[must_use]
pub fn find_related<'a>(
    service: &'a RelationshipService,
    query: &RelatedQuery,
) -> Vec<&'a RelatedItem> {
    let mut items: Vec<&RelatedItem> = match &query.search {
        Some(term) => service.search(&query.item_id, &query.item_type, term),
        None => service
            .related_items(&query.item_id, &query.item_type)
            .iter()
            .collect(),
    };
    if let Some(kind) = query.kind {
        items.retain(|item| item.relationship == kind);
    }
    if let Some(module) = &query.module {
        items.retain(|item| item.module.eq_ignore_ascii_case(module));
    }
    items
}

/// Run the related command
pub fn run_related(query: &RelatedQuery, json: bool, fail_on_empty: bool) -> Result<i32> {
    let service = RelationshipService::builtin().context("loading relationships")?;
    let items = find_related(&service, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("No related items for {} '{}'.", query.item_type, query.item_id);
    } else {
        println!(
            "{:<16} {:<10} {:<36} {:<12} {:<22} {}",
            "ID", "TYPE", "TITLE", "STATUS", "MODULE", "RELATIONSHIP"
        );
        for item in &items {
            println!(
                "{:<16} {:<10} {:<36} {:<12} {:<22} {}",
                item.id, item.item_type.as_str(), item.title, item.status, item.module, item.relationship
            );
        }
        let summary = service.summary(&query.item_id, &query.item_type);
        println!();
        println!("{} shown of {} linked", items.len(), summary.total);
    }

    if fail_on_empty && items.is_empty() {
        return Ok(exit_codes::EMPTY_RESULT);
    }
    Ok(exit_codes::SUCCESS)
}
