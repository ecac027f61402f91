//! Category catalog: generator and column schema per category.
//!
//! Each [`CategoryEntry`] pairs the record builder for a category with the
//! column schema that displays it, so the two are authored side by side and
//! cannot drift independently. Dispatch is a table lookup; categories
//! without an entry get no records and the generic three-column schema.
//!
//! ```
//! use counsel_drilldown::catalog::{self, GenerationContext};
//! use counsel_drilldown::filter::FilterMap;
//! use counsel_drilldown::model::Category;
//!
//! let mut ctx = GenerationContext::seeded(42, chrono::Utc::now());
//! let filters = FilterMap::new().with("status", "executed");
//! let records = catalog::generate(&Category::Contracts, Some(&filters), &mut ctx);
//! assert!(records.iter().all(|r| r.get("status") == filters.get("status")));
//! assert_eq!(catalog::get_columns(&Category::Contracts)[0].key, "title");
//! ```

mod columns;
mod generators;

pub use generators::GenerationContext;

use crate::filter::{self, FilterMap};
use crate::model::{Category, ColumnDescriptor, Record};
use xxhash_rust::xxh3::xxh3_64;

/// Generator and schema for one category.
pub struct CategoryEntry {
    pub category: Category,
    /// Records per unfiltered batch
    pub batch_size: usize,
    /// Application module owning this category
    pub module: &'static str,
    build: fn(&mut GenerationContext, usize) -> Record,
    columns: fn() -> Vec<ColumnDescriptor>,
}

impl CategoryEntry {
    /// The column schema for this category.
    #[must_use]
    pub fn columns(&self) -> Vec<ColumnDescriptor> {
        (self.columns)()
    }

    /// Build the full, unfiltered batch.
    #[must_use]
    pub fn build_batch(&self, ctx: &mut GenerationContext) -> Vec<Record> {
        (0..self.batch_size).map(|i| (self.build)(ctx, i)).collect()
    }
}

static CATALOG: [CategoryEntry; 5] = [
    CategoryEntry {
        category: Category::Contracts,
        batch_size: 25,
        module: "Contract Management",
        build: generators::contract,
        columns: columns::contracts,
    },
    CategoryEntry {
        category: Category::Matters,
        batch_size: 30,
        module: "Matter Management",
        build: generators::matter,
        columns: columns::matters,
    },
    CategoryEntry {
        category: Category::Tasks,
        batch_size: 40,
        module: "Task Management",
        build: generators::task,
        columns: columns::tasks,
    },
    CategoryEntry {
        category: Category::Risks,
        batch_size: 20,
        module: "Risk Management",
        build: generators::risk,
        columns: columns::risks,
    },
    CategoryEntry {
        category: Category::Compliance,
        batch_size: 15,
        module: "Data Protection",
        build: generators::compliance,
        columns: columns::compliance,
    },
];

/// All registered categories.
#[must_use]
pub fn entries() -> &'static [CategoryEntry] {
    &CATALOG
}

/// Look up the entry for a category.
#[must_use]
pub fn entry(category: &Category) -> Option<&'static CategoryEntry> {
    CATALOG.iter().find(|e| &e.category == category)
}

/// Column schema for a category; the generic fallback for unknown tags.
#[must_use]
pub fn get_columns(category: &Category) -> Vec<ColumnDescriptor> {
    entry(category).map_or_else(columns::generic, CategoryEntry::columns)
}

/// Generate the records for a category, filtered and in batch order.
///
/// Unknown categories produce an empty list.
#[must_use]
pub fn generate(
    category: &Category,
    filters: Option<&FilterMap>,
    ctx: &mut GenerationContext,
) -> Vec<Record> {
    let Some(entry) = entry(category) else {
        tracing::debug!(category = %category, "no generator registered");
        return Vec::new();
    };
    filter::apply(entry.build_batch(ctx), filters)
}

/// Per-category seed salt so categories sharing a seed get unrelated data.
#[must_use]
pub fn category_salt(category: &Category) -> u64 {
    xxh3_64(category.as_str().as_bytes())
}
