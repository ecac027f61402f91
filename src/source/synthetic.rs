//! Seeded synthetic records.

use super::RecordSource;
use crate::catalog::{self, GenerationContext};
use crate::error::Result;
use crate::filter::FilterMap;
use crate::model::{Category, Record};
use chrono::{DateTime, Utc};

/// Generates records through the category catalog.
///
/// With a seed, each category's batch is reproducible: the RNG is seeded
/// with `seed ^ category_salt` on every call. Without one, every call draws
/// fresh entropy and two calls are not expected to agree. Dates are placed
/// around `anchor`, or the current time when no anchor is pinned.
#[derive(Debug, Clone, Default)]
pub struct SyntheticSource {
    seed: Option<u64>,
    anchor: Option<DateTime<Utc>>,
}

impl SyntheticSource {
    /// Reproducible source.
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            anchor: None,
        }
    }

    /// Source drawing from OS entropy on every call.
    #[must_use]
    pub const fn unseeded() -> Self {
        Self {
            seed: None,
            anchor: None,
        }
    }

    /// Pin the time anchor used for generated dates.
    #[must_use]
    pub const fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn context(&self, category: &Category) -> GenerationContext {
        let now = self.anchor.unwrap_or_else(Utc::now);
        match self.seed {
            Some(seed) => GenerationContext::seeded(seed ^ catalog::category_salt(category), now),
            None => GenerationContext::from_entropy(now),
        }
    }
}

impl RecordSource for SyntheticSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(&self, category: &Category) -> Result<Vec<Record>> {
        Ok(catalog::generate(category, None, &mut self.context(category)))
    }

    fn query(&self, category: &Category, filters: Option<&FilterMap>) -> Result<Vec<Record>> {
        Ok(catalog::generate(
            category,
            filters,
            &mut self.context(category),
        ))
    }
}
