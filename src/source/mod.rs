//! Record sources backing drill-down sessions.
//!
//! The controller asks a [`RecordSource`] for the records of a category.
//! [`SyntheticSource`] generates seeded in-memory data through the catalog;
//! [`FixtureSource`] serves records loaded from a JSON document and stands in
//! for a real query layer behind the same interface.

mod fixture;
mod synthetic;

pub use fixture::FixtureSource;
pub use synthetic::SyntheticSource;

use crate::error::Result;
use crate::filter::{self, FilterMap};
use crate::model::{Category, Record};

/// A provider of records per category.
///
/// Implementations return an empty list for categories they do not know;
/// errors are reserved for a source that cannot answer at all.
pub trait RecordSource {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// The full, unfiltered batch for `category`.
    fn fetch(&self, category: &Category) -> Result<Vec<Record>>;

    /// The batch for `category` with `filters` applied, order preserved.
    fn query(&self, category: &Category, filters: Option<&FilterMap>) -> Result<Vec<Record>> {
        Ok(filter::apply(self.fetch(category)?, filters))
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self, category: &Category) -> Result<Vec<Record>> {
        (**self).fetch(category)
    }

    fn query(&self, category: &Category, filters: Option<&FilterMap>) -> Result<Vec<Record>> {
        (**self).query(category, filters)
    }
}
