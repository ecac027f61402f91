//! Data model for drill-down sessions.
//!
//! Records are flat key/value maps whose shape is fixed per [`Category`];
//! there is no shared base schema. A [`Session`] bundles one batch of
//! records with the column schema used to display them.

mod category;
mod column;
mod record;
mod related;
mod session;

pub use category::Category;
pub use column::{CellRenderer, ColumnDescriptor, ColumnKind};
pub use record::{Record, Value};
pub use related::{RelatedItem, RelatedItemHandler, RelatedItemType, RelationshipKind};
pub use session::Session;
