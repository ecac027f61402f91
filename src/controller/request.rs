//! Arguments for opening a drill-down.

use crate::filter::FilterMap;
use crate::model::{Category, RelatedItem, RelatedItemHandler};
use std::sync::Arc;

/// Everything needed to open one drill-down.
///
/// ```
/// use counsel_drilldown::controller::OpenRequest;
/// use counsel_drilldown::filter::FilterMap;
///
/// let request = OpenRequest::new("contracts", "Active Contracts", "Dashboard")
///     .filters(FilterMap::new().with("status", "executed"));
/// assert_eq!(request.category().as_str(), "contracts");
/// ```
#[derive(Clone)]
pub struct OpenRequest {
    pub(super) category: Category,
    pub(super) title: String,
    pub(super) module: String,
    pub(super) filters: Option<FilterMap>,
    pub(super) show_relationships: bool,
    pub(super) item_type: Option<String>,
    pub(super) selected_item_id: Option<String>,
    pub(super) on_related_item_click: Option<RelatedItemHandler>,
}

impl OpenRequest {
    pub fn new(
        category: impl Into<Category>,
        title: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            module: module.into(),
            filters: None,
            show_relationships: false,
            item_type: None,
            selected_item_id: None,
            on_related_item_click: None,
        }
    }

    /// Restrict records to those matching every entry.
    #[must_use]
    pub fn filters(mut self, filters: FilterMap) -> Self {
        self.filters = Some(filters);
        self
    }

    #[must_use]
    pub fn maybe_filters(mut self, filters: Option<FilterMap>) -> Self {
        self.filters = filters;
        self
    }

    /// Show the related-items panel for one item.
    #[must_use]
    pub fn relationships(
        mut self,
        item_type: impl Into<String>,
        selected_item_id: impl Into<String>,
    ) -> Self {
        self.show_relationships = true;
        self.item_type = Some(item_type.into());
        self.selected_item_id = Some(selected_item_id.into());
        self
    }

    /// Attach the related-item click handler. The controller stores it and
    /// never calls it.
    #[must_use]
    pub fn on_related_item_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&RelatedItem) + Send + Sync + 'static,
    {
        self.on_related_item_click = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub const fn filter_map(&self) -> Option<&FilterMap> {
        self.filters.as_ref()
    }
}

impl std::fmt::Debug for OpenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRequest")
            .field("category", &self.category)
            .field("title", &self.title)
            .field("module", &self.module)
            .field("filters", &self.filters)
            .field("show_relationships", &self.show_relationships)
            .field("item_type", &self.item_type)
            .field("selected_item_id", &self.selected_item_id)
            .finish_non_exhaustive()
    }
}
