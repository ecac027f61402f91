//! Named constants for dashboard layout and navigation.

/// Rows to move per page-up/page-down.
pub(crate) const PAGE_SIZE: usize = 10;

/// Metric cards per dashboard row.
pub(crate) const CARD_COLUMNS: usize = 4;

/// Width of the fully open slide-over, as a percentage of the screen.
pub(crate) const SLIDE_OVER_PERCENT: u16 = 62;

/// Height of the related-items panel inside the slide-over.
pub(crate) const RELATED_PANEL_HEIGHT: u16 = 9;
