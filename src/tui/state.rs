//! Selection state for the dashboard.
//!
//! [`ListState`] tracks the selected row of the slide-over table;
//! [`GridState`] moves across the metric card grid.

use super::constants::PAGE_SIZE;

/// Selection and navigation over a list of `total` items.
pub trait ListNavigation {
    fn selected(&self) -> usize;

    fn set_selected(&mut self, idx: usize);

    fn total(&self) -> usize;

    fn select_next(&mut self) {
        let (total, selected) = (self.total(), self.selected());
        if total > 0 && selected + 1 < total {
            self.set_selected(selected + 1);
        }
    }

    fn select_prev(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(1));
    }

    fn page_down(&mut self) {
        let total = self.total();
        if total > 0 {
            self.set_selected((self.selected() + PAGE_SIZE).min(total - 1));
        }
    }

    fn page_up(&mut self) {
        let selected = self.selected();
        self.set_selected(selected.saturating_sub(PAGE_SIZE));
    }

    fn go_first(&mut self) {
        self.set_selected(0);
    }

    fn go_last(&mut self) {
        let total = self.total();
        self.set_selected(total.saturating_sub(1));
    }
}

/// Row cursor for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
}

impl ListState {
    #[must_use]
    pub const fn with_total(total: usize) -> Self {
        Self { selected: 0, total }
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }
}

/// Cursor over `total` cells laid out `columns` per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridState {
    pub selected: usize,
    pub total: usize,
    pub columns: usize,
}

impl GridState {
    #[must_use]
    pub fn new(total: usize, columns: usize) -> Self {
        Self {
            selected: 0,
            total,
            columns: columns.max(1),
        }
    }

    pub fn right(&mut self) {
        if self.selected + 1 < self.total {
            self.selected += 1;
        }
    }

    pub fn left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + self.columns < self.total {
            self.selected += self.columns;
        }
    }

    pub fn up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    /// `(row, column)` of the selection.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.selected / self.columns, self.selected % self.columns)
    }
}
