//! Navigation state for the operations table.
//!
//! Row selection, horizontal column scrolling, and the row detail view flag.
//! Pure bookkeeping; every method takes the relevant list length so the state
//! can never point outside the data.

use crate::table::COLUMNS;

// ============================================================================
// Navigation State
// ============================================================================

/// Selection and scroll positions for the operations table.
#[derive(Debug, Default)]
pub struct NavigationState {
    /// Selected row in display order, if any.
    pub selected_row: Option<usize>,
    /// Index of the first visible column (horizontal scroll offset).
    pub first_col: usize,
    /// Whether the row detail view is open.
    pub show_detail: bool,
    /// Selected field inside the detail view.
    pub detail_field_index: usize,
}

impl NavigationState {
    /// Creates a navigation state with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all positions (new query or network switch).
    pub fn reset(&mut self) {
        self.selected_row = None;
        self.first_col = 0;
        self.show_detail = false;
        self.detail_field_index = 0;
    }

    /// Moves the row selection up, wrapping at the top.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.selected_row.unwrap_or(0);
        self.selected_row = Some(if current == 0 { len - 1 } else { current - 1 });
    }

    /// Moves the row selection down, wrapping at the bottom.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.selected_row.unwrap_or(len - 1);
        self.selected_row = Some((current + 1) % len);
    }

    /// Moves a page up without wrapping.
    pub fn page_up(&mut self, page: usize) {
        if let Some(current) = self.selected_row {
            self.selected_row = Some(current.saturating_sub(page.max(1)));
        }
    }

    /// Moves a page down without wrapping.
    pub fn page_down(&mut self, page: usize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.selected_row.unwrap_or(0);
        self.selected_row = Some((current + page.max(1)).min(len - 1));
    }

    /// Scrolls one column to the left.
    pub fn scroll_cols_left(&mut self) {
        self.first_col = self.first_col.saturating_sub(1);
    }

    /// Scrolls one column to the right, keeping at least one column visible.
    pub fn scroll_cols_right(&mut self) {
        if self.first_col + 1 < COLUMNS.len() {
            self.first_col += 1;
        }
    }

    /// Re-clamps the selection after the data changed.
    pub fn sync_after_update(&mut self, len: usize) {
        self.selected_row = match (self.selected_row, len) {
            (_, 0) => None,
            (Some(row), len) => Some(row.min(len - 1)),
            (None, _) => Some(0),
        };
    }

    /// Opens the detail view for the selected row.
    pub fn open_detail(&mut self) {
        if self.selected_row.is_some() {
            self.show_detail = true;
            self.detail_field_index = 0;
        }
    }

    /// Closes the detail view. Idempotent.
    pub fn close_detail(&mut self) {
        self.show_detail = false;
        self.detail_field_index = 0;
    }

    /// Moves the detail field selection up, wrapping.
    pub fn detail_prev(&mut self) {
        let len = COLUMNS.len();
        self.detail_field_index = if self.detail_field_index == 0 {
            len - 1
        } else {
            self.detail_field_index - 1
        };
    }

    /// Moves the detail field selection down, wrapping.
    pub fn detail_next(&mut self) {
        self.detail_field_index = (self.detail_field_index + 1) % COLUMNS.len();
    }
}

// ============================================================================
// Tests
// ============================================================================
