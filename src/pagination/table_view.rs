use crate::pagination::page_size::PageSize;
use crate::pagination::window::{clamp_page, total_pages, window, PageWindow};
use crate::types::series::DailySeries;

/// The table's paging position. Each user action yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView {
    pub page_size: PageSize,
    pub page_index: usize,
}

impl TableView {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            page_index: 1,
        }
    }

    /// Switching page size always goes back to the first page.
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self::new(page_size)
    }

    pub fn go_to(self, page_index: usize, total_items: usize) -> Self {
        Self {
            page_index: clamp_page(page_index, total_pages(total_items, self.page_size)),
            ..self
        }
    }

    /// Stays put on the last page.
    pub fn next(self, total_items: usize) -> Self {
        self.go_to(self.page_index.saturating_add(1), total_items)
    }

    /// Stays put on the first page.
    pub fn previous(self, total_items: usize) -> Self {
        self.go_to(self.page_index.saturating_sub(1), total_items)
    }

    pub fn first_page(self) -> Self {
        Self::new(self.page_size)
    }

    pub fn window(&self, series: &DailySeries) -> PageWindow {
        window(series, self.page_size, self.page_index)
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
