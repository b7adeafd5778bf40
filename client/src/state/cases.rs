//! Collections dashboard state: the case list and its filters.

#[cfg(test)]
#[path = "cases_test.rs"]
mod cases_test;

use models::{CaseStatus, CollectionCase, CollectionQuery};

/// State behind the collections dashboard table.
#[derive(Clone, Debug, Default)]
pub struct CasesState {
    /// Cases for the current page, as returned by the backend.
    pub items: Vec<CollectionCase>,
    /// Total matches across pages.
    pub total: i64,
    /// True while a list request is in flight.
    pub loading: bool,
    /// Last list fetch failure, if any.
    pub error: Option<String>,
    /// Current free-text search input.
    pub search: String,
    /// Active status tab; `None` is the "All" tab.
    pub status_tab: Option<CaseStatus>,
    /// Zero-based page index.
    pub page: u32,
}

impl CasesState {
    /// Build the backend query for the current filters.
    #[must_use]
    pub fn query(&self) -> CollectionQuery {
        CollectionQuery {
            search: self.search.trim().to_owned(),
            status: self.status_tab,
            page: self.page,
        }
    }

    /// Reset to the first page; filters changed.
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    /// Store a successful list response.
    pub fn apply_response(&mut self, items: Vec<CollectionCase>, total: i64) {
        self.items = items;
        self.total = total;
        self.loading = false;
        self.error = None;
    }

    /// Store a failed list fetch, keeping the stale rows visible.
    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
