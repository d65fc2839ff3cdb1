//! List view-state: search text and sort order, and the pure
//! derivation of the visible record set from the full fetched set.
//!
//! The derivation owns nothing and mutates nothing — it is a pure
//! function of (records, search text, sort order) and yields the same
//! output for the same inputs every time.

use serde::{Deserialize, Serialize};

use domain_admin_api::DomainRecord;

/// Sort direction over `created_date`. Absence means the filtered
/// order is preserved unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Client-side view state of the record table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListViewState {
    search_text: String,
    sort_order: Option<SortOrder>,
}

impl ListViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_sort_order(&mut self, order: Option<SortOrder>) {
        self.sort_order = order;
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    /// Derive the visible, ordered record set.
    ///
    /// 1. Filter: keep records whose `domain` contains the search text
    ///    case-insensitively; empty search keeps everything.
    /// 2. Sort: order by `created_date` in the requested direction.
    ///    The sort is stable, so equal timestamps keep their filtered
    ///    relative order; `None` preserves the filtered order as-is.
    #[must_use]
    pub fn visible_records(&self, records: &[DomainRecord]) -> Vec<DomainRecord> {
        let needle = self.search_text.to_lowercase();
        let mut visible: Vec<DomainRecord> = records
            .iter()
            .filter(|r| needle.is_empty() || r.domain.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        match self.sort_order {
            Some(SortOrder::Ascending) => visible.sort_by_key(|r| r.created_date),
            Some(SortOrder::Descending) => visible.sort_by_key(|r| std::cmp::Reverse(r.created_date)),
            None => {}
        }

        visible
    }
}
