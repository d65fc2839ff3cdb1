//! Explicit request cache over the remote record set.
//!
//! Results are keyed by operation: list results by their [`ListFilter`],
//! detail results by record id. Reads populate the cache (repeated
//! reads of the same key are served without a network call); every
//! successful mutation invalidates the mutated record's entry and all
//! list entries. Only the service layer writes here — the view-state
//! controller reads derived copies and never mutates records.

use std::collections::HashMap;

use tokio::sync::RwLock;

use domain_admin_api::{DomainRecord, ListFilter};

#[derive(Default)]
struct CacheInner {
    lists: HashMap<ListFilter, Vec<DomainRecord>>,
    records: HashMap<String, DomainRecord>,
}

/// Cache of confirmed remote responses. Never updated speculatively.
#[derive(Default)]
pub struct RecordCache {
    inner: RwLock<CacheInner>,
}

impl RecordCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached list result for a filter, if still valid.
    pub async fn get_list(&self, filter: &ListFilter) -> Option<Vec<DomainRecord>> {
        self.inner.read().await.lists.get(filter).cloned()
    }

    /// Store a confirmed list result. Each contained record also
    /// refreshes the per-record entry, so a detail or edit view opened
    /// from the list is served without another fetch.
    pub async fn put_list(&self, filter: ListFilter, records: Vec<DomainRecord>) {
        let mut inner = self.inner.write().await;
        for record in &records {
            inner.records.insert(record.id.clone(), record.clone());
        }
        inner.lists.insert(filter, records);
    }

    /// Cached detail result, if still valid.
    pub async fn get_record(&self, id: &str) -> Option<DomainRecord> {
        self.inner.read().await.records.get(id).cloned()
    }

    /// Store a confirmed detail result.
    pub async fn put_record(&self, record: DomainRecord) {
        self.inner
            .write()
            .await
            .records
            .insert(record.id.clone(), record);
    }

    /// Drop the record's detail entry and every list that could contain
    /// stale data for it.
    pub async fn invalidate_record(&self, id: &str) {
        let mut inner = self.inner.write().await;
        inner.records.remove(id);
        inner.lists.clear();
    }

    /// Drop all cached list results.
    pub async fn invalidate_lists(&self) {
        self.inner.write().await.lists.clear();
    }
}
