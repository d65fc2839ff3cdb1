use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CreateDomainRequest, DomainRecord, ListFilter, UpdateDomainRequest};

/// Domain record CRUD against the remote service.
///
/// [`RestDomainClient`](crate::RestDomainClient) is the production
/// implementation; consumers mock this trait to test orchestration
/// without a network.
///
/// Every call is an independent suspension point: the caller observes
/// either a success value or an error, never both. No call is retried
/// automatically.
#[async_trait]
pub trait DomainApi: Send + Sync {
    /// Fetch all records, optionally narrowed by the remote-understood
    /// status/active predicates.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<DomainRecord>>;

    /// Fetch one record. `NotFound` if the remote reports absence.
    async fn get_by_id(&self, id: &str) -> Result<DomainRecord>;

    /// Submit a new record; the remote assigns the `id`. Validates
    /// client-side before sending.
    async fn create(&self, req: &CreateDomainRequest) -> Result<DomainRecord>;

    /// Submit a partial patch. `NotFound` if `id` does not exist
    /// remotely. Validates client-side before sending.
    async fn update(&self, id: &str, req: &UpdateDomainRequest) -> Result<DomainRecord>;

    /// Remove a record. Deleting an already-deleted `id` surfaces
    /// `NotFound`, which callers may treat as non-fatal.
    async fn delete(&self, id: &str) -> Result<()>;
}
