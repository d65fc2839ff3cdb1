//! Domain record management service.
//!
//! Orchestrates the REST client and the request cache: reads are
//! cache-first, every successful mutation invalidates what could be
//! stale and re-fetches the full list from the remote service (never a
//! locally reconstructed guess). The cache is only written from
//! confirmed successful responses.

use std::sync::Arc;

use chrono::Utc;

use domain_admin_api::{
    CreateDomainRequest, DomainRecord, DomainStatus, ListFilter, UpdateDomainRequest,
};

use crate::error::CoreResult;
use crate::form::DomainForm;
use crate::services::ServiceContext;

pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// List records, optionally narrowed server-side. Repeated calls
    /// with the same filter are served from cache until a mutation
    /// invalidates it.
    pub async fn list(&self, filter: &ListFilter) -> CoreResult<Vec<DomainRecord>> {
        if let Some(cached) = self.ctx.cache.get_list(filter).await {
            return Ok(cached);
        }
        match self.ctx.api.list(filter).await {
            Ok(records) => {
                self.ctx.cache.put_list(*filter, records.clone()).await;
                Ok(records)
            }
            Err(e) => Err(self
                .ctx
                .handle_api_error("list domains", "Failed to load domains", e)),
        }
    }

    /// Fetch one record, cache-first.
    pub async fn get(&self, id: &str) -> CoreResult<DomainRecord> {
        if let Some(cached) = self.ctx.cache.get_record(id).await {
            return Ok(cached);
        }
        match self.ctx.api.get_by_id(id).await {
            Ok(record) => {
                self.ctx.cache.put_record(record.clone()).await;
                Ok(record)
            }
            Err(e) => Err(self
                .ctx
                .handle_api_error("load domain", "Failed to load domain", e)),
        }
    }

    /// Create a record from form values, stamping `created_date` with
    /// the current time. The remote assigns the `id`.
    pub async fn create(&self, form: &DomainForm) -> CoreResult<DomainRecord> {
        let req = CreateDomainRequest {
            domain: form.domain.clone(),
            status: form.status,
            is_active: form.is_active,
            created_date: Utc::now().timestamp(),
        };
        // Local validation failure: no network call, no notification.
        req.validate()?;

        match self.ctx.api.create(&req).await {
            Ok(record) => {
                self.ctx.cache.invalidate_lists().await;
                self.ctx.cache.put_record(record.clone()).await;
                self.refresh_list().await;
                self.ctx.notify_success("Domain created successfully");
                Ok(record)
            }
            Err(e) => Err(self
                .ctx
                .handle_api_error("create domain", "Failed to create domain", e)),
        }
    }

    /// Patch a record with the full set of form values, stamping
    /// `updated_date`.
    pub async fn update(&self, id: &str, form: &DomainForm) -> CoreResult<DomainRecord> {
        let req = UpdateDomainRequest {
            domain: Some(form.domain.clone()),
            status: Some(form.status),
            is_active: Some(form.is_active),
            updated_date: Some(Utc::now().timestamp()),
        };
        self.apply_update(
            id,
            req,
            "Domain updated successfully",
            "Failed to update domain",
        )
        .await
    }

    /// Narrow convenience over `update`: change only the status.
    pub async fn set_status(&self, id: &str, status: DomainStatus) -> CoreResult<DomainRecord> {
        let req = UpdateDomainRequest {
            status: Some(status),
            updated_date: Some(Utc::now().timestamp()),
            ..UpdateDomainRequest::default()
        };
        self.apply_update(
            id,
            req,
            "Domain status updated successfully",
            "Failed to update domain status",
        )
        .await
    }

    /// Narrow convenience over `update`: change only the active flag.
    pub async fn set_active(&self, id: &str, is_active: bool) -> CoreResult<DomainRecord> {
        let req = UpdateDomainRequest {
            is_active: Some(is_active),
            updated_date: Some(Utc::now().timestamp()),
            ..UpdateDomainRequest::default()
        };
        let success_msg = if is_active {
            "Domain activated successfully"
        } else {
            "Domain deactivated successfully"
        };
        self.apply_update(id, req, success_msg, "Failed to toggle domain status")
            .await
    }

    /// Delete a record. A second delete of the same `id` surfaces as
    /// `NotFound`, which is reported but not treated as fatal state.
    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        match self.ctx.api.delete(id).await {
            Ok(()) => {
                self.ctx.cache.invalidate_record(id).await;
                self.refresh_list().await;
                self.ctx.notify_success("Domain deleted successfully");
                Ok(())
            }
            Err(e) => Err(self
                .ctx
                .handle_api_error("delete domain", "Failed to delete domain", e)),
        }
    }

    async fn apply_update(
        &self,
        id: &str,
        req: UpdateDomainRequest,
        success_msg: &str,
        failure_msg: &str,
    ) -> CoreResult<DomainRecord> {
        req.validate()?;
        match self.ctx.api.update(id, &req).await {
            Ok(record) => {
                self.ctx.cache.invalidate_record(id).await;
                self.ctx.cache.put_record(record.clone()).await;
                self.refresh_list().await;
                self.ctx.notify_success(success_msg);
                Ok(record)
            }
            Err(e) => Err(self.ctx.handle_api_error("update domain", failure_msg, e)),
        }
    }

    /// Re-fetch the unfiltered list after a successful mutation so the
    /// cache reflects the remote state at refresh time. A failed
    /// refresh leaves the cache invalidated; the next `list` call
    /// fetches again.
    async fn refresh_list(&self) {
        match self.ctx.api.list(&ListFilter::default()).await {
            Ok(records) => {
                self.ctx
                    .cache
                    .put_list(ListFilter::default(), records)
                    .await;
            }
            Err(e) => log::warn!("post-mutation list refresh failed: {e}"),
        }
    }
}
