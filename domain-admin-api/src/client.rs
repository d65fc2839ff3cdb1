//! reqwest-backed [`DomainApi`] implementation.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http::create_http_client;
use crate::traits::DomainApi;
use crate::types::{CreateDomainRequest, DomainRecord, ListFilter, UpdateDomainRequest};

/// REST client for the hosted domain service.
///
/// Holds one shared connection pool; cloning is not required, wrap in
/// `Arc` to share. The base URL points at the collection root, e.g.
/// `https://<project>.mockapi.io/domain`.
pub struct RestDomainClient {
    pub(crate) client: Client,
    base_url: String,
}

impl RestDomainClient {
    /// Create a client for the given collection root URL. A trailing
    /// slash is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Collection root URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl DomainApi for RestDomainClient {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<DomainRecord>> {
        let request = self.client.get(&self.base_url).query(&filter.query_pairs());
        self.execute(request, "GET", &self.base_url, None).await
    }

    async fn get_by_id(&self, id: &str) -> Result<DomainRecord> {
        let url = self.record_url(id);
        let request = self.client.get(&url);
        self.execute(request, "GET", &url, Some(id)).await
    }

    async fn create(&self, req: &CreateDomainRequest) -> Result<DomainRecord> {
        req.validate()?;
        let request = self.client.post(&self.base_url).json(req);
        self.execute(request, "POST", &self.base_url, None).await
    }

    async fn update(&self, id: &str, req: &UpdateDomainRequest) -> Result<DomainRecord> {
        req.validate()?;
        let url = self.record_url(id);
        let request = self.client.put(&url).json(req);
        self.execute(request, "PUT", &url, Some(id)).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.record_url(id);
        let request = self.client.delete(&url);
        // No meaningful response body; a second delete of the same id
        // surfaces as NotFound.
        self.send(request, "DELETE", &url, Some(id)).await?;
        Ok(())
    }
}
