//! Shared HTTP plumbing for [`RestDomainClient`](crate::RestDomainClient).
//!
//! Unified processing: sending requests, logging, status-code mapping,
//! response parsing. The remote service speaks bare JSON with HTTP
//! status codes (no success envelope), so classification is purely by
//! status: 404 with a known record id maps to `NotFound`, any other
//! non-2xx maps to `Transport`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::client::RestDomainClient;
use crate::error::{ApiError, Result};

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Maximum response body length echoed into debug logs.
const LOG_BODY_MAX_CHARS: usize = 512;

/// Build the shared HTTP client with timeout configuration. A stalled
/// call surfaces as a `Transport` error once the request timeout fires.
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Truncate a response body for logging.
pub(crate) fn truncate_for_log(text: &str) -> String {
    if text.chars().count() <= LOG_BODY_MAX_CHARS {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(LOG_BODY_MAX_CHARS).collect();
        format!("{truncated}... (truncated)")
    }
}

impl RestDomainClient {
    /// Execute a request and parse the JSON response body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        record_id: Option<&str>,
    ) -> Result<T> {
        let body = self.send(request, method, url, record_id).await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("[{method} {url}] JSON parse failed: {e}");
            log::error!("[{method} {url}] Raw response: {}", truncate_for_log(&body));
            ApiError::transport(format!("invalid response body: {e}"))
        })
    }

    /// Execute a request and return the raw response body, mapping
    /// transport failures and non-2xx statuses onto [`ApiError`].
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        record_id: Option<&str>,
    ) -> Result<String> {
        log::debug!("{method} {url}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::transport(format!("request timed out: {e}"))
            } else {
                ApiError::transport(e.to_string())
            }
        })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(format!("failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = record_id {
                log::warn!("{method} {url}: record '{id}' not found");
                return Err(ApiError::NotFound { id: id.to_string() });
            }
        }

        if !status.is_success() {
            log::error!("{method} {url} failed: HTTP {status}");
            return Err(ApiError::transport(format!(
                "HTTP {status}: {}",
                truncate_for_log(&body)
            )));
        }

        Ok(body)
    }
}
