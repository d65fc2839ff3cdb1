//! # domain-admin-api
//!
//! Typed REST client for the hosted domain admin service: list, fetch,
//! create, patch, and delete domain records against a CRUD endpoint.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_admin_api::{
//!     CreateDomainRequest, DomainApi, DomainStatus, ListFilter, RestDomainClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestDomainClient::new("https://example.mockapi.io/domain");
//!
//!     let records = client.list(&ListFilter::default()).await?;
//!     for record in &records {
//!         println!("{} ({:?})", record.domain, record.status);
//!     }
//!
//!     let created = client
//!         .create(&CreateDomainRequest {
//!             domain: "https://example.com".to_string(),
//!             status: DomainStatus::Pending,
//!             is_active: true,
//!             created_date: 1_700_000_000,
//!         })
//!         .await?;
//!     println!("assigned id: {}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::Validation`] — malformed input, caught client-side;
//!   the request is never sent.
//! - [`ApiError::NotFound`] — the remote reported the record absent.
//! - [`ApiError::Transport`] — network failure, timeout, or an
//!   unclassified non-2xx response.
//!
//! Nothing is retried automatically; a failed call must be re-issued
//! by the caller.

mod client;
mod error;
mod http;
mod traits;
mod types;
mod validate;

pub use client::RestDomainClient;
pub use error::{ApiError, Result};
pub use traits::DomainApi;
pub use types::{
    CreateDomainRequest, DomainRecord, DomainStatus, ListFilter, UpdateDomainRequest,
};
pub use validate::validate_domain_url;
