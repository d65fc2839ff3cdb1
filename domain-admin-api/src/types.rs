//! Wire types exchanged with the remote domain service.
//!
//! All payloads use the service's camelCase field names; dates travel
//! as integer Unix seconds, never as formatted strings.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validate::validate_domain_url;

/// Verification status of a domain record. Closed enumeration; any
/// other wire value fails deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl DomainStatus {
    /// Wire form of the status, as used in query parameters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

/// A domain record as held by the remote service.
///
/// `id` is assigned by the service and immutable once assigned.
/// `created_date` is set at creation and never modified; `updated_date`
/// is absent until the first successful mutation after creation.
/// `status` and `is_active` are independently settable — a record may
/// be rejected yet active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Opaque identifier assigned by the remote service.
    pub id: String,
    /// Absolute URL of the domain.
    pub domain: String,
    /// Verification status.
    pub status: DomainStatus,
    /// Active flag, independent of `status`.
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Creation time, Unix seconds.
    #[serde(rename = "createdDate")]
    pub created_date: i64,
    /// Last mutation time, Unix seconds. Absent until the first update.
    #[serde(rename = "updatedDate", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<i64>,
}

/// Body of a create call. Carries no `id` (remote-assigned) and no
/// `updated_date`; the caller stamps `created_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    pub domain: String,
    pub status: DomainStatus,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdDate")]
    pub created_date: i64,
}

impl CreateDomainRequest {
    /// Client-side validation, run before any network submission.
    pub fn validate(&self) -> Result<()> {
        validate_domain_url(&self.domain)
    }
}

/// Partial patch for an update call. Only present fields are
/// serialized and sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDomainRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(rename = "updatedDate", skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<i64>,
}

impl UpdateDomainRequest {
    /// Client-side validation, run before any network submission.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref domain) = self.domain {
            validate_domain_url(domain)?;
        }
        Ok(())
    }
}

/// Server-side narrowing predicates for a list call. Maps onto the
/// `status` / `isActive` query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListFilter {
    pub status: Option<DomainStatus>,
    pub is_active: Option<bool>,
}

impl ListFilter {
    /// Query parameter pairs for this filter. Empty when unfiltered.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(is_active) = self.is_active {
            pairs.push(("isActive", is_active.to_string()));
        }
        pairs
    }
}
