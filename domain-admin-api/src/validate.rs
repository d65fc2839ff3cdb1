//! Client-side input validation.
//!
//! Validation failures stay local: a request that fails here is never
//! sent over the network. The remote service may additionally reject
//! what passes here.

use url::Url;

use crate::error::{ApiError, Result};

/// Validate that `domain` is a non-empty, syntactically valid absolute
/// URL (e.g. `https://example.com`).
pub fn validate_domain_url(domain: &str) -> Result<()> {
    if domain.trim().is_empty() {
        return Err(ApiError::validation("domain", "must not be empty"));
    }
    match Url::parse(domain) {
        Ok(_) => Ok(()),
        Err(e) => Err(ApiError::validation(
            "domain",
            format!("not a valid absolute URL: {e}"),
        )),
    }
}
