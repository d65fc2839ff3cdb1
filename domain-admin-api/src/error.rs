use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all domain API operations.
///
/// Three classes, mirroring how failures are handled upstream:
/// [`Validation`](Self::Validation) never leaves the client,
/// [`NotFound`](Self::NotFound) reflects a remote 404, and
/// [`Transport`](Self::Transport) covers everything the network layer
/// can do wrong (connection failure, timeout, unreadable body, non-2xx
/// status not otherwise classified).
///
/// All variants are serializable for structured error reporting.
/// Failed operations are never retried automatically; the caller has to
/// re-trigger the action.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// Client-detected malformed input. The request was not sent.
    #[error("Invalid {field}: {detail}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The remote service reported that the record does not exist.
    #[error("Domain record '{id}' not found")]
    NotFound {
        /// ID of the record that was not found.
        id: String,
    },

    /// Network failure, timeout, or an unclassified non-2xx response.
    #[error("Transport error: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },
}

impl ApiError {
    /// Whether the error is expected behavior (bad input, missing
    /// record), used for log levelling: `warn` when `true`, `error`
    /// otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }

    pub(crate) fn validation(field: &str, detail: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            detail: detail.into(),
        }
    }

    pub(crate) fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
