//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export the transport layer error type
pub use domain_admin_api::ApiError;

use crate::form::FieldError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error outside a form context
    #[error("Validation error: {0}")]
    Validation(String),

    /// Form validation failed; carries per-field messages for inline display
    #[error("Form validation failed")]
    FormInvalid(Vec<FieldError>),

    /// Transport layer error (converted from the API client)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether the error is expected behavior (user input, resource
    /// does not exist), used for log levelling: `warn` when `true`,
    /// `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::FormInvalid(_) => true,
            Self::Api(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_converts_with_from() {
        let err: CoreError = ApiError::NotFound { id: "5".into() }.into();
        assert!(matches!(err, CoreError::Api(ApiError::NotFound { .. })));
        assert!(err.is_expected());
    }

    #[test]
    fn transport_is_unexpected() {
        let err: CoreError = ApiError::Transport {
            detail: "connection reset".into(),
        }
        .into();
        assert!(!err.is_expected());
    }

    #[test]
    fn form_invalid_is_expected() {
        let err = CoreError::FormInvalid(vec![FieldError::new("domain", "must not be empty")]);
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "Form validation failed");
    }
}
