//! Create/edit form model and inline validation.

use serde::{Deserialize, Serialize};

use domain_admin_api::{validate_domain_url, ApiError, DomainRecord, DomainStatus};

use crate::error::{CoreError, CoreResult};

/// A single field-level validation message, reported inline on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Editable field values of a domain record. `status` and `is_active`
/// are closed types, so the only free-text field to validate is
/// `domain`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainForm {
    pub domain: String,
    pub status: DomainStatus,
    pub is_active: bool,
}

impl DomainForm {
    /// Pre-populate the form from an existing record's current values.
    #[must_use]
    pub fn from_record(record: &DomainRecord) -> Self {
        Self {
            domain: record.domain.clone(),
            status: record.status,
            is_active: record.is_active,
        }
    }

    /// Validate required fields. Failures are reported inline and never
    /// reach the network.
    pub fn validate(&self) -> CoreResult<()> {
        let mut errors = Vec::new();
        if let Err(ApiError::Validation { field, detail }) = validate_domain_url(&self.domain) {
            errors.push(FieldError::new(field, detail));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::FormInvalid(errors))
        }
    }
}
