//! Service layer

mod domain_service;

pub use domain_service::DomainService;

use std::sync::Arc;

use domain_admin_api::{ApiError, DomainApi};

use crate::cache::RecordCache;
use crate::error::CoreError;
use crate::notify::{Notification, NotificationSink};

/// Service context holding all injected dependencies.
///
/// The platform layer creates this context, supplying the real REST
/// client and its toast implementation.
pub struct ServiceContext {
    /// Remote domain API client
    pub api: Arc<dyn DomainApi>,
    /// Cache of confirmed remote responses
    pub cache: RecordCache,
    /// Transient feedback consumer
    pub notifier: Arc<dyn NotificationSink>,
}

impl ServiceContext {
    /// Create the service context.
    #[must_use]
    pub fn new(api: Arc<dyn DomainApi>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            api,
            cache: RecordCache::new(),
            notifier,
        }
    }

    /// Emit a success notification for a completed operation.
    pub fn notify_success(&self, message: &str) {
        self.notifier.notify(Notification::success(message));
    }

    /// Funnel a failed API call: log at the level the error warrants,
    /// emit exactly one user-visible notification describing the
    /// attempted action, and convert into a [`CoreError`].
    pub fn handle_api_error(&self, action: &str, message: &str, err: ApiError) -> CoreError {
        if err.is_expected() {
            log::warn!("{action} failed: {err}");
        } else {
            log::error!("{action} failed: {err}");
        }
        self.notifier.notify(Notification::error(message));
        CoreError::Api(err)
    }
}
