//! Per-operation user notifications.
//!
//! The presentation surface (toast layer) implements
//! [`NotificationSink`] and is injected through the service context.
//! Every completed operation produces exactly one notification:
//! success or failure, never both, never silently dropped.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient user-visible message. The `id` keys the toast in the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Consumer of transient feedback, implemented by the platform layer.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
