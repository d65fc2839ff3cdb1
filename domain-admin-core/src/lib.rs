//! Domain Admin Core Library
//!
//! Application logic behind the domain admin interface:
//! - record orchestration with an explicit request cache (`DomainService`)
//! - the list view-state derivation (filter → sort → render input)
//! - the detail/edit session state machine
//! - the notification seam consumed by the presentation surface
//!
//! The presentation layer renders the derived list and session state
//! and forwards user intents here; the transport lives in
//! `domain-admin-api` behind the [`DomainApi`] trait so platforms (and
//! tests) can substitute their own.

pub mod cache;
pub mod error;
pub mod form;
pub mod notify;
pub mod services;
pub mod session;
pub mod view_state;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cache::RecordCache;
pub use error::{CoreError, CoreResult};
pub use form::{DomainForm, FieldError};
pub use notify::{Notification, NotificationLevel, NotificationSink};
pub use services::{DomainService, ServiceContext};
pub use session::{DomainSession, SessionState};
pub use view_state::{ListViewState, SortOrder};

// Re-export the transport crate's public types
pub use domain_admin_api::{
    ApiError, CreateDomainRequest, DomainApi, DomainRecord, DomainStatus, ListFilter,
    RestDomainClient, UpdateDomainRequest,
};
