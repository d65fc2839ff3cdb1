//! Detail/edit session state machine.
//!
//! At most one of viewing, creating, or editing is active at a time;
//! entering one while another is active implicitly cancels the
//! previous without sending anything. Every transition bumps an epoch
//! counter, and an in-flight detail fetch only applies its result if
//! its epoch is still current — a late response never resurrects a
//! closed detail view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use domain_admin_api::DomainRecord;

use crate::error::{CoreError, CoreResult};
use crate::form::DomainForm;
use crate::services::DomainService;

/// Current session, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// Read-only detail view. `record` is `None` while the fetch is
    /// outstanding (the loading sub-state).
    Viewing {
        id: String,
        record: Option<DomainRecord>,
    },
    /// Create form, starting empty.
    Creating { form: DomainForm },
    /// Edit form, pre-populated with the record's current values.
    Editing { id: String, form: DomainForm },
}

pub struct DomainSession {
    service: Arc<DomainService>,
    state: RwLock<SessionState>,
    epoch: AtomicU64,
}

impl DomainSession {
    #[must_use]
    pub fn new(service: Arc<DomainService>) -> Self {
        Self {
            service,
            state: RwLock::new(SessionState::Idle),
            epoch: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current session state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Open the read-only detail view and fetch the record. On failure
    /// the error is surfaced (the service notifies) and the session
    /// returns to `Idle`.
    pub async fn view_details(&self, id: &str) -> CoreResult<()> {
        let epoch = self
            .enter(SessionState::Viewing {
                id: id.to_string(),
                record: None,
            })
            .await;

        match self.service.get(id).await {
            Ok(record) => {
                let mut state = self.state.write().await;
                if self.epoch.load(Ordering::SeqCst) == epoch {
                    if let SessionState::Viewing { record: slot, .. } = &mut *state {
                        *slot = Some(record);
                    }
                } else {
                    log::debug!("discarding stale detail fetch for record {id}");
                }
                Ok(())
            }
            Err(e) => {
                self.leave_if_current(epoch).await;
                Err(e)
            }
        }
    }

    /// Close the detail view (or any active form) without side effects.
    pub async fn close(&self) {
        self.enter(SessionState::Idle).await;
    }

    /// Open an empty create form.
    pub async fn begin_create(&self) {
        self.enter(SessionState::Creating {
            form: DomainForm::default(),
        })
        .await;
    }

    /// Open an edit form pre-populated with the record's current field
    /// values (a cache hit when opened from the rendered list). On
    /// fetch failure the session is left unchanged.
    pub async fn begin_edit(&self, id: &str) -> CoreResult<()> {
        let record = self.service.get(id).await?;
        self.enter(SessionState::Editing {
            id: id.to_string(),
            form: DomainForm::from_record(&record),
        })
        .await;
        Ok(())
    }

    /// Cancel the active form, discarding its values. Nothing is sent.
    pub async fn cancel(&self) {
        self.enter(SessionState::Idle).await;
    }

    /// Mutate the active form's fields. Returns `false` when no form
    /// is open.
    pub async fn update_form(&self, apply: impl FnOnce(&mut DomainForm)) -> bool {
        let mut state = self.state.write().await;
        match &mut *state {
            SessionState::Creating { form } | SessionState::Editing { form, .. } => {
                apply(form);
                true
            }
            SessionState::Idle | SessionState::Viewing { .. } => false,
        }
    }

    /// Submit the active form. Validation failures are returned for
    /// inline display and issue zero network calls; the form stays
    /// open. On a successful create/update the session returns to
    /// `Idle`; on an API failure the form also stays open so the user
    /// can re-trigger.
    pub async fn submit(&self) -> CoreResult<DomainRecord> {
        let (snapshot, epoch) = {
            let state = self.state.read().await;
            (state.clone(), self.epoch.load(Ordering::SeqCst))
        };

        match snapshot {
            SessionState::Creating { form } => {
                form.validate()?;
                let record = self.service.create(&form).await?;
                self.leave_if_current(epoch).await;
                Ok(record)
            }
            SessionState::Editing { id, form } => {
                form.validate()?;
                let record = self.service.update(&id, &form).await?;
                self.leave_if_current(epoch).await;
                Ok(record)
            }
            SessionState::Idle | SessionState::Viewing { .. } => {
                Err(CoreError::Validation("no form is open".into()))
            }
        }
    }

    /// Transition unconditionally, invalidating any in-flight fetch.
    async fn enter(&self, next: SessionState) -> u64 {
        let mut state = self.state.write().await;
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *state = next;
        epoch
    }

    /// Return to `Idle` only if no other transition happened since
    /// `epoch` was captured.
    async fn leave_if_current(&self, epoch: u64) {
        let mut state = self.state.write().await;
        if self.epoch.load(Ordering::SeqCst) == epoch {
            self.epoch.fetch_add(1, Ordering::SeqCst);
            *state = SessionState::Idle;
        }
    }
}
