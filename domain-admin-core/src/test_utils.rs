//! Test helpers: mock API client, recording notifier, and factories.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};
use uuid::Uuid;

use domain_admin_api::{
    ApiError, CreateDomainRequest, DomainApi, DomainRecord, DomainStatus, ListFilter,
    Result as ApiResult, UpdateDomainRequest,
};

use crate::notify::{Notification, NotificationSink};
use crate::services::{DomainService, ServiceContext};

// ===== MockDomainApi =====

/// In-memory `DomainApi` with failure injection, a network call
/// counter, and an optional gate that holds `get_by_id` until released
/// (for cancellation tests).
pub struct MockDomainApi {
    records: RwLock<HashMap<String, DomainRecord>>,
    /// If `Some`, the next call consumes and returns this error.
    fail_next: RwLock<Option<ApiError>>,
    calls: AtomicUsize,
    get_gate: RwLock<Option<Arc<Notify>>>,
}

impl MockDomainApi {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            fail_next: RwLock::new(None),
            calls: AtomicUsize::new(0),
            get_gate: RwLock::new(None),
        }
    }

    pub async fn seed(&self, record: DomainRecord) {
        self.records
            .write()
            .await
            .insert(record.id.clone(), record);
    }

    pub async fn set_fail_next(&self, err: ApiError) {
        *self.fail_next.write().await = Some(err);
    }

    pub async fn set_get_gate(&self, gate: Option<Arc<Notify>>) {
        *self.get_gate.write().await = gate;
    }

    /// Number of calls that reached the mock transport.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn take_failure(&self) -> Option<ApiError> {
        self.fail_next.write().await.take()
    }
}

#[async_trait]
impl DomainApi for MockDomainApi {
    async fn list(&self, filter: &ListFilter) -> ApiResult<Vec<DomainRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.take_failure().await {
            return Err(err);
        }
        let mut records: Vec<DomainRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| filter.status.is_none_or(|s| r.status == s))
            .filter(|r| filter.is_active.is_none_or(|a| r.is_active == a))
            .cloned()
            .collect();
        // deterministic remote ordering
        records.sort_by(|a, b| {
            a.created_date
                .cmp(&b.created_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<DomainRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.get_gate.read().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(err) = self.take_failure().await {
            return Err(err);
        }
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })
    }

    async fn create(&self, req: &CreateDomainRequest) -> ApiResult<DomainRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.take_failure().await {
            return Err(err);
        }
        req.validate()?;
        let record = DomainRecord {
            id: Uuid::new_v4().to_string(),
            domain: req.domain.clone(),
            status: req.status,
            is_active: req.is_active,
            created_date: req.created_date,
            updated_date: None,
        };
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, req: &UpdateDomainRequest) -> ApiResult<DomainRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.take_failure().await {
            return Err(err);
        }
        req.validate()?;
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })?;
        if let Some(ref domain) = req.domain {
            record.domain = domain.clone();
        }
        if let Some(status) = req.status {
            record.status = status;
        }
        if let Some(is_active) = req.is_active {
            record.is_active = is_active;
        }
        if let Some(updated) = req.updated_date {
            record.updated_date = Some(updated);
        }
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.take_failure().await {
            return Err(err);
        }
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound { id: id.to_string() })
    }
}

// ===== RecordingNotifier =====

/// Captures every notification for assertion.
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

// ===== Factories =====

pub fn service_with_mock(api: Arc<MockDomainApi>) -> (Arc<DomainService>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let ctx = Arc::new(ServiceContext::new(api, notifier.clone()));
    (Arc::new(DomainService::new(ctx)), notifier)
}

pub fn sample_record(id: &str, domain: &str, created_date: i64) -> DomainRecord {
    DomainRecord {
        id: id.into(),
        domain: domain.into(),
        status: DomainStatus::Pending,
        is_active: true,
        created_date,
        updated_date: None,
    }
}
