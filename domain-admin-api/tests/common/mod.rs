//! Shared helpers for the live-endpoint integration tests.

#![allow(dead_code)]

use std::env;

use domain_admin_api::{
    CreateDomainRequest, DomainApi, DomainRecord, DomainStatus, RestDomainClient,
};

/// Skip the test when the endpoint environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_endpoint {
    () => {
        if std::env::var("DOMAIN_API_BASE_URL").is_err() {
            eprintln!("skipping test: DOMAIN_API_BASE_URL is not set");
            return;
        }
    };
}

/// Assert that a `Result` is `Ok` and unwrap it (fail the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(res.is_ok(), "{}: {res:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Test context wrapping the real client, tracking created records so
/// they can be cleaned up.
pub struct TestContext {
    pub client: RestDomainClient,
    created: Vec<String>,
}

impl TestContext {
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("DOMAIN_API_BASE_URL").ok()?;
        Some(Self {
            client: RestDomainClient::new(base_url),
            created: Vec::new(),
        })
    }

    /// Create a throwaway record and remember it for cleanup.
    pub async fn create_test_record(&mut self) -> Option<DomainRecord> {
        let req = CreateDomainRequest {
            domain: format!("https://it-test-{}.example.com", now_secs()),
            status: DomainStatus::Pending,
            is_active: true,
            created_date: now_secs(),
        };
        match self.client.create(&req).await {
            Ok(record) => {
                self.created.push(record.id.clone());
                Some(record)
            }
            Err(e) => {
                eprintln!("failed to create test record: {e}");
                None
            }
        }
    }

    /// Delete everything this context created. Failures are reported
    /// but do not abort the cleanup.
    pub async fn cleanup(&mut self) {
        for id in self.created.drain(..) {
            if let Err(e) = self.client.delete(&id).await {
                eprintln!("cleanup: failed to delete record {id}: {e}");
            }
        }
    }
}

pub fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
