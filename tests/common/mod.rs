#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use exposure_check::domain::entities::{Postcode, SiteRecord};
use exposure_check::domain::repositories::ExposureRepository;
use exposure_check::error::AppError;
use exposure_check::state::AppState;

/// In-memory repository returning a fixed result and counting calls.
pub struct StubRepository {
    records: Option<Vec<SiteRecord>>,
    calls: AtomicUsize,
}

impl StubRepository {
    pub fn with_records(records: Vec<SiteRecord>) -> Self {
        Self {
            records: Some(records),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            records: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExposureRepository for StubRepository {
    async fn find_by_postcode(&self, _postcode: &Postcode) -> Result<Vec<SiteRecord>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.records {
            Some(records) => Ok(records.clone()),
            None => Err(AppError::upstream(
                "Exposure site dataset unavailable",
                json!({ "reason": "stub failure" }),
            )),
        }
    }
}

pub fn site(title: &str, address: &str, advice: &str) -> SiteRecord {
    SiteRecord::new(title, address, "2021-08-14", "10:00am - 11:00am", advice)
}

pub fn create_test_state(records: Vec<SiteRecord>) -> (AppState, Arc<StubRepository>) {
    let repository = Arc::new(StubRepository::with_records(records));
    (AppState::new(repository.clone()), repository)
}

pub fn create_failing_state() -> (AppState, Arc<StubRepository>) {
    let repository = Arc::new(StubRepository::failing());
    (AppState::new(repository.clone()), repository)
}
