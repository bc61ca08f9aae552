use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::feedback::domain::{Feedback, FeedbackId};
use crate::feedback::repository::{FeedbackRepository, RepositoryError};
use crate::feedback::service::{Clock, FeedbackService};

pub(super) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Clock that only moves when told to.
#[derive(Clone)]
pub(super) struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub(super) fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub(super) fn advance(&self, step: Duration) {
        let mut guard = self.now.lock().expect("clock mutex poisoned");
        *guard = *guard + step;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<FeedbackId, Feedback>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl FeedbackRepository for MemoryRepository {
    fn insert(&self, feedback: Feedback) -> Result<Feedback, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&feedback.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(feedback.id.clone(), feedback.clone());
        Ok(feedback)
    }

    fn list(&self) -> Result<Vec<Feedback>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn remove(&self, id: &FeedbackId) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .remove(id);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl FeedbackRepository for UnavailableRepository {
    fn insert(&self, _feedback: Feedback) -> Result<Feedback, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Feedback>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &FeedbackId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    FeedbackService<MemoryRepository, FixedClock>,
    Arc<MemoryRepository>,
    FixedClock,
) {
    let repository = Arc::new(MemoryRepository::default());
    let clock = FixedClock::at(epoch());
    let service = FeedbackService::with_clock(repository.clone(), clock.clone());
    (service, repository, clock)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
