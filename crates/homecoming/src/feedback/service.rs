use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{Feedback, FeedbackId, FeedbackSubmission};
use super::repository::{FeedbackRepository, RepositoryError};

/// Time source, injectable for tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Service validating submissions and minting ids before they hit the repository.
pub struct FeedbackService<R, C = SystemClock> {
    repository: Arc<R>,
    clock: C,
    last_issued: AtomicI64,
}

impl<R> FeedbackService<R, SystemClock>
where
    R: FeedbackRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R, C> FeedbackService<R, C>
where
    R: FeedbackRepository + 'static,
    C: Clock + 'static,
{
    pub fn with_clock(repository: Arc<R>, clock: C) -> Self {
        Self {
            repository,
            clock,
            last_issued: AtomicI64::new(i64::MIN),
        }
    }

    /// Validates and stores a submission.
    ///
    /// `name` and `text` must be present and non-empty; an empty `image` is stored as null.
    pub fn submit(&self, submission: FeedbackSubmission) -> Result<Feedback, FeedbackError> {
        let FeedbackSubmission { name, text, image } = submission;
        let (Some(name), Some(text)) = (non_empty(name), non_empty(text)) else {
            return Err(FeedbackError::MissingField);
        };

        let timestamp = self.clock.now();
        let millis = self.issue_millis(timestamp.timestamp_millis());
        let feedback = Feedback {
            id: FeedbackId::from_millis(millis),
            name,
            text,
            image: non_empty(image),
            timestamp,
        };

        let stored = self.repository.insert(feedback)?;
        info!(id = %stored.id, has_image = stored.image.is_some(), "feedback created");
        Ok(stored)
    }

    /// Every entry, newest first.
    pub fn list(&self) -> Result<Vec<Feedback>, FeedbackError> {
        let mut entries = self.repository.list()?;
        entries.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.millis().cmp(&a.id.millis()))
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries)
    }

    /// Idempotent removal.
    pub fn delete(&self, id: &FeedbackId) -> Result<(), FeedbackError> {
        self.repository.remove(id)?;
        info!(%id, "feedback deleted");
        Ok(())
    }

    /// Hands out strictly increasing millisecond stamps, bumping forward when two
    /// submissions share the same clock reading.
    fn issue_millis(&self, now_millis: i64) -> i64 {
        let previous = self
            .last_issued
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now_millis.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now_millis.max(previous.saturating_add(1))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("Name and text are required")]
    MissingField,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
