use super::domain::{Feedback, FeedbackId};

/// Storage abstraction so the service can be exercised in isolation.
pub trait FeedbackRepository: Send + Sync {
    fn insert(&self, feedback: Feedback) -> Result<Feedback, RepositoryError>;
    /// Every stored entry, in no particular order.
    fn list(&self) -> Result<Vec<Feedback>, RepositoryError>;
    /// Removes the entry if present. Absent ids are not an error.
    fn remove(&self, id: &FeedbackId) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
