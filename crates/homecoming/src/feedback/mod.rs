//! Community feedback wall: submissions persisted behind a small CRUD surface.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Feedback, FeedbackId, FeedbackSubmission, FEEDBACK_ID_PREFIX};
pub use repository::{FeedbackRepository, RepositoryError};
pub use router::feedback_router;
pub use service::{Clock, FeedbackError, FeedbackService, SystemClock};
