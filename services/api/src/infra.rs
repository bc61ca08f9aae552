use homecoming::feedback::{Feedback, FeedbackId, FeedbackRepository, RepositoryError};
use homecoming::quiz::{ArchetypeKey, QuizAnswers, QUESTION_COUNT};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local feedback store. Entries live until the server exits.
#[derive(Default, Clone)]
pub(crate) struct InMemoryFeedbackRepository {
    records: Arc<Mutex<HashMap<FeedbackId, Feedback>>>,
}

impl InMemoryFeedbackRepository {
    fn guard(&self) -> Result<MutexGuard<'_, HashMap<FeedbackId, Feedback>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("feedback store lock poisoned".to_string()))
    }
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    fn insert(&self, feedback: Feedback) -> Result<Feedback, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&feedback.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(feedback.id.clone(), feedback.clone());
        Ok(feedback)
    }

    fn list(&self) -> Result<Vec<Feedback>, RepositoryError> {
        Ok(self.guard()?.values().cloned().collect())
    }

    fn remove(&self, id: &FeedbackId) -> Result<(), RepositoryError> {
        self.guard()?.remove(id);
        Ok(())
    }
}

/// Parses a compact answer sheet such as `ABCDABCD...`, one letter per question.
pub(crate) fn parse_answer_sheet(raw: &str) -> Result<QuizAnswers, String> {
    let letters: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if letters.len() > QUESTION_COUNT {
        return Err(format!(
            "expected at most {QUESTION_COUNT} answers, got {}",
            letters.len()
        ));
    }

    let mut answers = QuizAnswers::new();
    for (number, letter) in (1u8..).zip(letters) {
        let label = ArchetypeKey::from_letter(letter)
            .ok_or_else(|| format!("answer {number} must be one of A, B, C, D (got '{letter}')"))?;
        answers
            .record_answer(number, label)
            .map_err(|err| err.to_string())?;
    }
    Ok(answers)
}
