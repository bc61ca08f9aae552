use serde::Serialize;
use tracing::info;

use super::archetypes::{lookup_archetype, ArchetypeDescriptor};
use super::classifier::{classify, tally, ArchetypeTally, QuizAnswers};
use super::questions::{Question, QUESTIONS};
use super::{ArchetypeKey, QuizError, QUESTION_COUNT};

/// Where a quiz run currently stands. `InProgress` holds a 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    NotStarted,
    InProgress { question: usize },
    Completed { result: ArchetypeKey },
}

/// Classification result with its supporting tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeResult {
    pub key: ArchetypeKey,
    pub tally: ArchetypeTally,
    pub archetype: &'static ArchetypeDescriptor,
}

impl ArchetypeResult {
    pub fn from_answers(answers: &QuizAnswers) -> Result<Self, QuizError> {
        let key = classify(answers)?;
        Ok(Self {
            key,
            tally: tally(answers),
            archetype: lookup_archetype(key),
        })
    }
}

/// Caller-owned quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    state: QuizState,
    answers: QuizAnswers,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            state: QuizState::NotStarted,
            answers: QuizAnswers::new(),
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn start(&mut self) -> Result<&'static Question, QuizError> {
        match self.state {
            QuizState::NotStarted => {
                self.state = QuizState::InProgress { question: 0 };
                Ok(&QUESTIONS[0])
            }
            _ => Err(self.invalid("start")),
        }
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            QuizState::InProgress { question } => QUESTIONS.get(question),
            _ => None,
        }
    }

    /// Records the label for the question currently shown.
    pub fn select(&mut self, label: ArchetypeKey) -> Result<(), QuizError> {
        let question = self.position("select")?;
        self.answers.record_answer(question as u8 + 1, label)
    }

    /// Advances, or classifies when the last question is submitted.
    ///
    /// Requires an answer for the current question.
    pub fn next(&mut self) -> Result<QuizState, QuizError> {
        let question = self.position("next")?;
        let number = question as u8 + 1;
        if self.answers.answer(number).is_none() {
            return Err(QuizError::NoSelection { question: number });
        }

        if question + 1 < QUESTION_COUNT {
            self.state = QuizState::InProgress {
                question: question + 1,
            };
        } else {
            let result = classify(&self.answers)?;
            info!(archetype = %result, "quiz completed");
            self.state = QuizState::Completed { result };
        }
        Ok(self.state)
    }

    /// Steps back one question, keeping every recorded answer.
    pub fn back(&mut self) -> Result<QuizState, QuizError> {
        match self.position("back")? {
            0 => Err(self.invalid("back")),
            question => {
                self.state = QuizState::InProgress {
                    question: question - 1,
                };
                Ok(self.state)
            }
        }
    }

    pub fn result(&self) -> Option<ArchetypeResult> {
        match self.state {
            QuizState::Completed { result } => Some(ArchetypeResult {
                key: result,
                tally: tally(&self.answers),
                archetype: lookup_archetype(result),
            }),
            _ => None,
        }
    }

    /// Clears every answer and the cached result.
    pub fn retake(&mut self) -> Result<(), QuizError> {
        match self.state {
            QuizState::Completed { .. } => {
                self.answers.clear();
                self.state = QuizState::NotStarted;
                Ok(())
            }
            _ => Err(self.invalid("retake")),
        }
    }

    fn position(&self, action: &'static str) -> Result<usize, QuizError> {
        match self.state {
            QuizState::InProgress { question } => Ok(question),
            _ => Err(self.invalid(action)),
        }
    }

    fn invalid(&self, action: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            action,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(session: &mut QuizSession, labels: &str) -> QuizState {
        let mut state = session.state();
        for letter in labels.chars() {
            let label = ArchetypeKey::from_letter(letter).expect("valid label");
            session.select(label).expect("question in progress");
            state = session.next().expect("answer recorded");
        }
        state
    }

    #[test]
    fn walks_from_start_to_completion() {
        let mut session = QuizSession::new();
        let first = session.start().expect("not started yet");
        assert_eq!(first.number, 1);

        let state = answer_all(&mut session, "CCCCCCCCCCAAAAABBBBD");
        assert_eq!(
            state,
            QuizState::Completed {
                result: ArchetypeKey::C
            }
        );

        let result = session.result().expect("completed quiz has a result");
        assert_eq!(result.archetype.name, "The Life Architect");
        assert_eq!(result.tally.c, 10);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn next_requires_a_selection() {
        let mut session = QuizSession::new();
        session.start().expect("starts");
        assert_eq!(
            session.next(),
            Err(QuizError::NoSelection { question: 1 })
        );
        assert_eq!(session.state(), QuizState::InProgress { question: 0 });
    }

    #[test]
    fn back_keeps_recorded_answers() {
        let mut session = QuizSession::new();
        session.start().expect("starts");
        answer_all(&mut session, "AB");
        assert_eq!(session.state(), QuizState::InProgress { question: 2 });

        assert_eq!(
            session.back(),
            Ok(QuizState::InProgress { question: 1 })
        );
        assert_eq!(session.answers().answer(2), Some(ArchetypeKey::B));
        assert_eq!(
            session.next(),
            Ok(QuizState::InProgress { question: 2 })
        );

        session.back().expect("back to 1");
        session.back().expect("back to 0");
        assert!(matches!(
            session.back(),
            Err(QuizError::InvalidTransition { action: "back", .. })
        ));
    }

    #[test]
    fn retake_clears_answers_and_result() {
        let mut session = QuizSession::new();
        session.start().expect("starts");
        answer_all(&mut session, "DDDDDDDDDDDDDDDDDDDD");
        assert!(session.result().is_some());

        session.retake().expect("completed quiz can be retaken");
        assert_eq!(session.state(), QuizState::NotStarted);
        assert_eq!(session.answers().answered(), 0);
        assert!(session.result().is_none());
    }

    #[test]
    fn transitions_are_guarded() {
        let mut session = QuizSession::new();
        assert!(matches!(
            session.retake(),
            Err(QuizError::InvalidTransition { action: "retake", .. })
        ));
        assert!(session.select(ArchetypeKey::A).is_err());
        session.start().expect("starts");
        assert!(session.start().is_err());
    }
}
