//! Twenty-question archetype assessment.

mod archetypes;
mod classifier;
mod questions;
mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use archetypes::{all_archetypes, lookup_archetype, ArchetypeDescriptor};
pub use classifier::{classify, tally, ArchetypeTally, QuizAnswers};
pub use questions::{question, Question, QuestionOption, QUESTIONS};
pub use session::{ArchetypeResult, QuizSession, QuizState};

pub const QUESTION_COUNT: usize = 20;

/// Answer label, doubling as the archetype it votes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArchetypeKey {
    A,
    B,
    C,
    D,
}

impl ArchetypeKey {
    /// Enumeration order; also the tie-break order.
    pub const ALL: [ArchetypeKey; 4] = [
        ArchetypeKey::A,
        ArchetypeKey::B,
        ArchetypeKey::C,
        ArchetypeKey::D,
    ];

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(ArchetypeKey::A),
            'B' => Some(ArchetypeKey::B),
            'C' => Some(ArchetypeKey::C),
            'D' => Some(ArchetypeKey::D),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            ArchetypeKey::A => 0,
            ArchetypeKey::B => 1,
            ArchetypeKey::C => 2,
            ArchetypeKey::D => 3,
        }
    }
}

impl fmt::Display for ArchetypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ArchetypeKey::A => "A",
            ArchetypeKey::B => "B",
            ArchetypeKey::C => "C",
            ArchetypeKey::D => "D",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("quiz incomplete: questions {missing:?} unanswered")]
    Incomplete { missing: Vec<u8> },
    #[error("question {question} does not exist (expected 1-20)")]
    QuestionOutOfRange { question: u8 },
    #[error("question {question} needs an answer before moving on")]
    NoSelection { question: u8 },
    #[error("cannot {action} while quiz is {state:?}")]
    InvalidTransition {
        action: &'static str,
        state: QuizState,
    },
}
