use serde::Serialize;

use super::{ArchetypeKey, QuizError, QUESTION_COUNT};

/// Answers keyed by question number. Recording again overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    slots: [Option<ArchetypeKey>; QUESTION_COUNT],
}

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the label for a 1-based question number.
    pub fn record_answer(&mut self, question: u8, label: ArchetypeKey) -> Result<(), QuizError> {
        let slot = slot_index(question)?;
        self.slots[slot] = Some(label);
        Ok(())
    }

    pub fn answer(&self, question: u8) -> Option<ArchetypeKey> {
        slot_index(question).ok().and_then(|slot| self.slots[slot])
    }

    pub fn answered(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Question numbers still lacking an answer, ascending.
    pub fn missing(&self) -> Vec<u8> {
        (1..=QUESTION_COUNT as u8)
            .filter(|question| self.answer(*question).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.slots = [None; QUESTION_COUNT];
    }
}

fn slot_index(question: u8) -> Result<usize, QuizError> {
    match usize::from(question) {
        number @ 1..=QUESTION_COUNT => Ok(number - 1),
        _ => Err(QuizError::QuestionOutOfRange { question }),
    }
}

/// Votes per label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchetypeTally {
    #[serde(rename = "A")]
    pub a: u8,
    #[serde(rename = "B")]
    pub b: u8,
    #[serde(rename = "C")]
    pub c: u8,
    #[serde(rename = "D")]
    pub d: u8,
}

impl ArchetypeTally {
    pub fn count(&self, key: ArchetypeKey) -> u8 {
        match key {
            ArchetypeKey::A => self.a,
            ArchetypeKey::B => self.b,
            ArchetypeKey::C => self.c,
            ArchetypeKey::D => self.d,
        }
    }

    fn add(&mut self, key: ArchetypeKey) {
        match key {
            ArchetypeKey::A => self.a += 1,
            ArchetypeKey::B => self.b += 1,
            ArchetypeKey::C => self.c += 1,
            ArchetypeKey::D => self.d += 1,
        }
    }

    /// Plurality label. Ties go to the earliest label in A, B, C, D order.
    pub fn leader(&self) -> ArchetypeKey {
        let mut leader = ArchetypeKey::A;
        for key in ArchetypeKey::ALL {
            if self.count(key) > self.count(leader) {
                leader = key;
            }
        }
        leader
    }
}

pub fn tally(answers: &QuizAnswers) -> ArchetypeTally {
    let mut tally = ArchetypeTally::default();
    for label in answers.slots.iter().flatten() {
        tally.add(*label);
    }
    tally
}

/// Plurality archetype across a complete answer set.
///
/// Refuses partial sets rather than guessing from the answers present.
pub fn classify(answers: &QuizAnswers) -> Result<ArchetypeKey, QuizError> {
    if !answers.is_complete() {
        return Err(QuizError::Incomplete {
            missing: answers.missing(),
        });
    }
    Ok(tally(answers).leader())
}
