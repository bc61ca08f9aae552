use tracing::debug;

use super::attributes::{AllocationError, AttributeKind, AttributeSheet};
use super::breakdown::{generate_base_score, BaseScoreBreakdown};
use super::legacy::{CitizenId, LegacyRoll, RollSource};
use super::rules::{self, Adjustments};
use super::{COHORT_YEAR, DEFAULT_LEGACY_REROLLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RerollError {
    #[error("no legacy rerolls remaining")]
    Exhausted,
}

/// A generated character: the breakdown plus the id it was issued under.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedCharacter {
    pub citizen_id: CitizenId,
    pub breakdown: BaseScoreBreakdown,
}

/// Caller-owned state for one character builder session.
pub struct CharacterSession<S> {
    source: S,
    sheet: AttributeSheet,
    legacy_roll: LegacyRoll,
    reroll_allowance: u8,
    rerolls_remaining: u8,
    cohort_year: i32,
    generated: Option<GeneratedCharacter>,
}

impl<S: RollSource> CharacterSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_rerolls(source, DEFAULT_LEGACY_REROLLS)
    }

    pub fn with_rerolls(mut source: S, rerolls: u8) -> Self {
        let legacy_roll = source.legacy_roll();
        Self {
            source,
            sheet: AttributeSheet::new(),
            legacy_roll,
            reroll_allowance: rerolls,
            rerolls_remaining: rerolls,
            cohort_year: COHORT_YEAR,
            generated: None,
        }
    }

    /// Overrides the year stamped into citizen ids.
    pub fn with_cohort_year(mut self, year: i32) -> Self {
        self.cohort_year = year;
        self
    }

    pub fn sheet(&self) -> &AttributeSheet {
        &self.sheet
    }

    pub fn legacy_roll(&self) -> LegacyRoll {
        self.legacy_roll
    }

    pub fn rerolls_remaining(&self) -> u8 {
        self.rerolls_remaining
    }

    pub fn generated(&self) -> Option<&GeneratedCharacter> {
        self.generated.as_ref()
    }

    /// Bonuses the current allocation would trigger, complete or not.
    pub fn pending_adjustments(&self) -> Adjustments {
        rules::evaluate(&self.sheet)
    }

    /// Returns the stored value after rounding and clamping.
    pub fn set_attribute(&mut self, attribute: AttributeKind, raw: i32) -> Result<i32, AllocationError> {
        match self.sheet.set_attribute(attribute, raw) {
            Ok(sheet) => {
                self.sheet = sheet;
                Ok(sheet.get(attribute))
            }
            Err(err) => {
                debug!(%attribute, raw, error = %err, "allocation rejected");
                Err(err)
            }
        }
    }

    pub fn reroll_legacy(&mut self) -> Result<LegacyRoll, RerollError> {
        if self.rerolls_remaining == 0 {
            return Err(RerollError::Exhausted);
        }
        self.legacy_roll = self.source.legacy_roll();
        self.rerolls_remaining -= 1;
        debug!(
            roll = self.legacy_roll.value(),
            remaining = self.rerolls_remaining,
            "legacy rerolled"
        );
        Ok(self.legacy_roll)
    }

    /// Scores the current allocation and mints a citizen id.
    ///
    /// On error the previously generated character, if any, is kept.
    pub fn generate(&mut self) -> Result<&GeneratedCharacter, AllocationError> {
        let breakdown = generate_base_score(&self.sheet, self.legacy_roll)?;
        let suffix = self.source.citizen_suffix();
        let citizen_id = CitizenId::new(self.cohort_year, &suffix);
        debug!(%citizen_id, total = breakdown.total, "base score generated");

        Ok(&*self.generated.insert(GeneratedCharacter {
            citizen_id,
            breakdown,
        }))
    }

    /// Back to a fresh session: minimum attributes, new roll, full rerolls.
    pub fn reset(&mut self) {
        self.sheet = AttributeSheet::new();
        self.legacy_roll = self.source.legacy_roll();
        self.rerolls_remaining = self.reroll_allowance;
        self.generated = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedRolls {
        rolls: VecDeque<i32>,
        suffixes: VecDeque<&'static str>,
    }

    impl ScriptedRolls {
        fn new(rolls: &[i32]) -> Self {
            Self {
                rolls: rolls.iter().copied().collect(),
                suffixes: ["AB12", "CD34", "EF56"].into_iter().collect(),
            }
        }
    }

    impl RollSource for ScriptedRolls {
        fn legacy_roll(&mut self) -> LegacyRoll {
            let next = self.rolls.pop_front().expect("script has another roll");
            LegacyRoll::new(next).expect("scripted roll in range")
        }

        fn citizen_suffix(&mut self) -> String {
            self.suffixes
                .pop_front()
                .expect("script has another suffix")
                .to_string()
        }
    }

    fn allocate(session: &mut CharacterSession<ScriptedRolls>, values: [i32; 6]) {
        for (attribute, value) in AttributeKind::ALL.into_iter().zip(values) {
            session
                .set_attribute(attribute, value)
                .expect("allocation fits budget");
        }
    }

    #[test]
    fn third_reroll_is_refused() {
        let mut session = CharacterSession::new(ScriptedRolls::new(&[10, -50, 120]));
        assert_eq!(session.legacy_roll().value(), 10);

        assert_eq!(session.reroll_legacy().map(LegacyRoll::value), Ok(-50));
        assert_eq!(session.reroll_legacy().map(LegacyRoll::value), Ok(120));
        assert_eq!(session.rerolls_remaining(), 0);

        assert_eq!(session.reroll_legacy(), Err(RerollError::Exhausted));
        assert_eq!(session.legacy_roll().value(), 120);
        assert_eq!(session.rerolls_remaining(), 0);
    }

    #[test]
    fn generate_requires_full_budget_and_keeps_prior_result() {
        let mut session = CharacterSession::new(ScriptedRolls::new(&[0]));

        assert_eq!(
            session.generate().map(|generated| generated.breakdown.total),
            Err(AllocationError::Incomplete {
                allocated: 60,
                budget: 250,
            })
        );
        assert!(session.generated().is_none());

        allocate(&mut session, [10, 75, 75, 65, 10, 15]);
        let generated = session.generate().expect("complete allocation scores");
        assert_eq!(generated.citizen_id.0, "#2025-AB12");
        assert_eq!(generated.breakdown.total, 310);

        session
            .set_attribute(AttributeKind::Luck, 10)
            .expect("lowering fits");
        assert!(session.generate().is_err());
        let kept = session.generated().expect("previous result retained");
        assert_eq!(kept.citizen_id.0, "#2025-AB12");
        assert_eq!(kept.breakdown.total, 310);
    }

    #[test]
    fn cohort_year_can_be_overridden() {
        let mut session = CharacterSession::new(ScriptedRolls::new(&[0])).with_cohort_year(2031);
        allocate(&mut session, [40, 40, 40, 40, 40, 50]);
        let generated = session.generate().expect("complete allocation");
        assert_eq!(generated.citizen_id.0, "#2031-AB12");
    }

    #[test]
    fn reset_restores_minimums_rolls_and_rerolls() {
        let mut session = CharacterSession::new(ScriptedRolls::new(&[5, 6, 7]));
        allocate(&mut session, [80, 80, 30, 30, 15, 15]);
        session.generate().expect("complete allocation");
        session.reroll_legacy().expect("reroll available");

        session.reset();

        assert_eq!(session.sheet(), &AttributeSheet::new());
        assert_eq!(session.legacy_roll().value(), 7);
        assert_eq!(session.rerolls_remaining(), 2);
        assert!(session.generated().is_none());
    }

    #[test]
    fn custom_reroll_allowance_is_restored_on_reset() {
        let mut session = CharacterSession::with_rerolls(ScriptedRolls::new(&[1, 2, 3]), 1);
        session.reroll_legacy().expect("one reroll");
        assert_eq!(session.reroll_legacy(), Err(RerollError::Exhausted));
        session.reset();
        assert_eq!(session.rerolls_remaining(), 1);
    }

    #[test]
    fn pending_adjustments_preview_partial_sheets() {
        let mut session = CharacterSession::new(ScriptedRolls::new(&[0]));
        session
            .set_attribute(AttributeKind::Intellect, 75)
            .expect("fits");
        let preview = session.pending_adjustments();
        let keys: Vec<_> = preview.modifiers.iter().map(|hit| hit.key).collect();
        assert_eq!(keys, vec!["techElite", "socialInstability", "healthDrain"]);
    }
}
