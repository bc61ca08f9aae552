use serde::Serialize;

use super::attributes::{AllocationError, AttributeSheet};
use super::legacy::LegacyRoll;
use super::rules::{self, AppliedAdjustment};
use super::TOTAL_BUDGET;

/// Base score with every contribution spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseScoreBreakdown {
    pub budget_total: i64,
    pub legacy_roll: LegacyRoll,
    pub modifiers: Vec<AppliedAdjustment>,
    pub synergies: Vec<AppliedAdjustment>,
    pub total: i64,
}

impl BaseScoreBreakdown {
    pub fn modifier_total(&self) -> i64 {
        self.modifiers.iter().map(|hit| i64::from(hit.delta)).sum()
    }

    pub fn synergy_total(&self) -> i64 {
        self.synergies.iter().map(|hit| i64::from(hit.delta)).sum()
    }
}

/// Scores a completed allocation.
///
/// Refuses with [`AllocationError::Incomplete`] unless the sheet spends exactly the
/// full budget. Deterministic for a given sheet and roll.
pub fn generate_base_score(
    sheet: &AttributeSheet,
    legacy_roll: LegacyRoll,
) -> Result<BaseScoreBreakdown, AllocationError> {
    if !sheet.is_complete() {
        return Err(AllocationError::Incomplete {
            allocated: sheet.allocated(),
            budget: TOTAL_BUDGET,
        });
    }

    let adjustments = rules::evaluate(sheet);
    let budget_total = i64::from(TOTAL_BUDGET);
    let total = budget_total
        + i64::from(legacy_roll.value())
        + adjustments.modifier_total()
        + adjustments.synergy_total();

    Ok(BaseScoreBreakdown {
        budget_total,
        legacy_roll,
        modifiers: adjustments.modifiers,
        synergies: adjustments.synergies,
        total,
    })
}
