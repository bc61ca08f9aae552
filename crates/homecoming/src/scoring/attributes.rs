use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ATTRIBUTE_MAX, ATTRIBUTE_MIN, ATTRIBUTE_STEP, TOTAL_BUDGET};

/// The six dimensions a character's budget is spread across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKind {
    Assets,
    Intellect,
    Constitution,
    Legacy,
    SocialCapital,
    Luck,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 6] = [
        AttributeKind::Assets,
        AttributeKind::Intellect,
        AttributeKind::Constitution,
        AttributeKind::Legacy,
        AttributeKind::SocialCapital,
        AttributeKind::Luck,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Assets => "Assets",
            AttributeKind::Intellect => "Intellect",
            AttributeKind::Constitution => "Constitution",
            AttributeKind::Legacy => "Legacy",
            AttributeKind::SocialCapital => "Social Capital",
            AttributeKind::Luck => "Luck",
        }
    }

    /// Three-letter code used when rendering rule conditions.
    pub fn code(self) -> &'static str {
        match self {
            AttributeKind::Assets => "AST",
            AttributeKind::Intellect => "INT",
            AttributeKind::Constitution => "CON",
            AttributeKind::Legacy => "LGC",
            AttributeKind::SocialCapital => "SOC",
            AttributeKind::Luck => "LCK",
        }
    }

    fn index(self) -> usize {
        match self {
            AttributeKind::Assets => 0,
            AttributeKind::Intellect => 1,
            AttributeKind::Constitution => 2,
            AttributeKind::Legacy => 3,
            AttributeKind::SocialCapital => 4,
            AttributeKind::Luck => 5,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons the allocator refuses a change or a score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("{attribute} cannot take {requested} points; only {available} remain in the budget")]
    OverBudget {
        attribute: AttributeKind,
        requested: i32,
        available: i32,
    },
    #[error("allocation incomplete: {allocated} of {budget} points assigned")]
    Incomplete { allocated: i32, budget: i32 },
    #[error(
        "{attribute} value {value} must be a multiple of {} within [{}, {}]",
        ATTRIBUTE_STEP,
        ATTRIBUTE_MIN,
        ATTRIBUTE_MAX
    )]
    OutOfBounds { attribute: AttributeKind, value: i32 },
    #[error("{allocated} points allocated but the budget is {budget}")]
    OverAllocated { allocated: i32, budget: i32 },
    #[error("legacy roll {value} outside [-200, 200]")]
    LegacyOutOfRange { value: i32 },
}

/// Point allocation across the six attributes.
///
/// The sheet never holds more than [`TOTAL_BUDGET`] points; under-allocation is
/// allowed while a caller is still editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSheet {
    values: [i32; 6],
}

impl Default for AttributeSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeSheet {
    /// Every attribute at its minimum.
    pub fn new() -> Self {
        Self {
            values: [ATTRIBUTE_MIN; 6],
        }
    }

    /// Builds a sheet from explicit values. Missing attributes sit at the minimum.
    ///
    /// Values must already be on the step grid and within bounds, and the total may
    /// not exceed the budget.
    pub fn from_values(
        values: impl IntoIterator<Item = (AttributeKind, i32)>,
    ) -> Result<Self, AllocationError> {
        let mut sheet = Self::new();
        for (attribute, value) in values {
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) || value % ATTRIBUTE_STEP != 0 {
                return Err(AllocationError::OutOfBounds { attribute, value });
            }
            sheet.values[attribute.index()] = value;
        }

        let allocated = sheet.allocated();
        if allocated > TOTAL_BUDGET {
            return Err(AllocationError::OverAllocated {
                allocated,
                budget: TOTAL_BUDGET,
            });
        }
        Ok(sheet)
    }

    pub fn get(&self, attribute: AttributeKind) -> i32 {
        self.values[attribute.index()]
    }

    pub fn allocated(&self) -> i32 {
        self.values.iter().sum()
    }

    pub fn remaining(&self) -> i32 {
        TOTAL_BUDGET - self.allocated()
    }

    /// True once every budget point has been spent.
    pub fn is_complete(&self) -> bool {
        self.allocated() == TOTAL_BUDGET
    }

    /// Applies a slider value: snap to the step grid, clamp into bounds, then refuse
    /// the change if it would push the sheet over budget.
    pub fn set_attribute(&self, attribute: AttributeKind, raw: i32) -> Result<Self, AllocationError> {
        let value = normalize_attribute(raw);
        let others = self.allocated() - self.get(attribute);
        let available = TOTAL_BUDGET - others;

        if value > available {
            return Err(AllocationError::OverBudget {
                attribute,
                requested: value,
                available,
            });
        }

        let mut next = *self;
        next.values[attribute.index()] = value;
        Ok(next)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, i32)> + '_ {
        AttributeKind::ALL
            .iter()
            .map(move |attribute| (*attribute, self.get(*attribute)))
    }

    pub fn to_map(&self) -> BTreeMap<AttributeKind, i32> {
        self.iter().collect()
    }
}

impl Serialize for AttributeSheet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_map().serialize(serializer)
    }
}

/// Round-half-up to the nearest multiple of `step`, matching `Math.round(raw / step) * step`.
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn round_to_step(raw: i64, step: i64) -> i64 {
    let (raw, step) = (i128::from(raw), i128::from(step));
    let rounded = (2 * raw + step).div_euclid(2 * step) * step;
    rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

fn normalize_attribute(raw: i32) -> i32 {
    let rounded = round_to_step(i64::from(raw), i64::from(ATTRIBUTE_STEP));
    rounded.clamp(i64::from(ATTRIBUTE_MIN), i64::from(ATTRIBUTE_MAX)) as i32
}
