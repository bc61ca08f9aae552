//! Character builder: point allocation, legacy roll, and the base score.

mod attributes;
mod breakdown;
mod legacy;
pub mod rules;
mod session;

pub use attributes::{round_to_step, AllocationError, AttributeKind, AttributeSheet};
pub use breakdown::{generate_base_score, BaseScoreBreakdown};
pub use legacy::{CitizenId, LegacyRoll, RngRollSource, RollSource};
pub use rules::{evaluate as pending_adjustments, Adjustments, AppliedAdjustment};
pub use session::{CharacterSession, GeneratedCharacter, RerollError};

/// Points that must be spent across the six attributes before scoring.
pub const TOTAL_BUDGET: i32 = 250;
pub const ATTRIBUTE_MIN: i32 = 10;
pub const ATTRIBUTE_MAX: i32 = 80;
pub const ATTRIBUTE_STEP: i32 = 5;
pub const LEGACY_MIN: i32 = -200;
pub const LEGACY_MAX: i32 = 200;
pub const DEFAULT_LEGACY_REROLLS: u8 = 2;
/// Year stamped into citizen ids unless a session overrides it.
pub const COHORT_YEAR: i32 = 2025;
