use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::attributes::AllocationError;
use super::{LEGACY_MAX, LEGACY_MIN};

/// Inherited circumstance drawn at random, added to the base score outside the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LegacyRoll(i32);

impl LegacyRoll {
    pub fn new(value: i32) -> Result<Self, AllocationError> {
        if (LEGACY_MIN..=LEGACY_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AllocationError::LegacyOutOfRange { value })
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for LegacyRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Display identifier minted with each generated breakdown, e.g. `#2025-7K2Q`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitizenId(pub String);

impl CitizenId {
    pub fn new(year: i32, suffix: &str) -> Self {
        Self(format!("#{year}-{suffix}"))
    }
}

impl fmt::Display for CitizenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the randomness a character session needs.
///
/// Sessions take this as a dependency so tests can script exact rolls.
pub trait RollSource {
    /// Uniform draw in `[-200, 200]`.
    fn legacy_roll(&mut self) -> LegacyRoll;
    /// Four characters from `0-9A-Z` for a citizen id.
    fn citizen_suffix(&mut self) -> String;
}

const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 4;

/// [`RollSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRollSource<R> {
    rng: R,
}

impl<R: Rng> RngRollSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRollSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RollSource for RngRollSource<R> {
    fn legacy_roll(&mut self) -> LegacyRoll {
        LegacyRoll(self.rng.gen_range(LEGACY_MIN..=LEGACY_MAX))
    }

    fn citizen_suffix(&mut self) -> String {
        (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[self.rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect()
    }
}
