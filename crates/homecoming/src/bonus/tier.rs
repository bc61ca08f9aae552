use std::fmt;

use serde::Serialize;

/// Service band derived from the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Basic,
    Standard,
    Premium,
    Elite,
    Sovereign,
}

/// Inclusive lower bounds, highest first. Anything below the last band is `Basic`.
const TIER_BANDS: [(i64, Tier); 4] = [
    (800, Tier::Sovereign),
    (500, Tier::Elite),
    (200, Tier::Premium),
    (0, Tier::Standard),
];

impl Tier {
    pub fn classify(total: i64) -> Self {
        TIER_BANDS
            .iter()
            .find(|(floor, _)| total >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Basic)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Sovereign => "SOVEREIGN",
            Tier::Elite => "ELITE",
            Tier::Premium => "PREMIUM",
            Tier::Standard => "STANDARD",
            Tier::Basic => "BASIC",
        }
    }

    /// Name of the service package the tier unlocks.
    pub fn designation(self) -> &'static str {
        match self {
            Tier::Sovereign => "UTOPIA ELITE",
            Tier::Elite => "UTOPIA",
            Tier::Premium => "LIFE CORRIDOR",
            Tier::Standard => "STANDARD",
            Tier::Basic => "DEFICIT",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::Sovereign => "Unlimited Resources · Bespoke Experience · Ultimate Legacy",
            Tier::Elite => "Full Access · Extended Timeline · Premium Services",
            Tier::Premium => "72h Experience · Memory Access · Family Participation",
            Tier::Standard => "Government Standard · Humane Termination",
            Tier::Basic => "Essential Services · Immediate Processing",
        }
    }

    pub fn view(self) -> TierView {
        TierView {
            tier: self,
            label: self.label(),
            designation: self.designation(),
            description: self.description(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier with its display strings, as returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierView {
    pub tier: Tier,
    pub label: &'static str,
    pub designation: &'static str,
    pub description: &'static str,
}

/// Final displayed score: base plus bonus, with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombinedScore {
    pub base_total: i64,
    pub bonus_total: i64,
    pub total: i64,
    pub tier: TierView,
}

pub fn combined_score(base_total: i64, bonus_total: i64) -> CombinedScore {
    let total = base_total.saturating_add(bonus_total);
    CombinedScore {
        base_total,
        bonus_total,
        total,
        tier: Tier::classify(total).view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_lower_bounds_are_inclusive() {
        assert_eq!(Tier::classify(800), Tier::Sovereign);
        assert_eq!(Tier::classify(799), Tier::Elite);
        assert_eq!(Tier::classify(500), Tier::Elite);
        assert_eq!(Tier::classify(499), Tier::Premium);
        assert_eq!(Tier::classify(200), Tier::Premium);
        assert_eq!(Tier::classify(199), Tier::Standard);
        assert_eq!(Tier::classify(0), Tier::Standard);
        assert_eq!(Tier::classify(-1), Tier::Basic);
        assert_eq!(Tier::classify(i64::MIN), Tier::Basic);
    }

    #[test]
    fn combined_score_accepts_negative_inputs() {
        let score = combined_score(150, -400);
        assert_eq!(score.total, -250);
        assert_eq!(score.tier.tier, Tier::Basic);
        assert_eq!(score.tier.designation, "DEFICIT");

        let score = combined_score(310, 500);
        assert_eq!(score.total, 810);
        assert_eq!(score.tier.label, "SOVEREIGN");
    }
}
