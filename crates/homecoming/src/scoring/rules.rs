use serde::Serialize;

use super::attributes::{AttributeKind, AttributeSheet};

/// Direction of a single-attribute threshold. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    Above(i32),
    Below(i32),
}

/// One attribute compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub attribute: AttributeKind,
    pub threshold: Threshold,
}

impl Condition {
    const fn above(attribute: AttributeKind, value: i32) -> Self {
        Self {
            attribute,
            threshold: Threshold::Above(value),
        }
    }

    const fn below(attribute: AttributeKind, value: i32) -> Self {
        Self {
            attribute,
            threshold: Threshold::Below(value),
        }
    }

    pub fn holds(&self, sheet: &AttributeSheet) -> bool {
        let value = sheet.get(self.attribute);
        match self.threshold {
            Threshold::Above(limit) => value > limit,
            Threshold::Below(limit) => value < limit,
        }
    }

    pub fn describe(&self) -> String {
        match self.threshold {
            Threshold::Above(limit) => format!("{} > {}", self.attribute.code(), limit),
            Threshold::Below(limit) => format!("{} < {}", self.attribute.code(), limit),
        }
    }
}

/// Threshold rule on a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierRule {
    pub key: &'static str,
    pub label: &'static str,
    pub condition: Condition,
    pub delta: i32,
}

/// Rule that fires only when both attribute thresholds hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynergyRule {
    pub key: &'static str,
    pub label: &'static str,
    pub conditions: [Condition; 2],
    pub delta: i32,
}

pub const MODIFIERS: [ModifierRule; 3] = [
    ModifierRule {
        key: "techElite",
        label: "Tech Elite",
        condition: Condition::above(AttributeKind::Intellect, 70),
        delta: 50,
    },
    ModifierRule {
        key: "socialInstability",
        label: "Social Instability",
        condition: Condition::below(AttributeKind::SocialCapital, 30),
        delta: -40,
    },
    ModifierRule {
        key: "healthDrain",
        label: "Health Drain",
        condition: Condition::below(AttributeKind::Constitution, 30),
        delta: -40,
    },
];

pub const SYNERGIES: [SynergyRule; 3] = [
    SynergyRule {
        key: "eliteBloodline",
        label: "Elite Bloodline",
        conditions: [
            Condition::above(AttributeKind::Intellect, 60),
            Condition::above(AttributeKind::Legacy, 60),
        ],
        delta: 50,
    },
    SynergyRule {
        key: "capitalNetwork",
        label: "Capital Network",
        conditions: [
            Condition::above(AttributeKind::Assets, 60),
            Condition::above(AttributeKind::SocialCapital, 60),
        ],
        delta: 40,
    },
    SynergyRule {
        key: "tenaciousLife",
        label: "Tenacious Life",
        conditions: [
            Condition::above(AttributeKind::Constitution, 70),
            Condition::above(AttributeKind::Luck, 70),
        ],
        delta: 20,
    },
];

/// A rule that fired, kept for the audit trail shown next to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedAdjustment {
    pub key: &'static str,
    pub label: &'static str,
    pub condition: String,
    pub delta: i32,
}

/// Modifier and synergy hits for a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Adjustments {
    pub modifiers: Vec<AppliedAdjustment>,
    pub synergies: Vec<AppliedAdjustment>,
}

impl Adjustments {
    pub fn modifier_total(&self) -> i64 {
        self.modifiers.iter().map(|hit| i64::from(hit.delta)).sum()
    }

    pub fn synergy_total(&self) -> i64 {
        self.synergies.iter().map(|hit| i64::from(hit.delta)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.synergies.is_empty()
    }
}

/// Evaluates every rule independently; any number may fire at once.
///
/// Works on partial allocations too, which is how callers preview the bonuses a
/// sheet would earn before it is complete.
pub fn evaluate(sheet: &AttributeSheet) -> Adjustments {
    let modifiers = MODIFIERS
        .iter()
        .filter(|rule| rule.condition.holds(sheet))
        .map(|rule| AppliedAdjustment {
            key: rule.key,
            label: rule.label,
            condition: rule.condition.describe(),
            delta: rule.delta,
        })
        .collect();

    let synergies = SYNERGIES
        .iter()
        .filter(|rule| rule.conditions.iter().all(|condition| condition.holds(sheet)))
        .map(|rule| AppliedAdjustment {
            key: rule.key,
            label: rule.label,
            condition: format!(
                "{} & {}",
                rule.conditions[0].describe(),
                rule.conditions[1].describe()
            ),
            delta: rule.delta,
        })
        .collect();

    Adjustments {
        modifiers,
        synergies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(values: [i32; 6]) -> AttributeSheet {
        AttributeSheet::from_values(AttributeKind::ALL.into_iter().zip(values))
            .expect("valid sheet")
    }

    fn keys(hits: &[AppliedAdjustment]) -> Vec<&'static str> {
        hits.iter().map(|hit| hit.key).collect()
    }

    #[test]
    fn thresholds_are_strict() {
        // assets, intellect, constitution, legacy, social, luck
        let edge = sheet([10, 70, 30, 10, 30, 10]);
        let hits = evaluate(&edge);
        assert!(hits.is_empty(), "boundary values must not fire: {hits:?}");

        let over = sheet([10, 75, 25, 10, 25, 10]);
        let hits = evaluate(&over);
        assert_eq!(
            keys(&hits.modifiers),
            vec!["techElite", "socialInstability", "healthDrain"]
        );
        assert_eq!(hits.modifier_total(), -30);
    }

    #[test]
    fn synergies_require_both_thresholds() {
        let only_intellect = sheet([10, 65, 30, 60, 30, 10]);
        assert!(evaluate(&only_intellect).synergies.is_empty());

        let bloodline = sheet([10, 65, 30, 65, 30, 10]);
        assert_eq!(keys(&evaluate(&bloodline).synergies), vec!["eliteBloodline"]);

        let network = sheet([65, 10, 30, 10, 65, 10]);
        let hits = evaluate(&network);
        assert_eq!(keys(&hits.synergies), vec!["capitalNetwork"]);
        assert_eq!(hits.synergy_total(), 40);

        let tenacious = sheet([10, 10, 75, 10, 30, 75]);
        let hits = evaluate(&tenacious);
        assert_eq!(keys(&hits.synergies), vec!["tenaciousLife"]);
        assert_eq!(hits.synergy_total(), 20);
    }

    #[test]
    fn conditions_render_with_attribute_codes() {
        let hits = evaluate(&sheet([10, 75, 10, 65, 10, 10]));
        assert_eq!(hits.modifiers[0].condition, "INT > 70");
        assert_eq!(hits.modifiers[1].condition, "SOC < 30");
        assert_eq!(hits.synergies[0].condition, "INT > 60 & LGC > 60");
    }
}
