use std::collections::VecDeque;

use homecoming::scoring::{
    generate_base_score, AllocationError, AttributeKind, AttributeSheet, CharacterSession,
    LegacyRoll, RerollError, RngRollSource, RollSource, TOTAL_BUDGET,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Scripted {
    rolls: VecDeque<i32>,
}

impl Scripted {
    fn new(rolls: &[i32]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }
}

impl RollSource for Scripted {
    fn legacy_roll(&mut self) -> LegacyRoll {
        let next = self.rolls.pop_front().unwrap_or(0);
        LegacyRoll::new(next).expect("scripted roll in range")
    }

    fn citizen_suffix(&mut self) -> String {
        "7K2Q".to_string()
    }
}

fn allocate<S: RollSource>(session: &mut CharacterSession<S>, values: [i32; 6]) {
    for (kind, value) in AttributeKind::ALL.into_iter().zip(values) {
        session.set_attribute(kind, value).expect("allocation accepted");
    }
}

#[test]
fn tech_elite_walkthrough_scores_three_hundred_ten() {
    let mut session = CharacterSession::new(Scripted::new(&[0]));
    // assets, intellect, constitution, legacy, socialCapital, luck
    allocate(&mut session, [10, 75, 75, 65, 10, 15]);
    assert_eq!(session.sheet().allocated(), TOTAL_BUDGET);

    let generated = session.generate().expect("complete allocation");
    let modifiers: Vec<_> = generated
        .breakdown
        .modifiers
        .iter()
        .map(|hit| (hit.label, hit.delta))
        .collect();
    let synergies: Vec<_> = generated
        .breakdown
        .synergies
        .iter()
        .map(|hit| (hit.label, hit.delta))
        .collect();

    assert_eq!(
        modifiers,
        vec![("Tech Elite", 50), ("Social Instability", -40)]
    );
    assert_eq!(synergies, vec![("Elite Bloodline", 50)]);
    assert_eq!(generated.breakdown.total, 310);
    assert_eq!(generated.citizen_id.to_string(), "#2025-7K2Q");
}

#[test]
fn budget_is_never_exceeded_by_any_edit_sequence() {
    let mut session = CharacterSession::new(RngRollSource::new(StdRng::seed_from_u64(9)));
    let edits = [
        (AttributeKind::Assets, 80),
        (AttributeKind::Intellect, 80),
        (AttributeKind::Constitution, 80),
        (AttributeKind::Legacy, 80),
        (AttributeKind::SocialCapital, 80),
        (AttributeKind::Luck, 44),
        (AttributeKind::Assets, 12),
        (AttributeKind::Luck, 80),
    ];

    for (kind, raw) in edits {
        let _ = session.set_attribute(kind, raw);
        assert!(session.sheet().allocated() <= TOTAL_BUDGET);
    }
}

#[test]
fn over_budget_edit_is_rejected_without_change() {
    let sheet = AttributeSheet::new()
        .set_attribute(AttributeKind::Assets, 80)
        .and_then(|sheet| sheet.set_attribute(AttributeKind::Intellect, 80))
        .and_then(|sheet| sheet.set_attribute(AttributeKind::Constitution, 50))
        .expect("within budget");
    assert_eq!(sheet.allocated(), 240);

    match sheet.set_attribute(AttributeKind::Luck, 25) {
        Err(AllocationError::OverBudget { .. }) => {}
        other => panic!("expected over budget, got {other:?}"),
    }
    assert_eq!(sheet.get(AttributeKind::Luck), 10);
}

#[test]
fn incomplete_allocation_keeps_previous_character() {
    let mut session = CharacterSession::new(Scripted::new(&[20]));
    allocate(&mut session, [40, 40, 40, 40, 40, 50]);
    let first_total = session.generate().expect("complete").breakdown.total;
    assert_eq!(first_total, 270);

    session
        .set_attribute(AttributeKind::Luck, 10)
        .expect("lowering is always allowed");
    assert!(matches!(
        session.generate(),
        Err(AllocationError::Incomplete { allocated: 210, .. })
    ));
    assert_eq!(
        session.generated().map(|character| character.breakdown.total),
        Some(first_total)
    );
}

#[test]
fn third_reroll_changes_nothing() {
    let mut session = CharacterSession::new(Scripted::new(&[5, -60, 130, 199]));
    assert_eq!(session.reroll_legacy().map(LegacyRoll::value), Ok(-60));
    assert_eq!(session.reroll_legacy().map(LegacyRoll::value), Ok(130));

    assert_eq!(session.reroll_legacy(), Err(RerollError::Exhausted));
    assert_eq!(session.legacy_roll().value(), 130);
    assert_eq!(session.rerolls_remaining(), 0);

    session.reset();
    assert_eq!(session.rerolls_remaining(), 2);
    assert_eq!(session.legacy_roll().value(), 199);
    assert_eq!(session.sheet().allocated(), 60);
}

#[test]
fn base_score_is_deterministic_for_the_same_inputs() {
    let sheet = AttributeSheet::from_values([
        (AttributeKind::Assets, 65),
        (AttributeKind::Intellect, 30),
        (AttributeKind::Constitution, 25),
        (AttributeKind::Legacy, 20),
        (AttributeKind::SocialCapital, 65),
        (AttributeKind::Luck, 45),
    ])
    .expect("valid sheet");
    let roll = LegacyRoll::new(-35).expect("in range");

    let first = generate_base_score(&sheet, roll).expect("complete");
    let second = generate_base_score(&sheet, roll).expect("complete");

    assert_eq!(first, second);
    // Capital Network +40, Health Drain -40.
    assert_eq!(first.total, 250 - 35 + 40 - 40);
}
