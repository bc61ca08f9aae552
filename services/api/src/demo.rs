use crate::infra::{parse_answer_sheet, InMemoryFeedbackRepository};
use clap::Args;
use homecoming::bonus::{BonusScorer, CombinedScore};
use homecoming::config::AppConfig;
use homecoming::error::AppError;
use homecoming::feedback::{FeedbackService, FeedbackSubmission};
use homecoming::quiz::{ArchetypeKey, ArchetypeResult, QuizAnswers, QuizSession};
use homecoming::scoring::{
    generate_base_score, Adjustments, AttributeKind, AttributeSheet, BaseScoreBreakdown,
    CharacterSession, CitizenId, LegacyRoll, RngRollSource, RollSource, COHORT_YEAR,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

const DEMO_ALLOCATION: [(AttributeKind, i32); 6] = [
    (AttributeKind::Assets, 10),
    (AttributeKind::Intellect, 75),
    (AttributeKind::Constitution, 75),
    (AttributeKind::Legacy, 65),
    (AttributeKind::SocialCapital, 10),
    (AttributeKind::Luck, 15),
];

const DEMO_BONUS: [(&str, &str, i64); 4] = [
    ("procreation", "firstborn", 50),
    ("intellectual", "appliedInnovation", 140),
    ("social", "volunteering", 60),
    ("civic", "socialHarmony", -20),
];

const DEMO_ANSWERS: &str = "BADBCBBDABCBDBBADBCB";

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[arg(long)]
    pub(crate) assets: i32,
    #[arg(long)]
    pub(crate) intellect: i32,
    #[arg(long)]
    pub(crate) constitution: i32,
    #[arg(long)]
    pub(crate) legacy: i32,
    #[arg(long)]
    pub(crate) social_capital: i32,
    #[arg(long)]
    pub(crate) luck: i32,
    /// Legacy roll in [-200, 200]. Drawn at random when omitted.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) legacy_roll: Option<i32>,
    /// Seed for the legacy roll and citizen id
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// One letter (A-D) per question, in order
    #[arg(long, value_parser = parse_answer_sheet)]
    pub(crate) answers: QuizAnswers,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for legacy rolls and citizen ids
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    match args.seed {
        Some(seed) => score_with(RngRollSource::new(StdRng::seed_from_u64(seed)), &args),
        None => score_with(RngRollSource::thread(), &args),
    }
}

fn score_with<S: RollSource>(mut source: S, args: &ScoreArgs) -> Result<(), AppError> {
    let sheet = AttributeSheet::from_values([
        (AttributeKind::Assets, args.assets),
        (AttributeKind::Intellect, args.intellect),
        (AttributeKind::Constitution, args.constitution),
        (AttributeKind::Legacy, args.legacy),
        (AttributeKind::SocialCapital, args.social_capital),
        (AttributeKind::Luck, args.luck),
    ])?;
    let legacy_roll = match args.legacy_roll {
        Some(value) => LegacyRoll::new(value)?,
        None => source.legacy_roll(),
    };

    let breakdown = generate_base_score(&sheet, legacy_roll)?;
    let citizen_id = CitizenId::new(COHORT_YEAR, &source.citizen_suffix());
    render_breakdown(&citizen_id, &breakdown);
    render_combined(&BonusScorer::standard().combined_with(breakdown.total));
    Ok(())
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let result = ArchetypeResult::from_answers(&args.answers)?;
    render_archetype(&result);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let rerolls = config.scoring.legacy_rerolls;
    match args.seed {
        Some(seed) => demo_with(RngRollSource::new(StdRng::seed_from_u64(seed)), rerolls),
        None => demo_with(RngRollSource::thread(), rerolls),
    }
}

fn demo_with<S: RollSource>(source: S, rerolls: u8) -> Result<(), AppError> {
    println!("Homecoming demo");

    let mut session = CharacterSession::with_rerolls(source, rerolls);
    println!(
        "\nCharacter builder (opening legacy roll {}, {} rerolls)",
        session.legacy_roll(),
        session.rerolls_remaining()
    );
    for (attribute, value) in DEMO_ALLOCATION {
        let stored = session.set_attribute(attribute, value)?;
        println!("- {} ({}) -> {}", attribute.label(), attribute.code(), stored);
    }
    println!(
        "  Allocated {} | remaining {}",
        session.sheet().allocated(),
        session.sheet().remaining()
    );
    render_adjustments("Potential bonuses", &session.pending_adjustments());

    match session.set_attribute(AttributeKind::Luck, 80) {
        Ok(stored) => println!("  Luck raised to {}", stored),
        Err(err) => println!("  Luck 80 rejected: {}", err),
    }

    match session.reroll_legacy() {
        Ok(roll) => println!(
            "  Rerolled legacy to {} ({} left)",
            roll,
            session.rerolls_remaining()
        ),
        Err(err) => println!("  Reroll unavailable: {}", err),
    }

    let character = session.generate()?.clone();
    render_breakdown(&character.citizen_id, &character.breakdown);

    println!("\nSocial value assessment");
    let mut scorer = BonusScorer::standard();
    for (category, item, raw) in DEMO_BONUS {
        let stored = scorer.set_line_item(category, item, raw)?;
        println!("- {}/{}: {} -> {}", category, item, raw, stored);
    }
    for entry in scorer.category_totals() {
        println!("  {}: {:+}", entry.name, entry.total);
    }
    render_combined(&scorer.combined_with(character.breakdown.total));

    println!("\nArchetype quiz");
    let mut quiz = QuizSession::new();
    let first = quiz.start()?;
    println!("- Q{}: {}", first.number, first.prompt);
    for label in DEMO_ANSWERS.chars().filter_map(ArchetypeKey::from_letter) {
        quiz.select(label)?;
        quiz.next()?;
    }
    match quiz.result() {
        Some(result) => render_archetype(&result),
        None => println!("  Quiz did not complete ({:?})", quiz.state()),
    }

    println!("\nFeedback wall");
    let service = FeedbackService::new(Arc::new(InMemoryFeedbackRepository::default()));
    let stored = service.submit(FeedbackSubmission::new(
        "Demo Visitor",
        format!(
            "Citizen {} scored {}",
            character.citizen_id, character.breakdown.total
        ),
    ))?;
    println!("- Stored {} at {}", stored.id, stored.timestamp_iso());
    println!("  {} entries on the wall", service.list()?.len());

    Ok(())
}

fn render_adjustments(heading: &str, adjustments: &Adjustments) {
    if adjustments.is_empty() {
        println!("  {}: none", heading);
        return;
    }
    println!("  {}:", heading);
    for hit in adjustments.modifiers.iter().chain(&adjustments.synergies) {
        println!("    - {} [{}] {:+}", hit.label, hit.condition, hit.delta);
    }
}

fn render_breakdown(citizen_id: &CitizenId, breakdown: &BaseScoreBreakdown) {
    println!("\nCitizen {}", citizen_id);
    println!("- Budget {}", breakdown.budget_total);
    println!("- Legacy roll {}", breakdown.legacy_roll);
    for hit in &breakdown.modifiers {
        println!("- Modifier {} [{}] {:+}", hit.label, hit.condition, hit.delta);
    }
    for hit in &breakdown.synergies {
        println!("- Synergy {} [{}] {:+}", hit.label, hit.condition, hit.delta);
    }
    println!("  Base score {}", breakdown.total);
}

fn render_combined(combined: &CombinedScore) {
    println!(
        "  Total {} (base {} + bonus {}) -> {} / {}",
        combined.total,
        combined.base_total,
        combined.bonus_total,
        combined.tier.label,
        combined.tier.designation
    );
    println!("  {}", combined.tier.description);
}

fn render_archetype(result: &ArchetypeResult) {
    let archetype = result.archetype;
    println!(
        "- {} ({}): A {} | B {} | C {} | D {}",
        archetype.name,
        result.key,
        result.tally.count(ArchetypeKey::A),
        result.tally.count(ArchetypeKey::B),
        result.tally.count(ArchetypeKey::C),
        result.tally.count(ArchetypeKey::D)
    );
    println!("  {}", archetype.quote);
    println!("  Recommended service: {}", archetype.service);
    println!("  Keywords: {}", archetype.keywords.join(", "));
}
