use super::item::BonusLineItem;
use super::BonusCategory;

/// Social value assessment as published on the calculator page.
pub(super) fn standard_categories() -> Vec<BonusCategory> {
    vec![
        BonusCategory {
            key: "procreation",
            name: "Procreation Contribution",
            items: vec![
                BonusLineItem::toggle(
                    "firstborn",
                    "First Child",
                    "Basic contribution to population stability",
                    50,
                ),
                BonusLineItem::toggle(
                    "secondborn",
                    "Second Child",
                    "Enhanced demographic contribution",
                    100,
                ),
                BonusLineItem::toggle(
                    "thirdborn",
                    "Third Child or More",
                    "Exceptional population renewal support",
                    200,
                ),
                BonusLineItem::slider(
                    "geneticLegacy",
                    "Offspring Social Value",
                    "Children demonstrating high social value",
                    0,
                    100,
                    25,
                ),
                BonusLineItem::slider(
                    "partnershipCompliance",
                    "Partnership Compliance Track",
                    "Non-traditional (0) → Exploring (50) → State-sanctioned family (100)",
                    0,
                    100,
                    10,
                )
                .with_default(50),
            ],
        },
        BonusCategory {
            key: "intellectual",
            name: "Scientific & Intellectual",
            items: vec![
                BonusLineItem::slider(
                    "basicResearch",
                    "Foundational Research",
                    "Physics, medicine, theoretical breakthroughs",
                    0,
                    500,
                    100,
                ),
                BonusLineItem::slider(
                    "appliedInnovation",
                    "Applied Technology Innovation",
                    "AI, biotech, engineering advances",
                    0,
                    300,
                    50,
                ),
                BonusLineItem::slider(
                    "patents",
                    "Patents & Publications",
                    "High-impact research output",
                    0,
                    200,
                    50,
                ),
                BonusLineItem::slider(
                    "expertise",
                    "Professional Recognition",
                    "National/global expertise awards",
                    0,
                    150,
                    50,
                ),
                BonusLineItem::slider(
                    "sectorAlignment",
                    "Priority Sector Alignment",
                    "Humanities/Arts (-50) → Social Management (0) → STEM/Engineering (+100)",
                    -50,
                    100,
                    10,
                ),
            ],
        },
        BonusCategory {
            key: "social",
            name: "Social Service",
            items: vec![
                BonusLineItem::slider(
                    "publicService",
                    "Government & Public Service",
                    "Healthcare, education, administration",
                    0,
                    100,
                    25,
                ),
                BonusLineItem::slider(
                    "volunteering",
                    "Volunteer Service",
                    "Documented community engagement",
                    0,
                    100,
                    20,
                ),
                BonusLineItem::slider(
                    "emergency",
                    "Emergency Response",
                    "Crisis intervention and heroism",
                    0,
                    50,
                    25,
                ),
                BonusLineItem::slider(
                    "charity",
                    "Philanthropic Donations",
                    "Material contributions to society",
                    0,
                    50,
                    10,
                ),
            ],
        },
        BonusCategory {
            key: "economic",
            name: "Economic Contribution",
            items: vec![
                BonusLineItem::slider(
                    "entrepreneurship",
                    "Enterprise Creation",
                    "Job creation and economic growth",
                    0,
                    500,
                    100,
                ),
                BonusLineItem::slider(
                    "taxation",
                    "Tax Contribution",
                    "Above-baseline fiscal support",
                    0,
                    300,
                    50,
                ),
                BonusLineItem::slider(
                    "industry",
                    "Strategic Industry",
                    "Energy, aerospace, critical sectors",
                    0,
                    200,
                    50,
                ),
            ],
        },
        BonusCategory {
            key: "civic",
            name: "Civic Compliance",
            items: vec![
                BonusLineItem::slider(
                    "civicSupervision",
                    "Civic Supervision Contribution",
                    "Never (0) → Occasionally (50) → Actively (100)",
                    0,
                    100,
                    10,
                ),
                BonusLineItem::slider(
                    "socialHarmony",
                    "Social Harmony Compliance",
                    "Frequent Dissent (-100) → Passive (0) → Active Endorsement (+100)",
                    -100,
                    100,
                    10,
                ),
            ],
        },
        BonusCategory {
            key: "negative",
            name: "Negative Deductions",
            items: vec![
                BonusLineItem::slider(
                    "criminal",
                    "Minor Offenses",
                    "Legal violations with social harm",
                    -200,
                    0,
                    50,
                ),
                BonusLineItem::slider(
                    "severeOffense",
                    "Severe Crimes",
                    "Serious harm to society",
                    -1000,
                    0,
                    200,
                ),
                BonusLineItem::slider(
                    "environmental",
                    "Environmental Damage",
                    "Ecological harm caused",
                    -300,
                    0,
                    100,
                ),
                BonusLineItem::slider(
                    "ethical",
                    "Ethical Violations",
                    "Professional misconduct",
                    -200,
                    0,
                    50,
                ),
            ],
        },
    ]
}
