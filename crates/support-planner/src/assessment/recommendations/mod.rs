//! Recommendation blocks assembled from fixed suggestion text.
//!
//! Category blocks are gated twice: the category score must reach
//! [`BLOCK_THRESHOLD`], and each item needs a matching answer. The developmental and
//! lifestyle blocks are appended to every result.

mod catalog;

use super::answers::{AnswerSet, Question};
use super::scoring::{Category, CategoryScores};
use serde::{Deserialize, Serialize};

pub const BLOCK_THRESHOLD: u32 = 3;
pub const HIGH_PRIORITY_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Sensory,
    Social,
    Routine,
    Communication,
    Developmental,
    Lifestyle,
}

impl BlockKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sensory => "Sensory Support Strategies",
            Self::Social => "Social Communication Support",
            Self::Routine => "Routine & Structure Support",
            Self::Communication => "Communication Development",
            Self::Developmental => "Interest-Based Skill Development",
            Self::Lifestyle => "Daily Living & Wellness",
        }
    }

    const fn for_category(category: Category) -> Self {
        match category {
            Category::Sensory => Self::Sensory,
            Category::Social => Self::Social,
            Category::Routine => Self::Routine,
            Category::Communication => Self::Communication,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "High Priority")]
    High,
    #[serde(rename = "Moderate Priority")]
    Moderate,
    #[serde(rename = "Ongoing Development")]
    OngoingDevelopment,
    #[serde(rename = "Foundation")]
    Foundation,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Moderate => "Moderate Priority",
            Self::OngoingDevelopment => "Ongoing Development",
            Self::Foundation => "Foundation",
        }
    }

    const fn for_score(score: u32) -> Self {
        if score >= HIGH_PRIORITY_THRESHOLD {
            Self::High
        } else {
            Self::Moderate
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub title: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBlock {
    pub kind: BlockKind,
    pub category: String,
    pub priority: Priority,
    pub items: Vec<RecommendationItem>,
}

impl RecommendationBlock {
    fn new(kind: BlockKind, priority: Priority, items: Vec<RecommendationItem>) -> Self {
        Self {
            kind,
            category: kind.label().to_string(),
            priority,
            items,
        }
    }

    pub fn item_titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }
}

pub(crate) struct ItemTemplate {
    pub title: &'static str,
    pub suggestions: &'static [&'static str],
}

impl ItemTemplate {
    fn to_item(&self) -> RecommendationItem {
        RecommendationItem {
            title: self.title.to_string(),
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

struct GatedItem {
    question: Question,
    triggers: &'static [&'static str],
    template: ItemTemplate,
}

struct CategoryPlan {
    category: Category,
    gated: &'static [GatedItem],
    baseline: &'static [ItemTemplate],
}

static CATEGORY_PLANS: [CategoryPlan; 4] = [
    CategoryPlan {
        category: Category::Sensory,
        gated: &[
            GatedItem {
                question: Question::Noise,
                triggers: &["Very distressed", "Distressed"],
                template: catalog::SOUND_MANAGEMENT,
            },
            GatedItem {
                question: Question::Lights,
                triggers: &["Very sensitive", "Sensitive"],
                template: catalog::VISUAL_ENVIRONMENT,
            },
            GatedItem {
                question: Question::Textures,
                triggers: &["Very selective", "Selective"],
                template: catalog::FOOD_AND_NUTRITION,
            },
            GatedItem {
                question: Question::Clothing,
                triggers: &["Cannot tolerate", "Very bothered"],
                template: catalog::CLOTHING_COMFORT,
            },
        ],
        baseline: &[],
    },
    CategoryPlan {
        category: Category::Social,
        gated: &[
            GatedItem {
                question: Question::EyeContact,
                triggers: &["Very uncomfortable", "Uncomfortable"],
                template: catalog::EYE_CONTACT_ALTERNATIVES,
            },
            GatedItem {
                question: Question::Nonverbal,
                triggers: &["Very difficult", "Difficult"],
                template: catalog::UNDERSTANDING_SOCIAL_CUES,
            },
        ],
        baseline: &[
            catalog::SOCIAL_SKILLS_PRACTICE,
            catalog::BUILDING_SOCIAL_CONFIDENCE,
        ],
    },
    CategoryPlan {
        category: Category::Routine,
        gated: &[
            GatedItem {
                question: Question::RoutineChange,
                triggers: &["Very distressed", "Distressed"],
                template: catalog::MANAGING_TRANSITIONS,
            },
            GatedItem {
                question: Question::Repetitive,
                triggers: &["Very frequent", "Frequent"],
                template: catalog::REPETITIVE_BEHAVIORS,
            },
            GatedItem {
                question: Question::Interests,
                triggers: &["All-consuming", "Very intense"],
                template: catalog::INTENSE_INTERESTS,
            },
        ],
        baseline: &[],
    },
    CategoryPlan {
        category: Category::Communication,
        gated: &[
            GatedItem {
                question: Question::Verbal,
                triggers: &["Non-verbal", "Limited words"],
                template: catalog::AAC,
            },
            GatedItem {
                question: Question::Emotions,
                triggers: &["Very difficult", "Difficult"],
                template: catalog::EMOTIONAL_EXPRESSION,
            },
            GatedItem {
                question: Question::Literal,
                triggers: &["Takes everything literally", "Usually literal"],
                template: catalog::FIGURATIVE_LANGUAGE,
            },
        ],
        baseline: &[],
    },
];

/// Builds the block for one category, or `None` when the score is under the
/// threshold or no item applies.
pub fn category_block(
    category: Category,
    scores: &CategoryScores,
    answers: &AnswerSet,
) -> Option<RecommendationBlock> {
    let score = scores.get(category);
    if score < BLOCK_THRESHOLD {
        return None;
    }

    let plan = CATEGORY_PLANS
        .iter()
        .find(|plan| plan.category == category)?;

    let items: Vec<RecommendationItem> = plan
        .gated
        .iter()
        .filter(|gate| answers.is_any(gate.question, gate.triggers))
        .map(|gate| &gate.template)
        .chain(plan.baseline.iter())
        .map(ItemTemplate::to_item)
        .collect();

    if items.is_empty() {
        return None;
    }

    Some(RecommendationBlock::new(
        BlockKind::for_category(category),
        Priority::for_score(score),
        items,
    ))
}

/// Age bands used to pick developmental activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    EarlyChildhood,
    MiddleChildhood,
    TeenAdult,
}

impl AgeGroup {
    /// Unanswered or unrecognized ages fall into the teen/adult band.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        match answers.get(Question::Age) {
            Some("2-4 years" | "5-7 years") => Self::EarlyChildhood,
            Some("8-12 years") => Self::MiddleChildhood,
            _ => Self::TeenAdult,
        }
    }
}

pub fn developmental_block(answers: &AnswerSet) -> RecommendationBlock {
    let age_specific = match AgeGroup::from_answers(answers) {
        AgeGroup::EarlyChildhood => &catalog::EARLY_LEARNING,
        AgeGroup::MiddleChildhood => &catalog::MIDDLE_CHILDHOOD,
        AgeGroup::TeenAdult => &catalog::TEEN_AND_ADULT,
    };

    RecommendationBlock::new(
        BlockKind::Developmental,
        Priority::OngoingDevelopment,
        vec![age_specific.to_item(), catalog::PHYSICAL_ACTIVITIES.to_item()],
    )
}

pub fn lifestyle_block() -> RecommendationBlock {
    RecommendationBlock::new(
        BlockKind::Lifestyle,
        Priority::Foundation,
        [
            catalog::SLEEP_AND_REST,
            catalog::NUTRITION_AWARENESS,
            catalog::CAREGIVER_SUPPORT,
        ]
        .iter()
        .map(ItemTemplate::to_item)
        .collect(),
    )
}

/// Category blocks in fixed order, then the developmental and lifestyle blocks.
pub fn compose(scores: &CategoryScores, answers: &AnswerSet) -> Vec<RecommendationBlock> {
    let mut blocks: Vec<RecommendationBlock> = Category::ordered()
        .into_iter()
        .filter_map(|category| category_block(category, scores, answers))
        .collect();

    blocks.push(developmental_block(answers));
    blocks.push(lifestyle_block());
    blocks
}
