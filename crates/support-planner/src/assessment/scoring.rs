use super::answers::{AnswerSet, Question};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sensory,
    Social,
    Routine,
    Communication,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Sensory,
            Self::Social,
            Self::Routine,
            Self::Communication,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sensory => "Sensory",
            Self::Social => "Social",
            Self::Routine => "Routine",
            Self::Communication => "Communication",
        }
    }
}

/// Accumulated signal per category. Scores only grow while a rubric is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub sensory: u32,
    pub social: u32,
    pub routine: u32,
    pub communication: u32,
}

impl CategoryScores {
    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::Sensory => self.sensory,
            Category::Social => self.social,
            Category::Routine => self.routine,
            Category::Communication => self.communication,
        }
    }

    fn slot(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Sensory => &mut self.sensory,
            Category::Social => &mut self.social,
            Category::Routine => &mut self.routine,
            Category::Communication => &mut self.communication,
        }
    }

    pub const fn total(&self) -> u32 {
        self.sensory + self.social + self.routine + self.communication
    }
}

pub(crate) struct QuestionRule {
    pub question: Question,
    pub elevated: &'static [&'static str],
}

/// Per-category scoring table. Answers outside both `elevated` and `unremarkable`
/// still count as a weak signal.
pub(crate) struct CategoryRubric {
    pub category: Category,
    pub rules: &'static [QuestionRule],
    pub unremarkable: &'static [&'static str],
}

impl CategoryRubric {
    fn weigh(&self, answers: &AnswerSet, rule: &QuestionRule) -> u32 {
        match answers.get(rule.question) {
            Some(answer) if rule.elevated.contains(&answer) => 2,
            Some(answer) if !self.unremarkable.contains(&answer) => 1,
            _ => 0,
        }
    }

    fn apply(&self, answers: &AnswerSet, scores: &mut CategoryScores) {
        let slot = scores.slot(self.category);
        for rule in self.rules {
            *slot += self.weigh(answers, rule);
        }
    }
}

const SENSORY_ELEVATED: &[&str] = &[
    "Very distressed",
    "Distressed",
    "Very sensitive",
    "Sensitive",
    "Very selective",
    "Selective",
    "Cannot tolerate",
    "Very bothered",
];

pub(crate) static RUBRICS: [CategoryRubric; 4] = [
    CategoryRubric {
        category: Category::Sensory,
        rules: &[
            QuestionRule {
                question: Question::Noise,
                elevated: SENSORY_ELEVATED,
            },
            QuestionRule {
                question: Question::Lights,
                elevated: SENSORY_ELEVATED,
            },
            QuestionRule {
                question: Question::Textures,
                elevated: SENSORY_ELEVATED,
            },
            QuestionRule {
                question: Question::Clothing,
                elevated: SENSORY_ELEVATED,
            },
        ],
        unremarkable: &["Not bothered", "Rarely bothered", "Very flexible", "Flexible"],
    },
    CategoryRubric {
        category: Category::Social,
        rules: &[
            QuestionRule {
                question: Question::EyeContact,
                elevated: &["Very uncomfortable", "Uncomfortable"],
            },
            QuestionRule {
                question: Question::SocialGreeting,
                elevated: &["Rarely responds", "Sometimes responds"],
            },
            QuestionRule {
                question: Question::Sharing,
                elevated: &["Never", "Rarely"],
            },
            QuestionRule {
                question: Question::Nonverbal,
                elevated: &["Very difficult", "Difficult"],
            },
        ],
        unremarkable: &[
            "Very comfortable",
            "Comfortable",
            "Always",
            "Often",
            "Very good",
            "Good",
        ],
    },
    CategoryRubric {
        category: Category::Routine,
        rules: &[
            QuestionRule {
                question: Question::RoutineChange,
                elevated: &["Very distressed", "Distressed"],
            },
            QuestionRule {
                question: Question::Repetitive,
                elevated: &["Very frequent", "Frequent"],
            },
            QuestionRule {
                question: Question::Interests,
                elevated: &["All-consuming", "Very intense"],
            },
        ],
        unremarkable: &[
            "Adapts easily",
            "Adapts with support",
            "Never",
            "Rare",
            "Varied interests",
        ],
    },
    CategoryRubric {
        category: Category::Communication,
        rules: &[
            QuestionRule {
                question: Question::Verbal,
                elevated: &["Non-verbal", "Limited words"],
            },
            QuestionRule {
                question: Question::Emotions,
                elevated: &["Very difficult", "Difficult"],
            },
            QuestionRule {
                question: Question::Literal,
                elevated: &["Takes everything literally", "Usually literal"],
            },
        ],
        unremarkable: &[
            "Advanced vocabulary",
            "Full sentences",
            "Very good",
            "Good",
            "Fully understands",
        ],
    },
];

/// Scores every category. Total over any answer set; unanswered questions add nothing.
pub fn score(answers: &AnswerSet) -> CategoryScores {
    let mut scores = CategoryScores::default();
    for rubric in &RUBRICS {
        rubric.apply(answers, &mut scores);
    }
    scores
}
