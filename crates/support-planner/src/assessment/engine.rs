use super::answers::{AnswerSet, Question};
use super::plan::{support_plan, SupportPlan};
use super::recommendations::{compose, RecommendationBlock};
use super::scoring::{score, CategoryScores};
use super::strengths::{identify, StrengthMode};
use super::tier::{classify, NeedsTier};
use serde::{Deserialize, Serialize};

/// Scores, tier, and strengths for one answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub scores: CategoryScores,
    pub needs_level: NeedsTier,
    pub age_group: Option<String>,
    pub role: Option<String>,
    pub strengths: Vec<String>,
}

/// Everything the engine derives from an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub analysis: Analysis,
    pub recommendations: Vec<RecommendationBlock>,
    pub support_plan: Option<SupportPlan>,
    pub daily_tip: String,
}

/// Stateless analyzer; the strength mode is its only setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentEngine {
    strength_mode: StrengthMode,
}

impl AssessmentEngine {
    pub fn new(strength_mode: StrengthMode) -> Self {
        Self { strength_mode }
    }

    pub fn strength_mode(&self) -> StrengthMode {
        self.strength_mode
    }

    pub fn analyze(&self, answers: &AnswerSet) -> AnalysisBundle {
        let scores = score(answers);
        let needs_level = classify(&scores);
        let strengths = identify(answers, self.strength_mode)
            .into_iter()
            .map(str::to_string)
            .collect();

        let analysis = Analysis {
            scores,
            needs_level,
            age_group: answers.get(Question::Age).map(str::to_string),
            role: answers.get(Question::Role).map(str::to_string),
            strengths,
        };

        AnalysisBundle {
            recommendations: compose(&scores, answers),
            support_plan: support_plan(answers, needs_level),
            daily_tip: needs_level.daily_tip().to_string(),
            analysis,
        }
    }
}
