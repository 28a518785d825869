use super::answers::AnswerSet;
use super::engine::{Analysis, AnalysisBundle};
use super::plan::SupportPlan;
use super::recommendations::RecommendationBlock;
use super::tier::NeedsTier;
use crate::auth::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const ANONYMOUS_NAME: &str = "Anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Bearer capability for one record. Two v4 UUIDs give 244 random bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn generate() -> Self {
        Self(format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who took the assessment, as supplied with the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Respondent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub owner: Option<UserId>,
}

/// Persisted assessment. Written once at analysis time and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub owner: Option<UserId>,
    pub answers: AnswerSet,
    pub analysis: Analysis,
    pub recommendations: Vec<RecommendationBlock>,
    #[serde(default)]
    pub support_plan: Option<SupportPlan>,
    pub daily_tip: String,
    pub access_token: AccessToken,
    pub created_at: DateTime<Utc>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AssessmentRecord {
    pub fn new(
        respondent: Respondent,
        answers: AnswerSet,
        bundle: AnalysisBundle,
        created_at: DateTime<Utc>,
    ) -> Self {
        let AnalysisBundle {
            analysis,
            recommendations,
            support_plan,
            daily_tip,
        } = bundle;

        Self {
            id: AssessmentId::generate(),
            user_name: non_blank(respondent.name).unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
            user_email: non_blank(respondent.email),
            owner: respondent.owner,
            answers,
            analysis,
            recommendations,
            support_plan,
            daily_tip,
            access_token: AccessToken::generate(),
            created_at,
        }
    }

    pub fn bundle(&self) -> AnalysisBundle {
        AnalysisBundle {
            analysis: self.analysis.clone(),
            recommendations: self.recommendations.clone(),
            support_plan: self.support_plan.clone(),
            daily_tip: self.daily_tip.clone(),
        }
    }

    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            id: self.id,
            user_name: self.user_name.clone(),
            needs_level: self.analysis.needs_level,
            access_token: self.access_token.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing view for a user's assessment history.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub id: AssessmentId,
    pub user_name: String,
    pub needs_level: NeedsTier,
    pub access_token: AccessToken,
    pub created_at: DateTime<Utc>,
}
