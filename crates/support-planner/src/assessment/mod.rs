//! Questionnaire analysis: category scoring, needs tier, strengths, recommendation
//! blocks and the interest-based support plan, plus persistence of the resulting
//! assessment records behind an access token.
//!
//! The engine half (`scoring`, `tier`, `strengths`, `recommendations`, `plan`) is
//! pure and synchronous. `service` and `router` add storage and HTTP on top.

pub mod answers;
pub mod catalog;
pub mod engine;
pub mod plan;
pub mod record;
pub mod recommendations;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod strengths;
pub mod tier;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSet, Question};
pub use engine::{Analysis, AnalysisBundle, AssessmentEngine};
pub use plan::SupportPlan;
pub use record::{AccessToken, AssessmentId, AssessmentRecord, AssessmentSummary, Respondent};
pub use recommendations::{BlockKind, Priority, RecommendationBlock, RecommendationItem};
pub use repository::AssessmentRepository;
pub use router::{assessment_router, AnalyzeRequest, AnalyzeResponse};
pub use scoring::{Category, CategoryScores};
pub use service::{AssessmentService, AssessmentServiceError};
pub use strengths::StrengthMode;
pub use tier::NeedsTier;
