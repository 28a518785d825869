use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::answers::AnswerSet;
use super::catalog::questionnaire;
use super::engine::Analysis;
use super::plan::SupportPlan;
use super::record::{AccessToken, AssessmentRecord, Respondent};
use super::recommendations::RecommendationBlock;
use super::repository::AssessmentRepository;
use super::service::{AssessmentService, AssessmentServiceError};
use crate::auth::{optional_user, require_user, SessionVerifier};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, alias = "answers")]
    pub responses: AnswerSet,
    #[serde(default, alias = "userName")]
    pub user_name: Option<String>,
    #[serde(default, alias = "userEmail")]
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: Analysis,
    pub recommendations: Vec<RecommendationBlock>,
    pub strengths: Vec<String>,
    pub support_plan: Option<SupportPlan>,
    pub daily_tip: String,
    pub access_token: AccessToken,
    pub timestamp: DateTime<Utc>,
}

impl From<AssessmentRecord> for AnalyzeResponse {
    fn from(record: AssessmentRecord) -> Self {
        Self {
            success: true,
            strengths: record.analysis.strengths.clone(),
            analysis: record.analysis,
            recommendations: record.recommendations,
            support_plan: record.support_plan,
            daily_tip: record.daily_tip,
            access_token: record.access_token,
            timestamp: record.created_at,
        }
    }
}

pub(crate) struct AssessmentRoutes<R> {
    pub(crate) service: Arc<AssessmentService<R>>,
    pub(crate) sessions: Arc<dyn SessionVerifier>,
}

impl<R> Clone for AssessmentRoutes<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

/// Routes for submitting questionnaires and reading stored assessments.
pub fn assessment_router<R>(
    service: Arc<AssessmentService<R>>,
    sessions: Arc<dyn SessionVerifier>,
) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/analyze", post(analyze_handler::<R>))
        .route("/api/assessment/:token", get(token_handler::<R>))
        .route("/api/my-assessments", get(history_handler::<R>))
        .route("/api/questionnaire", get(questionnaire_handler))
        .with_state(AssessmentRoutes { service, sessions })
}

fn service_failure(error: AssessmentServiceError) -> Response {
    match error {
        AssessmentServiceError::EmptyAnswers => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        AssessmentServiceError::Repository(source) => {
            warn!(error = %source, "assessment storage failed");
            let payload = json!({ "error": "assessment storage unavailable" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analyze_handler<R>(
    State(routes): State<AssessmentRoutes<R>>,
    headers: HeaderMap,
    Json(request): Json<AnalyzeRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let owner = match optional_user(routes.sessions.as_ref(), &headers) {
        Ok(owner) => owner,
        Err(error) => return error.into_response(),
    };

    let respondent = Respondent {
        name: request.user_name,
        email: request.user_email,
        owner,
    };

    match routes
        .service
        .analyze(request.responses, respondent, Utc::now())
    {
        Ok(record) => (StatusCode::OK, Json(AnalyzeResponse::from(record))).into_response(),
        Err(error) => service_failure(error),
    }
}

pub(crate) async fn token_handler<R>(
    State(routes): State<AssessmentRoutes<R>>,
    Path(token): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    match routes.service.fetch_by_token(&AccessToken(token)) {
        Ok(Some(record)) => {
            let payload = json!({ "success": true, "assessment": record });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(None) => {
            let payload = json!({ "error": "assessment not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => service_failure(error),
    }
}

pub(crate) async fn history_handler<R>(
    State(routes): State<AssessmentRoutes<R>>,
    headers: HeaderMap,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let user = match require_user(routes.sessions.as_ref(), &headers) {
        Ok(user) => user,
        Err(error) => return error.into_response(),
    };

    match routes.service.history(&user) {
        Ok(records) => {
            let assessments: Vec<_> = records.iter().map(AssessmentRecord::summary).collect();
            let payload = json!({
                "success": true,
                "count": assessments.len(),
                "assessments": assessments,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => service_failure(error),
    }
}

pub(crate) async fn questionnaire_handler() -> Json<serde_json::Value> {
    Json(json!({ "sections": questionnaire() }))
}
