use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use super::domain::{ProgressEntry, ProgressSubmission};
use super::repository::ProgressRepository;
use super::service::{ProgressService, ProgressServiceError};
use crate::auth::{require_user, SessionVerifier};

pub(crate) struct ProgressRoutes<R> {
    pub(crate) service: Arc<ProgressService<R>>,
    pub(crate) sessions: Arc<dyn SessionVerifier>,
}

impl<R> Clone for ProgressRoutes<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

pub fn progress_router<R>(
    service: Arc<ProgressService<R>>,
    sessions: Arc<dyn SessionVerifier>,
) -> Router
where
    R: ProgressRepository + 'static,
{
    Router::new()
        .route(
            "/api/progress",
            get(history_handler::<R>).post(record_handler::<R>),
        )
        .with_state(ProgressRoutes { service, sessions })
}

fn service_failure(error: ProgressServiceError) -> Response {
    match error {
        ProgressServiceError::MissingMood => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        ProgressServiceError::Repository(source) => {
            warn!(error = %source, "progress storage failed");
            let payload = json!({ "error": "progress storage unavailable" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn record_handler<R>(
    State(routes): State<ProgressRoutes<R>>,
    headers: HeaderMap,
    Json(submission): Json<ProgressSubmission>,
) -> Response
where
    R: ProgressRepository + 'static,
{
    let user = match require_user(routes.sessions.as_ref(), &headers) {
        Ok(user) => user,
        Err(error) => return error.into_response(),
    };

    match routes.service.record(&user, submission) {
        Ok(entry) => {
            let payload = json!({ "success": true, "entry": entry.view() });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => service_failure(error),
    }
}

pub(crate) async fn history_handler<R>(
    State(routes): State<ProgressRoutes<R>>,
    headers: HeaderMap,
) -> Response
where
    R: ProgressRepository + 'static,
{
    let user = match require_user(routes.sessions.as_ref(), &headers) {
        Ok(user) => user,
        Err(error) => return error.into_response(),
    };

    let entries = match routes.service.history(&user) {
        Ok(entries) => entries,
        Err(error) => return service_failure(error),
    };
    let current_streak = match routes.service.current_streak(&user, Utc::now()) {
        Ok(streak) => streak,
        Err(error) => return service_failure(error),
    };

    let progress: Vec<_> = entries.iter().map(ProgressEntry::view).collect();
    let payload = json!({
        "success": true,
        "count": progress.len(),
        "current_streak": current_streak,
        "progress": progress,
    });
    (StatusCode::OK, Json(payload)).into_response()
}
