use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use support_planner::assessment::{assessment_router, AssessmentRepository, AssessmentService};
use support_planner::auth::{require_user, SessionVerifier};
use support_planner::progress::{
    mood_score, progress_router, ProgressRepository, ProgressService,
};
use tracing::warn;

pub(crate) struct DashboardState<A, P> {
    assessments: Arc<AssessmentService<A>>,
    progress: Arc<ProgressService<P>>,
    sessions: Arc<dyn SessionVerifier>,
}

impl<A, P> Clone for DashboardState<A, P> {
    fn clone(&self) -> Self {
        Self {
            assessments: self.assessments.clone(),
            progress: self.progress.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

/// Module routers plus the dashboard and operational endpoints. Expects an
/// `Extension<AppState>` layer.
pub(crate) fn with_support_routes<A, P>(
    assessments: Arc<AssessmentService<A>>,
    progress: Arc<ProgressService<P>>,
    sessions: Arc<dyn SessionVerifier>,
) -> Router
where
    A: AssessmentRepository + 'static,
    P: ProgressRepository + 'static,
{
    let dashboard = Router::new()
        .route("/api/dashboard", get(dashboard_endpoint::<A, P>))
        .with_state(DashboardState {
            assessments: assessments.clone(),
            progress: progress.clone(),
            sessions: sessions.clone(),
        });

    assessment_router(assessments, sessions.clone())
        .merge(progress_router(progress, sessions))
        .merge(dashboard)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "storage": state.storage }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint<A, P>(
    State(state): State<DashboardState<A, P>>,
    headers: HeaderMap,
) -> Response
where
    A: AssessmentRepository + 'static,
    P: ProgressRepository + 'static,
{
    let user = match require_user(state.sessions.as_ref(), &headers) {
        Ok(user) => user,
        Err(error) => return error.into_response(),
    };

    let latest_assessment = state.assessments.latest(&user);
    let latest_entry = state.progress.latest(&user);
    let current_streak = state.progress.current_streak(&user, Utc::now());

    match (latest_assessment, latest_entry, current_streak) {
        (Ok(assessment), Ok(entry), Ok(current_streak)) => {
            let payload = json!({
                "success": true,
                "user": user,
                "needs_level": assessment.as_ref().map(|record| record.analysis.needs_level),
                "latest_assessment": assessment.as_ref().map(|record| record.summary()),
                "current_streak": current_streak,
                "last_mood": entry.as_ref().map(|entry| entry.mood.as_str()),
                "last_mood_score": entry.as_ref().map(|entry| mood_score(&entry.mood)),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        (assessment, entry, streak) => {
            warn!(
                assessment_ok = assessment.is_ok(),
                progress_ok = entry.is_ok() && streak.is_ok(),
                "dashboard lookup failed"
            );
            let payload = json!({ "error": "dashboard data unavailable" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryAssessmentStore, InMemoryProgressStore, StaticSessionVerifier};
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::collections::BTreeMap;
    use std::sync::atomic::AtomicBool;
    use support_planner::assessment::{AnswerSet, AssessmentEngine, Question, Respondent};
    use support_planner::auth::UserId;
    use support_planner::config::AuthConfig;
    use support_planner::progress::{ProgressSubmission, StreakPolicy};
    use tower::ServiceExt;

    struct Harness {
        app: Router,
        assessments: Arc<AssessmentService<InMemoryAssessmentStore>>,
        progress: Arc<ProgressService<InMemoryProgressStore>>,
        readiness: Arc<AtomicBool>,
    }

    fn harness() -> Harness {
        let mut sessions = BTreeMap::new();
        sessions.insert("tok-ada".to_string(), UserId("ada".to_string()));
        let verifier = StaticSessionVerifier::from_config(&AuthConfig { sessions });

        let assessments = Arc::new(AssessmentService::new(
            Arc::new(InMemoryAssessmentStore::default()),
            AssessmentEngine::default(),
        ));
        let progress = Arc::new(ProgressService::new(
            Arc::new(InMemoryProgressStore::default()),
            StreakPolicy::default(),
        ));
        let readiness = Arc::new(AtomicBool::new(false));
        let state = AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            storage: "in-memory",
        };

        let app = with_support_routes(assessments.clone(), progress.clone(), Arc::new(verifier))
            .layer(Extension(state));

        Harness {
            app,
            assessments,
            progress,
            readiness,
        }
    }

    async fn read_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn get(uri: &str, session: Option<&str>) -> Request<Body> {
        let mut builder = Request::get(uri);
        if let Some(session) = session {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {session}"));
        }
        builder.body(Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn health_reports_storage_backend() {
        let harness = harness();
        let response = harness
            .app
            .oneshot(get("/health", None))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["storage"], "in-memory");
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let harness = harness();
        let response = harness
            .app
            .clone()
            .oneshot(get("/ready", None))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        harness
            .readiness
            .store(true, std::sync::atomic::Ordering::Release);
        let response = harness
            .app
            .oneshot(get("/ready", None))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_are_plain_text() {
        let harness = harness();
        let response = harness
            .app
            .oneshot(get("/metrics", None))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some("text/plain; version=0.0.4".as_bytes())
        );
    }

    #[tokio::test]
    async fn dashboard_summarizes_latest_activity() {
        let harness = harness();
        let ada = UserId("ada".to_string());

        let answers = AnswerSet::new()
            .with(Question::Noise, "Very distressed")
            .with(Question::Lights, "Very sensitive")
            .with(Question::Textures, "Selective");
        harness
            .assessments
            .analyze(
                answers,
                Respondent {
                    owner: Some(ada.clone()),
                    ..Respondent::default()
                },
                Utc::now(),
            )
            .expect("analysis succeeds");
        harness
            .progress
            .record(
                &ada,
                ProgressSubmission {
                    mood: Some("Calm".to_string()),
                    ..ProgressSubmission::default()
                },
            )
            .expect("progress recorded");

        let response = harness
            .app
            .oneshot(get("/api/dashboard", Some("tok-ada")))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["user"], "ada");
        assert_eq!(payload["needs_level"], "Mild");
        assert_eq!(payload["current_streak"], 1);
        assert_eq!(payload["last_mood"], "Calm");
        assert_eq!(payload["last_mood_score"], 4);
    }

    #[tokio::test]
    async fn dashboard_requires_session() {
        let harness = harness();
        let response = harness
            .app
            .oneshot(get("/api/dashboard", None))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn module_routes_are_mounted() {
        let harness = harness();
        let response = harness
            .app
            .oneshot(get("/api/questionnaire", None))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
