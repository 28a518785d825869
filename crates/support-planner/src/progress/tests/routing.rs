use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::progress::domain::ProgressSubmission;
use crate::progress::router::{progress_router, record_handler, ProgressRoutes};
use crate::progress::service::ProgressService;
use crate::progress::streak::StreakPolicy;

fn router() -> axum::Router {
    let (service, _) = build_service(StreakPolicy::default());
    progress_router(Arc::new(service), Arc::new(SingleSession))
}

fn post(body: serde_json::Value, session: Option<&str>) -> Request<Body> {
    let mut builder =
        Request::post("/api/progress").header(header::CONTENT_TYPE, "application/json");
    if let Some(session) = session {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {session}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("encode")))
        .expect("request")
}

fn get(session: &str) -> Request<Body> {
    Request::get("/api/progress")
        .header(header::AUTHORIZATION, format!("Bearer {session}"))
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn record_route_returns_created_entry_with_mood_score() {
    let response = router()
        .oneshot(post(
            json!({ "mood": "Happy", "activities": ["Swing"], "notes": "Good day" }),
            Some(SESSION),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["success"], true);
    assert_eq!(payload["entry"]["mood"], "Happy");
    assert_eq!(payload["entry"]["mood_score"], 5);
    assert_eq!(payload["entry"]["streak"], 1);
    assert_eq!(payload["entry"]["user_id"], "sam");
}

#[tokio::test]
async fn record_route_requires_session_and_mood() {
    let router = router();

    let response = router
        .clone()
        .oneshot(post(json!({ "mood": "Happy" }), None))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = router
        .oneshot(post(json!({ "activities": ["Swing"] }), Some(SESSION)))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "mood is required");
}

#[tokio::test]
async fn history_route_lists_entries_with_current_streak() {
    let router = router();
    for mood in ["Sad", "Calm"] {
        let response = router
            .clone()
            .oneshot(post(json!({ "mood": mood }), Some(SESSION)))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router.oneshot(get(SESSION)).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["count"], 2);
    assert_eq!(payload["current_streak"], 1);
    assert_eq!(payload["progress"][0]["mood"], "Calm");
    assert_eq!(payload["progress"][0]["mood_score"], 4);
    assert_eq!(payload["progress"][1]["mood_score"], 2);
}

#[tokio::test]
async fn record_handler_returns_internal_error_on_storage_failure() {
    let routes = ProgressRoutes {
        service: Arc::new(ProgressService::new(
            Arc::new(UnavailableRepository),
            StreakPolicy::default(),
        )),
        sessions: Arc::new(SingleSession),
    };
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer session-sam"),
    );

    let response = record_handler::<UnavailableRepository>(
        State(routes),
        headers,
        axum::Json(ProgressSubmission {
            mood: Some("Happy".to_string()),
            ..ProgressSubmission::default()
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
