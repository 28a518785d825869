use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::assessment::answers::Question;
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::router::{
    analyze_handler, token_handler, AnalyzeRequest, AssessmentRoutes,
};
use crate::assessment::service::AssessmentService;

fn analyze_request(body: Value, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::post("/api/analyze").header(header::CONTENT_TYPE, "application/json");
    if let Some(session) = session {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {session}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).expect("encode body")))
        .expect("request")
}

fn authorized_get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(session) = session {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {session}"));
    }
    builder.body(Body::empty()).expect("request")
}

#[tokio::test]
async fn analyze_route_returns_bundle_and_token() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(analyze_request(
            json!({ "responses": paired_answers(), "userName": "Ada" }),
            None,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["success"], true);
    assert_eq!(payload["analysis"]["needs_level"], "Moderate");
    assert_eq!(payload["analysis"]["scores"]["sensory"], 4);
    assert_eq!(payload["recommendations"].as_array().map(Vec::len), Some(6));
    assert_eq!(payload["support_plan"]["focus_interest"], "Music");
    assert!(payload["daily_tip"].as_str().is_some());
    assert_eq!(payload["access_token"].as_str().map(str::len), Some(64));
    assert!(payload["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn analyze_route_accepts_answers_alias_and_rejects_empty() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(analyze_request(json!({ "answers": quiet_answers() }), None))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(analyze_request(json!({ "responses": {} }), None))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "no responses provided");
}

#[tokio::test]
async fn analyze_route_treats_null_answers_as_unanswered() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(analyze_request(
            json!({ "responses": { "noise": "Distressed", "lights": null } }),
            None,
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["analysis"]["scores"]["sensory"], 2);

    let records = repository.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].answers.get(Question::Lights), None);
}

#[tokio::test]
async fn analyze_route_rejects_unknown_sessions() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(analyze_request(
            json!({ "responses": paired_answers() }),
            Some("forged"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(repository.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn analyze_handler_returns_internal_error_on_repository_failure() {
    let routes = AssessmentRoutes {
        service: Arc::new(AssessmentService::new(
            Arc::new(UnavailableRepository),
            AssessmentEngine::default(),
        )),
        sessions: Arc::new(StaticSessions),
    };
    let request = AnalyzeRequest {
        responses: paired_answers(),
        user_name: None,
        user_email: None,
    };

    let response = analyze_handler::<UnavailableRepository>(
        State(routes),
        HeaderMap::new(),
        axum::Json(request),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn token_handler_returns_stored_record_or_not_found() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let record = service
        .analyze(
            paired_answers(),
            Default::default(),
            chrono::Utc::now(),
        )
        .expect("analysis succeeds");
    let routes = AssessmentRoutes {
        service: service.clone(),
        sessions: Arc::new(StaticSessions),
    };

    let response = token_handler::<MemoryRepository>(
        State(routes.clone()),
        Path(record.access_token.0.clone()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["assessment"]["access_token"], record.access_token.0);
    assert_eq!(payload["assessment"]["user_name"], "Anonymous");

    let response =
        token_handler::<MemoryRepository>(State(routes), Path("0".repeat(64))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn my_assessments_requires_a_session_and_lists_own_records() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    for session in [ADA_SESSION, ADA_SESSION, GRACE_SESSION] {
        let response = router
            .clone()
            .oneshot(analyze_request(
                json!({ "responses": quiet_answers() }),
                Some(session),
            ))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(authorized_get("/api/my-assessments", None))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = router
        .oneshot(authorized_get("/api/my-assessments", Some(ADA_SESSION)))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["count"], 2);
    assert_eq!(payload["assessments"][0]["needs_level"], "Low");
}

#[tokio::test]
async fn questionnaire_route_lists_sections() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(authorized_get("/api/questionnaire", None))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let sections = payload["sections"].as_array().expect("sections");
    assert_eq!(sections.len(), 6);
    assert_eq!(sections[1]["questions"][0]["id"], "eye_contact");
}
