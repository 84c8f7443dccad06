// End to end in memory tests through the full router: record events over HTTP and read them back.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::collections::HashSet;
use tower::ServiceExt;

use crate::modules::events::use_cases::record_event::latency::LatencyPolicy;
use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_event(body: impl Into<Body>) -> Request<Body> {
    Request::post("/events")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn get_event(id: &str) -> Request<Body> {
    Request::get(format!("/events/{id}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn records_and_reads_back_events() {
    let app = router(AppState::new(LatencyPolicy::Disabled));

    assert_eq!(
        send(&app, post_event(r#"{"a":1}"#)).await,
        (StatusCode::OK, json!({"id": 0}))
    );
    assert_eq!(
        send(&app, post_event(r#"{"b":2}"#)).await,
        (StatusCode::OK, json!({"id": 1}))
    );
    assert_eq!(
        send(&app, get_event("0")).await,
        (StatusCode::OK, json!({"a": 1}))
    );
    assert_eq!(
        send(&app, get_event("1")).await,
        (StatusCode::OK, json!({"b": 2}))
    );
    assert_eq!(
        send(&app, get_event("999")).await,
        (StatusCode::NOT_FOUND, json!({"error": "record doesn't exists"}))
    );

    let (status, body) = send(&app, get_event("abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn rejected_writes_do_not_consume_ids() {
    let app = router(AppState::new(LatencyPolicy::Disabled));

    let (status, _) = send(&app, post_event("{broken")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(
        send(&app, post_event("\"first\"")).await,
        (StatusCode::OK, json!({"id": 0}))
    );
}

#[tokio::test]
async fn records_bodies_larger_than_the_default_extractor_limit() {
    let app = router(AppState::new(LatencyPolicy::Disabled));
    let blob = "x".repeat(3 * 1024 * 1024);
    let payload = json!({ "blob": blob });

    assert_eq!(
        send(&app, post_event(payload.to_string())).await,
        (StatusCode::OK, json!({"id": 0}))
    );
    assert_eq!(send(&app, get_event("0")).await, (StatusCode::OK, payload));
}

#[tokio::test]
async fn unknown_routes_and_methods_are_not_served() {
    let app = router(AppState::new(LatencyPolicy::Disabled));

    let response = app
        .clone()
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_get_distinct_ids_and_are_all_readable() {
    let app = router(AppState::new(LatencyPolicy::Disabled));
    let writers = 64;

    let tasks: Vec<_> = (0..writers)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                let (status, body) = send(&app, post_event(json!({"n": n}).to_string())).await;
                assert_eq!(status, StatusCode::OK);
                (body["id"].as_u64().unwrap(), n)
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        let (id, n) = task.await.unwrap();
        assert!(ids.insert(id));
        assert_eq!(
            send(&app, get_event(&id.to_string())).await,
            (StatusCode::OK, json!({"n": n}))
        );
    }
    assert_eq!(ids, (0..writers as u64).collect::<HashSet<_>>());
}

#[tokio::test(start_paused = true)]
async fn simulated_latency_holds_only_the_delayed_writes() {
    let app = router(AppState::new(LatencyPolicy::ByIdentifier));

    for expected in 0..2 {
        let started = tokio::time::Instant::now();
        let (_, body) = send(&app, post_event("{}")).await;
        assert_eq!(body, json!({"id": expected}));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    let started = tokio::time::Instant::now();
    let (_, body) = send(&app, post_event("{}")).await;
    assert_eq!(body, json!({"id": 2}));
    assert!(started.elapsed() >= std::time::Duration::from_secs(2));
}
