//! Integration tests for the HTTP routes.
//!
//! The router is wired to stub ports and the in-memory store, so no external
//! tool or database is needed.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{test_app, StubExtractor};
use filta::domain::jobs::JobStatus;

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn home_returns_welcome() {
    let app = test_app(StubExtractor::succeeding());
    let response = app.router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "Welcome": "Filta Downloader" }));
}

#[tokio::test]
async fn analyse_returns_link_and_records_one_job() {
    let app = test_app(StubExtractor::succeeding());
    let response = app
        .router
        .oneshot(post_json(
            "/analyse",
            r#"{"url":"https://www.youtube.com/watch?v=abc"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["direct_link"], "https://cdn.example/clip.mp4");
    assert_eq!(body["duration"], "1:05");
    assert_eq!(body["filesize"], "5.00 MB");
    assert_eq!(body["extension"], "mp4");
    assert_eq!(body["message"], "Video link is ready");

    let jobs = app.store.jobs().await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, JobStatus::Success);
    assert_eq!(body["job_id"], jobs[0].job_id.as_str());
    assert_eq!(app.extractor.calls(), 1);
}

#[tokio::test]
async fn analyse_then_status_returns_recorded_job() {
    let app = test_app(StubExtractor::succeeding());
    let response = app
        .router
        .clone()
        .oneshot(post_json("/analyse", r#"{"url":"https://fb.watch/abc/"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let job_id = json_body(response).await["job_id"].as_str().unwrap().to_string();

    let response = app
        .router
        .oneshot(get(&format!("/status/{job_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["job_id"], job_id.as_str());
    assert_eq!(body["status"], "success");
    assert_eq!(body["url"], "https://fb.watch/abc/");
}

#[tokio::test]
async fn status_of_unknown_job_is_not_found() {
    let app = test_app(StubExtractor::succeeding());
    let response = app.router.oneshot(get("/status/job-0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({ "error": "Job not found" }));
}

#[tokio::test]
async fn analyse_rejects_malformed_bodies() {
    for body in ["not json", "{}", r#"{"url":""}"#, r#"{"url":42}"#] {
        let app = test_app(StubExtractor::succeeding());
        let response = app.router.oneshot(post_json("/analyse", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            json_body(response).await["error"],
            "Invalid request body. Expecting JSON with 'url'"
        );
        assert_eq!(app.extractor.calls(), 0);
        assert!(app.store.jobs().await.is_empty());
    }
}

#[tokio::test]
async fn analyse_rejects_relative_url_without_extraction() {
    let app = test_app(StubExtractor::succeeding());
    let response = app
        .router
        .oneshot(post_json("/analyse", r#"{"url":"watch?v=abc"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Failed to process video: job job-"), "{error}");
    assert_eq!(app.extractor.calls(), 0);
    assert!(app.store.jobs().await.is_empty());
}

#[tokio::test]
async fn analyse_surfaces_extraction_failure() {
    let app = test_app(StubExtractor::failing(
        "yt-dlp failed: exit status: 1\nDetails: ERROR: Unsupported URL",
    ));
    let response = app
        .router
        .oneshot(post_json("/analyse", r#"{"url":"https://example.com/page"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = json_body(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("Details: ERROR: Unsupported URL"), "{error}");
    assert!(app.store.jobs().await.is_empty());
}

#[tokio::test]
async fn register_then_login() {
    let app = test_app(StubExtractor::succeeding());
    let registration = r#"{
        "username": "ada",
        "password": "correct horse",
        "confirm_password": "correct horse",
        "email": "ada@example.com",
        "first_name": "Ada",
        "last_name": "Lovelace"
    }"#;

    let response = app
        .router
        .clone()
        .oneshot(post_json("/register", registration))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let user_id = json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .router
        .clone()
        .oneshot(post_json("/register", registration))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .router
        .clone()
        .oneshot(post_json(
            "/login",
            r#"{"email":"ada@example.com","password":"correct horse"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert!(!body["token"].as_str().unwrap().is_empty());

    let response = app
        .router
        .oneshot(post_json(
            "/login",
            r#"{"email":"ada@example.com","password":"wrong"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_rejects_mismatched_passwords() {
    let app = test_app(StubExtractor::succeeding());
    let response = app
        .router
        .oneshot(post_json(
            "/register",
            r#"{"password":"a","confirmPassword":"b","email":"x@y.z","firstName":"X","lastName":"Y"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Passwords do not match");
}

#[tokio::test]
async fn analyse_requires_json_content_type() {
    let app = test_app(StubExtractor::succeeding());
    let request = Request::builder()
        .method("POST")
        .uri("/analyse")
        .body(Body::from(r#"{"url":"https://www.youtube.com/watch?v=abc"}"#))
        .unwrap();
    let response = app.router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"],
        "Invalid request body. Expecting JSON with 'url'"
    );
    assert_eq!(app.extractor.calls(), 0);
}
