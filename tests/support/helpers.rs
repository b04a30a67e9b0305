// tests/support/helpers.rs
use super::mocks::FixedClock;
use article_filters::application::{ports::time::Clock, services::ApplicationServices};
use article_filters::domain::article::{ArticleReadRepository, CategoryResolver};
use article_filters::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TEST_YEAR: i32 = 2026;

pub fn build_services(
    repo: Arc<dyn ArticleReadRepository>,
    resolver: CategoryResolver,
) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::in_year(TEST_YEAR));
    ApplicationServices::new(repo, resolver, clock)
}

pub fn make_test_router(repo: Arc<dyn ArticleReadRepository>) -> axum::Router {
    let services = Arc::new(build_services(repo, CategoryResolver::default()));
    build_router(HttpState { services }, &[])
}

/// Issues a GET and returns the status with the decoded JSON body.
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Article ids of a JSON list response, in response order.
pub fn ids_of(json: &Value) -> Vec<i64> {
    json.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}
