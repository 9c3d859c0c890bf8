//! HTTP-level behaviour of the schedule endpoint, driven through the router without a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

use api_rest::{router, AppState, SCHEDULE_PATH};
use daycare_core::{CsvSource, IngestError, IngestResult, ScheduleIngestor, WeekSchedule};

const SHEET: &str = "週幾,時段,主題,活動名稱,季度\n\
週一,上午,懷舊音樂,音樂會,2024-Q4\n\
週三,下午,手工藝,摺紙,2024-Q4\n\
週五,上午,園藝,種花,2025-Q1\n";

struct FixtureSource(&'static str);

impl CsvSource for FixtureSource {
    async fn fetch_csv(&self, _sheet: &str) -> IngestResult<String> {
        Ok(self.0.to_string())
    }
}

struct UnreachableSource;

impl CsvSource for UnreachableSource {
    async fn fetch_csv(&self, _sheet: &str) -> IngestResult<String> {
        Err(IngestError::InvalidInput("connection refused".into()))
    }
}

struct SlowSource;

impl CsvSource for SlowSource {
    async fn fetch_csv(&self, _sheet: &str) -> IngestResult<String> {
        Err(IngestError::Timeout(Duration::from_secs(5)))
    }
}

fn app<S: CsvSource>(source: S) -> Router {
    router(AppState::new(ScheduleIngestor::new(source, "課程表")))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let resp = app.oneshot(req).await.expect("router is infallible");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
        .to_vec();
    (status, headers, body)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    let (status, _, body) = send(app, req).await;
    let value = serde_json::from_slice(&body).expect("json body");
    (status, value)
}

fn empty_schedule() -> Value {
    serde_json::to_value(WeekSchedule::empty()).expect("serialise")
}

#[tokio::test]
async fn schedule_for_quarter_fills_only_matching_slots() {
    let (status, body) = get_json(
        app(FixtureSource(SHEET)),
        &format!("{SCHEDULE_PATH}?quarter=2024-Q4"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["quarter"], "2024-Q4");
    assert_eq!(
        body["schedule"]["monday"]["am"],
        serde_json::json!({"topic": "懷舊音樂", "activityName": "音樂會", "materials": ""})
    );
    assert_eq!(
        body["schedule"]["wednesday"]["pm"],
        serde_json::json!({"topic": "手工藝", "activityName": "摺紙", "materials": ""})
    );
    assert_eq!(body["schedule"]["friday"]["am"], empty_schedule()["friday"]["am"]);
    assert_eq!(body["rawData"].as_array().map(Vec::len), Some(3));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn schedule_without_quarter_applies_every_row() {
    let (status, body) = get_json(app(FixtureSource(SHEET)), SCHEDULE_PATH).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["quarter"], "");
    assert_eq!(body["schedule"]["friday"]["am"]["topic"], "園藝");
    assert_eq!(body["schedule"]["monday"]["am"]["topic"], "懷舊音樂");
}

#[tokio::test]
async fn upstream_failure_degrades_to_empty_schedule_with_ok_status() {
    let (status, body) = get_json(
        app(UnreachableSource),
        &format!("{SCHEDULE_PATH}?quarter=2024-Q4"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["quarter"], "2024-Q4");
    assert_eq!(body["schedule"], empty_schedule());
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.contains("connection refused")));
    assert!(body.get("rawData").is_none());
}

#[tokio::test]
async fn upstream_timeout_degrades_to_empty_schedule() {
    let (status, body) = get_json(app(SlowSource), SCHEDULE_PATH).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["schedule"], empty_schedule());
    assert!(body["error"].as_str().is_some_and(|e| e.contains("timed out")));
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let req = Request::builder()
        .uri(SCHEDULE_PATH)
        .header(header::ORIGIN, "https://daycare.example")
        .body(Body::empty())
        .expect("request");
    let (status, headers, _) = send(app(FixtureSource(SHEET)), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_preflight_short_circuits_with_empty_body() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(SCHEDULE_PATH)
        .header(header::ORIGIN, "https://daycare.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .expect("request");
    let (status, headers, body) = send(app(UnreachableSource), req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn bare_options_request_returns_ok_without_body() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(SCHEDULE_PATH)
        .body(Body::empty())
        .expect("request");
    let (status, _, body) = send(app(UnreachableSource), req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn health_reports_alive() {
    let (status, body) = get_json(app(FixtureSource(SHEET)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn openapi_document_lists_schedule_path() {
    let doc = api_rest::openapi();
    assert!(doc.paths.paths.contains_key(SCHEDULE_PATH));
    assert!(doc.paths.paths.contains_key("/health"));
}
