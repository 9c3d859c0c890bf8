//! # API REST
//!
//! REST API implementation for the day-care schedule service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for the response envelopes and `daycare-core` for ingestion.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{HealthRes, HealthService, ScheduleQuery, ScheduleRes};
use daycare_core::{CsvSource, DayPlan, ScheduleIngestor, ScheduleSlot, WeekSchedule};

/// Route serving the weekly schedule.
pub const SCHEDULE_PATH: &str = "/api/sheets-schedule";

/// Application state for the REST API server
///
/// Holds the schedule ingestor. It carries no per-request state, so handlers share it freely.
pub struct AppState<S> {
    ingestor: Arc<ScheduleIngestor<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            ingestor: self.ingestor.clone(),
        }
    }
}

impl<S: CsvSource> AppState<S> {
    pub fn new(ingestor: ScheduleIngestor<S>) -> Self {
        Self {
            ingestor: Arc::new(ingestor),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, get_schedule),
    components(schemas(HealthRes, ScheduleRes, WeekSchedule, DayPlan, ScheduleSlot))
)]
struct ApiDoc;

/// OpenAPI document for the REST API.
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Builds the REST router with open CORS and Swagger UI mounted.
pub fn router<S: CsvSource>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(SCHEDULE_PATH, get(get_schedule::<S>).options(preflight))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `addr` and serves `app` until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, app: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Serving day-care REST API on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/sheets-schedule",
    params(ScheduleQuery),
    responses(
        (status = 200, description = "Weekly schedule, or an empty schedule with success=false when the sheet is unavailable", body = ScheduleRes)
    )
)]
/// Weekly schedule for a quarter
///
/// Fetches the schedule sheet, parses it and folds it into the Monday to Friday grid.
///
/// # Returns
/// Always `200 OK`. Upstream failures produce `success: false` with an all-empty schedule and
/// the failure detail in `error`.
async fn get_schedule<S: CsvSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<ScheduleQuery>,
) -> Json<ScheduleRes> {
    let quarter = query.quarter;
    let outcome = state.ingestor.ingest(&quarter).await;
    if let Err(e) = &outcome {
        tracing::warn!(quarter = %quarter, "Schedule unavailable, returning empty schedule: {}", e);
    }
    Json(ScheduleRes::from_outcome(quarter, outcome))
}

/// Answers bare `OPTIONS` requests; CORS preflights are answered by the CORS layer.
async fn preflight() -> StatusCode {
    StatusCode::OK
}
