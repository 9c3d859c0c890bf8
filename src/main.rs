use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router, serve};
use daycare_core::{CoreConfig, ScheduleIngestor, SheetsCsvSource};

/// Main entry point for the day-care schedule service
///
/// Resolves configuration once, then serves the REST API (schedule endpoint, health check and
/// Swagger UI).
///
/// # Environment Variables
/// - `DAYCARE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `SHEETS_SPREADSHEET_ID`: Spreadsheet document holding the schedule sheet (required)
/// - `SHEETS_SCHEDULE_SHEET`: Sheet name (default: "課程表")
/// - `SHEETS_CSV_BASE_URL`: Spreadsheet base URL (default: the public endpoint)
/// - `SHEETS_FETCH_TIMEOUT_SECS`: Bound on each upstream fetch (default: 5)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("daycare_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("daycare_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("DAYCARE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = CoreConfig::from_env()?;
    tracing::info!(
        "++ Schedule sheet {:?} of document {} (timeout {:?})",
        cfg.schedule_sheet(),
        cfg.spreadsheet_id(),
        cfg.fetch_timeout()
    );

    let sheet = cfg.schedule_sheet().to_string();
    let source = SheetsCsvSource::new(cfg)?;
    let app = router(AppState::new(ScheduleIngestor::new(source, sheet)));

    tracing::info!("++ Starting day-care REST on {}", rest_addr);
    serve(&rest_addr, app).await?;

    Ok(())
}
