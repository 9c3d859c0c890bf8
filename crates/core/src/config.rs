//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Request handling never reads process-wide environment variables.

use crate::constants::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_SCHEDULE_SHEET, DEFAULT_SHEETS_CSV_BASE_URL,
    ENV_CSV_BASE_URL, ENV_FETCH_TIMEOUT_SECS, ENV_SCHEDULE_SHEET, ENV_SPREADSHEET_ID,
};
use crate::{IngestError, IngestResult};
use std::time::Duration;
use url::Url;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    spreadsheet_id: String,
    schedule_sheet: String,
    csv_base_url: Url,
    fetch_timeout: Duration,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        spreadsheet_id: String,
        schedule_sheet: String,
        csv_base_url: Url,
        fetch_timeout: Duration,
    ) -> IngestResult<Self> {
        let spreadsheet_id = spreadsheet_id.trim().to_string();
        if spreadsheet_id.is_empty() {
            return Err(IngestError::InvalidInput(
                "spreadsheet_id cannot be empty".into(),
            ));
        }
        if spreadsheet_id.contains('/') {
            return Err(IngestError::InvalidInput(
                "spreadsheet_id must be a bare document id, not a path".into(),
            ));
        }

        let schedule_sheet = schedule_sheet.trim().to_string();
        if schedule_sheet.is_empty() {
            return Err(IngestError::InvalidInput(
                "schedule_sheet cannot be empty".into(),
            ));
        }

        if fetch_timeout.is_zero() {
            return Err(IngestError::InvalidInput(
                "fetch_timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            spreadsheet_id,
            schedule_sheet,
            csv_base_url,
            fetch_timeout,
        })
    }

    /// Resolve configuration from the process environment.
    ///
    /// Only `SHEETS_SPREADSHEET_ID` is required; every other value has a default.
    pub fn from_env() -> IngestResult<Self> {
        let spreadsheet_id = std::env::var(ENV_SPREADSHEET_ID).map_err(|_| {
            IngestError::InvalidInput(format!("{ENV_SPREADSHEET_ID} must be set"))
        })?;
        let schedule_sheet = std::env::var(ENV_SCHEDULE_SHEET)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SCHEDULE_SHEET.into());
        let csv_base_url = csv_base_url_from_env_value(std::env::var(ENV_CSV_BASE_URL).ok())?;
        let fetch_timeout =
            fetch_timeout_from_env_value(std::env::var(ENV_FETCH_TIMEOUT_SECS).ok())?;

        Self::new(spreadsheet_id, schedule_sheet, csv_base_url, fetch_timeout)
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn schedule_sheet(&self) -> &str {
        &self.schedule_sheet
    }

    pub fn csv_base_url(&self) -> &Url {
        &self.csv_base_url
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// CSV export URL for one sheet of the configured document.
    ///
    /// Shape: `{base}/{spreadsheet_id}/gviz/tq?tqx=out:csv&sheet={sheet}`.
    pub fn sheet_csv_url(&self, sheet: &str) -> IngestResult<Url> {
        let mut base = self.csv_base_url.as_str().trim_end_matches('/').to_string();
        base.push('/');
        let mut url = Url::parse(&base)?.join(&format!("{}/gviz/tq", self.spreadsheet_id))?;
        url.query_pairs_mut()
            .append_pair("tqx", "out:csv")
            .append_pair("sheet", sheet);
        Ok(url)
    }
}

/// Parse the upstream base URL from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the public spreadsheet endpoint.
pub fn csv_base_url_from_env_value(value: Option<String>) -> IngestResult<Url> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let raw = value.as_deref().unwrap_or(DEFAULT_SHEETS_CSV_BASE_URL);
    Ok(Url::parse(raw)?)
}

/// Parse the fetch timeout (whole seconds) from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn fetch_timeout_from_env_value(value: Option<String>) -> IngestResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let secs = match value {
        Some(v) => v.parse::<u64>().map_err(|_| {
            IngestError::InvalidInput(format!(
                "{ENV_FETCH_TIMEOUT_SECS} must be a whole number of seconds, got {v:?}"
            ))
        })?,
        None => DEFAULT_FETCH_TIMEOUT_SECS,
    };
    if secs == 0 {
        return Err(IngestError::InvalidInput(format!(
            "{ENV_FETCH_TIMEOUT_SECS} must be greater than zero"
        )));
    }
    Ok(Duration::from_secs(secs))
}
