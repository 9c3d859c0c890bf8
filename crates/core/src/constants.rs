//! Constants used throughout the day-care core crate.
//!
//! Defaults for upstream access and environment variable names live here so the runner binary,
//! the CLI and the tests agree on them.

/// Default base URL for published spreadsheet documents.
pub const DEFAULT_SHEETS_CSV_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Default name of the sheet holding the weekly activity schedule.
pub const DEFAULT_SCHEDULE_SHEET: &str = "課程表";

/// Default bound on a single upstream CSV fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Environment variable holding the spreadsheet document identifier.
pub const ENV_SPREADSHEET_ID: &str = "SHEETS_SPREADSHEET_ID";

/// Environment variable overriding the schedule sheet name.
pub const ENV_SCHEDULE_SHEET: &str = "SHEETS_SCHEDULE_SHEET";

/// Environment variable overriding the spreadsheet base URL.
pub const ENV_CSV_BASE_URL: &str = "SHEETS_CSV_BASE_URL";

/// Environment variable overriding the fetch timeout.
pub const ENV_FETCH_TIMEOUT_SECS: &str = "SHEETS_FETCH_TIMEOUT_SECS";
