//! # Day-care Core
//!
//! Core logic for the day-care center's weekly activity schedule.
//!
//! This crate contains the pure ingestion pipeline and its upstream access:
//! - CSV parsing of the published spreadsheet sheet
//! - Folding rows into a Monday to Friday, morning/afternoon schedule
//! - Fetching the sheet over HTTP with a bounded timeout
//!
//! **No API concerns**: HTTP servers, response envelopes and CORS belong in `api-rest` and
//! `api-shared`.

pub mod columns;
pub mod config;
pub mod constants;
pub mod csv;
pub mod error;
pub mod ingest;
pub mod quarter;
pub mod schedule;
pub mod source;

pub use config::CoreConfig;
pub use constants::DEFAULT_SCHEDULE_SHEET;
pub use csv::{parse_csv, RawRow};
pub use error::{IngestError, IngestResult};
pub use ingest::{ingest_text, IngestedSchedule, ScheduleIngestor};
pub use schedule::{fold_schedule, DayPlan, Period, ScheduleSlot, WeekSchedule, Weekday};
pub use source::{CsvSource, SheetsCsvSource};
