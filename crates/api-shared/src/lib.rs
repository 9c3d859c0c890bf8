//! # API Shared
//!
//! Shared definitions for the day-care schedule APIs.
//!
//! Contains:
//! - Response envelopes (`ScheduleRes`, `HealthRes`)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `daycare` CLI so both emit the same JSON.

pub mod health;
pub mod schedule;

pub use health::{HealthRes, HealthService};
pub use schedule::{ScheduleQuery, ScheduleRes, SCHEDULE_UNAVAILABLE_MESSAGE};
