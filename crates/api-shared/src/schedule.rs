//! Wire envelope for the weekly schedule endpoint.
//!
//! Upstream failures are reported inside a successful response: `success: false` carries an
//! all-empty schedule, which the browser treats the same as a schedule nobody has filled in.

use daycare_core::{IngestError, IngestedSchedule, RawRow, WeekSchedule};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Message returned alongside the empty schedule when ingestion fails.
pub const SCHEDULE_UNAVAILABLE_MESSAGE: &str = "尚未設定課程表，使用空白課程表";

/// Query parameters accepted by the schedule endpoint.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleQuery {
    /// Quarter label such as `2024-Q4`. Empty or absent applies every row.
    #[serde(default)]
    pub quarter: String,
}

/// Schedule endpoint response.
///
/// Success: `{ success: true, quarter, schedule, rawData }`.
/// Degraded: `{ success: false, message, quarter, schedule, error }`.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRes {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub quarter: String,
    pub schedule: WeekSchedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub raw_data: Option<Vec<RawRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScheduleRes {
    pub fn ready(quarter: String, ingested: IngestedSchedule) -> Self {
        Self {
            success: true,
            message: None,
            quarter,
            schedule: ingested.schedule,
            raw_data: Some(ingested.rows),
            error: None,
        }
    }

    pub fn degraded(quarter: String, err: &IngestError) -> Self {
        Self {
            success: false,
            message: Some(SCHEDULE_UNAVAILABLE_MESSAGE.into()),
            quarter,
            schedule: WeekSchedule::empty(),
            raw_data: None,
            error: Some(err.to_string()),
        }
    }

    /// Wraps an ingestion outcome.
    pub fn from_outcome(
        quarter: String,
        outcome: daycare_core::IngestResult<IngestedSchedule>,
    ) -> Self {
        match outcome {
            Ok(ingested) => Self::ready(quarter, ingested),
            Err(err) => Self::degraded(quarter, &err),
        }
    }
}
