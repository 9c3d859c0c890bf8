//! Fetch, parse and fold the weekly schedule sheet.

use crate::csv::{parse_csv, RawRow};
use crate::schedule::{fold_schedule, WeekSchedule};
use crate::source::CsvSource;
use crate::IngestResult;

/// Result of one successful ingestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestedSchedule {
    /// Every parsed row, including rows the fold skipped.
    pub rows: Vec<RawRow>,
    pub schedule: WeekSchedule,
}

/// Parses CSV text and folds it for `quarter` (empty means every quarter).
pub fn ingest_text(text: &str, quarter: &str) -> IngestedSchedule {
    let rows = parse_csv(text);
    let schedule = fold_schedule(&rows, Some(quarter));
    IngestedSchedule { rows, schedule }
}

/// Builds the weekly schedule from one sheet of an upstream source.
///
/// Holds no state between calls; every `ingest` fetches and folds afresh.
#[derive(Clone, Debug)]
pub struct ScheduleIngestor<S> {
    source: S,
    sheet: String,
}

impl<S: CsvSource> ScheduleIngestor<S> {
    pub fn new(source: S, sheet: impl Into<String>) -> Self {
        Self {
            source,
            sheet: sheet.into(),
        }
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Fetches the sheet and folds it for `quarter`.
    ///
    /// # Errors
    /// Returns the source's error if the fetch fails. Row content never causes an error.
    pub async fn ingest(&self, quarter: &str) -> IngestResult<IngestedSchedule> {
        let text = self.source.fetch_csv(&self.sheet).await?;
        let ingested = ingest_text(&text, quarter);
        tracing::info!(
            sheet = %self.sheet,
            quarter,
            rows = ingested.rows.len(),
            "ingested schedule sheet"
        );
        Ok(ingested)
    }
}
