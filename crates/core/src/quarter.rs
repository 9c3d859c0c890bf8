//! Reporting quarter labels of the form `<year>-Q<n>`.
//!
//! The schedule endpoint treats quarters as opaque labels; these helpers only produce the
//! convention the rest of the center's tooling uses.

use chrono::{Datelike, Local, NaiveDate};

/// Label for the quarter containing `date`, e.g. `2024-Q4` for any day in October 2024.
pub fn quarter_label(date: NaiveDate) -> String {
    let quarter = (date.month0() / 3) + 1;
    format!("{}-Q{}", date.year(), quarter)
}

/// Label for the current quarter in local time.
pub fn current_quarter_label() -> String {
    quarter_label(Local::now().date_naive())
}
