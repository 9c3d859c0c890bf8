//! Weekly activity schedule and the fold from spreadsheet rows into it.
//!
//! The schedule is a fixed grid of five weekdays by two periods. Rows that cannot be placed on
//! the grid (unknown day, weekend, unknown period, other quarter) are dropped without error.

use serde::Serialize;
use utoipa::ToSchema;

use crate::columns::{lookup, Field};
use crate::csv::RawRow;

/// One activity slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub topic: String,
    pub activity_name: String,
    pub materials: String,
}

impl ScheduleSlot {
    fn from_row(row: &RawRow) -> Self {
        Self {
            topic: lookup(row, Field::Topic).to_owned(),
            activity_name: lookup(row, Field::ActivityName).to_owned(),
            materials: lookup(row, Field::Materials).to_owned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topic.is_empty() && self.activity_name.is_empty() && self.materials.is_empty()
    }
}

/// Morning and afternoon slots of one weekday.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DayPlan {
    pub am: ScheduleSlot,
    pub pm: ScheduleSlot,
}

impl DayPlan {
    pub fn slot(&self, period: Period) -> &ScheduleSlot {
        match period {
            Period::Am => &self.am,
            Period::Pm => &self.pm,
        }
    }

    fn slot_mut(&mut self, period: Period) -> &mut ScheduleSlot {
        match period {
            Period::Am => &mut self.am,
            Period::Pm => &mut self.pm,
        }
    }
}

/// The Monday to Friday schedule. Weekends have no representation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct WeekSchedule {
    pub monday: DayPlan,
    pub tuesday: DayPlan,
    pub wednesday: DayPlan,
    pub thursday: DayPlan,
    pub friday: DayPlan,
}

impl WeekSchedule {
    /// A schedule with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn day(&self, weekday: Weekday) -> &DayPlan {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
        }
    }

    fn day_mut(&mut self, weekday: Weekday) -> &mut DayPlan {
        match weekday {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
        }
    }

    pub fn slot(&self, weekday: Weekday, period: Period) -> &ScheduleSlot {
        self.day(weekday).slot(period)
    }

    /// Replaces a slot wholesale.
    pub fn set(&mut self, weekday: Weekday, period: Period, slot: ScheduleSlot) {
        *self.day_mut(weekday).slot_mut(period) = slot;
    }

    /// Iterates all ten slots, Monday morning first.
    pub fn slots(&self) -> impl Iterator<Item = (Weekday, Period, &ScheduleSlot)> {
        Weekday::ALL.into_iter().flat_map(move |weekday| {
            Period::ALL
                .into_iter()
                .map(move |period| (weekday, period, self.slot(weekday, period)))
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Resolves a hand-typed day value. Weekend and unknown spellings give `None`.
    pub fn from_synonym(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        let weekday = match value.as_str() {
            "週一" | "周一" | "星期一" | "禮拜一" | "礼拜一" | "一" | "monday" | "mon" => {
                Weekday::Monday
            }
            "週二" | "周二" | "星期二" | "禮拜二" | "礼拜二" | "二" | "tuesday" | "tue"
            | "tues" => Weekday::Tuesday,
            "週三" | "周三" | "星期三" | "禮拜三" | "礼拜三" | "三" | "wednesday" | "wed" => {
                Weekday::Wednesday
            }
            "週四" | "周四" | "星期四" | "禮拜四" | "礼拜四" | "四" | "thursday" | "thu"
            | "thur" | "thurs" => Weekday::Thursday,
            "週五" | "周五" | "星期五" | "禮拜五" | "礼拜五" | "五" | "friday" | "fri" => {
                Weekday::Friday
            }
            _ => return None,
        };
        Some(weekday)
    }

    pub fn key(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Am, Period::Pm];

    /// Resolves a hand-typed period value. Unknown spellings give `None`.
    pub fn from_synonym(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "上午" | "早上" | "早" | "am" | "a.m." | "morning" => Some(Period::Am),
            "下午" | "午後" | "pm" | "p.m." | "pp" | "afternoon" => Some(Period::Pm),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Period::Am => "am",
            Period::Pm => "pm",
        }
    }
}

/// Folds spreadsheet rows into a weekly schedule.
///
/// With a non-empty `quarter`, rows tagged with a different quarter are skipped; untagged rows
/// apply to every quarter. Rows are applied in order and a later row replaces an earlier one
/// targeting the same slot.
pub fn fold_schedule(rows: &[RawRow], quarter: Option<&str>) -> WeekSchedule {
    let quarter = quarter.map(str::trim).filter(|q| !q.is_empty());
    let mut schedule = WeekSchedule::empty();

    for (idx, row) in rows.iter().enumerate() {
        let row_quarter = lookup(row, Field::Quarter);
        if let Some(wanted) = quarter {
            if !row_quarter.is_empty() && row_quarter != wanted {
                tracing::debug!(row = idx, row_quarter, wanted, "skipping row for other quarter");
                continue;
            }
        }

        let day = lookup(row, Field::Day);
        let Some(weekday) = Weekday::from_synonym(day) else {
            tracing::debug!(row = idx, day, "skipping row with unrecognised day");
            continue;
        };

        let period_value = lookup(row, Field::Period);
        let Some(period) = Period::from_synonym(period_value) else {
            tracing::debug!(row = idx, period = period_value, "skipping row with unrecognised period");
            continue;
        };

        schedule.set(weekday, period, ScheduleSlot::from_row(row));
    }

    schedule
}
