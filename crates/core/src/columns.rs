//! Logical schedule fields and the spreadsheet headers they may appear under.
//!
//! Staff edit the sheet by hand, so the same field shows up under a localized header in some
//! copies and an English one in others.

use crate::csv::RawRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Day,
    Period,
    Quarter,
    Topic,
    ActivityName,
    Materials,
}

impl Field {
    /// Header names tried for this field, in priority order.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            Field::Day => &["週幾", "星期", "day", "weekday"],
            Field::Period => &["時段", "時間", "period", "time"],
            Field::Quarter => &["季度", "季", "quarter"],
            Field::Topic => &["主題", "topic"],
            Field::ActivityName => &["活動名稱", "活動", "activityName", "activity"],
            Field::Materials => &["材料", "教材", "準備材料", "materials"],
        }
    }
}

/// Reads a field from a row.
///
/// The first candidate header with a non-blank value wins. Each candidate is matched exactly
/// first and then ignoring ASCII case, so `Day` and `DAY` also resolve. Returns the trimmed
/// value, or `""` when no candidate has one.
pub fn lookup(row: &RawRow, field: Field) -> &str {
    field
        .candidates()
        .iter()
        .filter_map(|header| {
            row.get(header)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| row.get_ignore_ascii_case(header))
        })
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_prefers_localized_header() {
        let row = RawRow::from_pairs([("主題", "懷舊音樂"), ("topic", "music")]);
        assert_eq!(lookup(&row, Field::Topic), "懷舊音樂");
    }

    #[test]
    fn test_lookup_falls_back_when_localized_value_is_blank() {
        let row = RawRow::from_pairs([("主題", "  "), ("topic", "music")]);
        assert_eq!(lookup(&row, Field::Topic), "music");
    }

    #[test]
    fn test_lookup_matches_english_headers_ignoring_case() {
        let row = RawRow::from_pairs([("Day", "Mon"), ("ActivityName", "Choir")]);
        assert_eq!(lookup(&row, Field::Day), "Mon");
        assert_eq!(lookup(&row, Field::ActivityName), "Choir");
    }

    #[test]
    fn test_lookup_missing_field_is_empty() {
        let row = RawRow::from_pairs([("週幾", "週一")]);
        assert_eq!(lookup(&row, Field::Materials), "");
    }
}
