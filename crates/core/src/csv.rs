//! CSV tokenizer for published spreadsheet exports.
//!
//! The export is split on `\n` only. A quoted cell that contains a newline is therefore split
//! into two lines; the spreadsheet this feeds from does not use multi-line cells.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One data line of a CSV document, keyed by the header row.
///
/// Keys keep header order. A repeated header name appears once, holding the value of the
/// right-most column with that name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    /// Builds a row from `(header, value)` pairs in column order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::default();
        for (key, value) in pairs {
            row.insert(key.into(), value.into());
        }
        row
    }

    fn insert(&mut self, key: String, value: String) {
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((key, value)),
        }
    }

    /// Value stored under an exact header name.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == header)
            .map(|(_, v)| v.as_str())
    }

    /// Value stored under a header name, ignoring ASCII case.
    pub fn get_ignore_ascii_case(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(header))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for RawRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (key, value) in &self.cells {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Parses CSV text into rows keyed by the first line.
///
/// Blank lines are skipped. Short lines are padded with empty strings and surplus fields are
/// dropped, so every row carries exactly one value per distinct header. Malformed quoting is
/// never an error: an unterminated quote swallows the rest of its line.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut lines = text.split('\n');

    let headers: Vec<String> = match lines.next() {
        Some(line) => split_line(line.trim_start_matches('\u{feff}'))
            .into_iter()
            .map(|cell| cell.trim().trim_matches('"').trim().to_string())
            .collect(),
        None => return Vec::new(),
    };

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let fields = split_line(line);
            RawRow::from_pairs(headers.iter().enumerate().map(|(idx, header)| {
                let value = fields.get(idx).map(|f| f.trim()).unwrap_or_default();
                (header.as_str(), value)
            }))
        })
        .collect()
}

/// Splits one line into raw (untrimmed) fields.
///
/// A `"` toggles quoted mode and is not kept. Commas only separate fields outside quotes.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}
