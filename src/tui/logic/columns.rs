use crate::model::UserRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

/// The fixed, ordered set of table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    Id,
    First,
    Last,
    Image,
    Phone,
    Address,
    City,
    State,
    Zip,
    MemberSince,
}

/// A value pulled out of a record for ordering purposes.
///
/// `None` in the numeric and date variants means the field was missing or
/// unparseable; it orders before every present value, the same way an empty
/// string orders first among texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortValue {
    Text(String),
    Number(Option<i64>),
    Date(Option<DateTime<Utc>>),
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Id,
        Column::First,
        Column::Last,
        Column::Image,
        Column::Phone,
        Column::Address,
        Column::City,
        Column::State,
        Column::Zip,
        Column::MemberSince,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::First => "FIRST",
            Column::Last => "LAST",
            Column::Image => "IMAGE",
            Column::Phone => "PHONE",
            Column::Address => "ADDRESS",
            Column::City => "CITY",
            Column::State => "STATE",
            Column::Zip => "ZIP",
            Column::MemberSince => "MEMBER SINCE",
        }
    }

    /// Extraction rule for this column. Never fails on a deserialised record.
    ///
    /// PHONE orders by the `phone` field even though the cell shows `cell`.
    pub fn extract(self, record: &UserRecord) -> SortValue {
        match self {
            Column::Id => SortValue::Text(record.id.value.clone().unwrap_or_default()),
            Column::First => SortValue::Text(record.name.first.clone()),
            Column::Last => SortValue::Text(record.name.last.clone()),
            Column::Image => SortValue::Text(record.picture.thumbnail.clone()),
            Column::Phone => SortValue::Text(record.phone.clone()),
            Column::Address => SortValue::Number(record.location.street.number),
            Column::City => SortValue::Text(record.location.city.clone()),
            Column::State => SortValue::Text(record.location.state.clone()),
            Column::Zip => SortValue::Text(record.location.postcode.clone()),
            Column::MemberSince => SortValue::Date(record.registered.parsed_date()),
        }
    }

    /// Text shown in the cell for `record`, which sits at 0-based `row`.
    pub fn cell(self, record: &UserRecord, row: usize, date_format: &str) -> String {
        match self {
            Column::Id => (row + 1).to_string(),
            Column::First => record.name.first.clone(),
            Column::Last => record.name.last.clone(),
            Column::Image => thumbnail_name(&record.picture.thumbnail).to_string(),
            Column::Phone => record.cell.replacen('-', " ", 1),
            Column::Address => {
                let street = &record.location.street;
                match street.number {
                    Some(number) => format!("{} {}", number, street.name),
                    None => street.name.clone(),
                }
            }
            Column::City => record.location.city.clone(),
            Column::State => record.location.state.clone(),
            Column::Zip => record.location.postcode.clone(),
            Column::MemberSince => record
                .registered
                .parsed_date()
                .map(|d| format_date(d, date_format))
                .unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Column {
    type Err = String;

    /// Accepts a 0-based index, the display label, or the kebab-case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index).ok_or_else(|| {
                format!(
                    "column index {} out of range (0-{})",
                    index,
                    Self::ALL.len() - 1
                )
            });
        }

        let wanted = s.to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown column: {}", s))
    }
}

// a bad user-supplied format falls back to ISO dates instead of panicking
fn format_date(date: DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

fn thumbnail_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
