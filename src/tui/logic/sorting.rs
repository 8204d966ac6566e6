//! Column sorting over the user dataset.
//!
//! Sorting never mutates its input: `sort` and `activate` return a new,
//! stably ordered vector. Ties keep their input order in both directions.

use crate::model::UserRecord;
use crate::tui::logic::columns::{Column, SortValue};
use std::cmp::Ordering;

/// Currently active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub active: Option<Column>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            active: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// Arrow drawn next to `column`'s header, if it is the active one.
    pub fn indicator(&self, column: Column) -> Option<&'static str> {
        match self.active {
            Some(active) if active == column => Some(if self.ascending { "▲" } else { "▼" }),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self.active {
            Some(column) => format!(
                "{} {}",
                column.label(),
                if self.ascending { "↑" } else { "↓" }
            ),
            None => "unsorted".to_string(),
        }
    }
}

pub fn extract_value(record: &UserRecord, column: Column) -> SortValue {
    column.extract(record)
}

/// Orders two extracted values. Values of different kinds never occur in
/// one column and compare equal.
pub fn compare(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
        (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
        (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Returns `records` ordered by `column`. Stable in both directions: ties
/// keep their input order.
pub fn sort(records: &[UserRecord], column: Column, ascending: bool) -> Vec<UserRecord> {
    let mut keyed: Vec<(SortValue, &UserRecord)> = records
        .iter()
        .map(|record| (extract_value(record, column), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = compare(a, b);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });

    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Header activation: re-activating the active ascending column flips to
/// descending, anything else sorts ascending.
pub fn activate(
    records: &[UserRecord],
    state: SortState,
    column: Column,
) -> (Vec<UserRecord>, SortState) {
    let ascending = !(state.active == Some(column) && state.ascending);
    let new_state = SortState {
        active: Some(column),
        ascending,
    };
    (sort(records, column, ascending), new_state)
}

pub fn apply_sort(records: &mut Vec<UserRecord>, state: &mut SortState, column: Column) {
    let (ordered, new_state) = activate(records, *state, column);
    *records = ordered;
    *state = new_state;
}
