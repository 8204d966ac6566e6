use crate::model::UserRecord;
use crate::tui::logic::{Column, SortState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub from_cache: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortInfo>,
    pub total: usize,
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortInfo {
    pub column: Column,
    pub index: usize,
    pub label: String,
    pub ascending: bool,
}

/// A record together with the cell text the table shows for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRow {
    pub position: usize,
    pub cells: Vec<String>,
    pub record: UserRecord,
}

impl ListResult {
    pub fn new(
        records: &[UserRecord],
        sort_state: SortState,
        from_cache: bool,
        date_format: &str,
    ) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| ListRow {
                position: i + 1,
                cells: Column::ALL
                    .iter()
                    .map(|c| c.cell(record, i, date_format))
                    .collect(),
                record: record.clone(),
            })
            .collect();

        let sort = sort_state.active.map(|column| SortInfo {
            column,
            index: column.index(),
            label: column.label().to_string(),
            ascending: sort_state.ascending,
        });

        Self {
            version: "1.0".to_string(),
            timestamp: Utc::now(),
            from_cache,
            sort,
            total: records.len(),
            rows,
        }
    }

    /// Plain-text table with space-padded columns.
    pub fn to_human(&self) -> String {
        let headers: Vec<String> = Column::ALL.iter().map(|c| c.label().to_string()).collect();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(&row.cells) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let format_line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&format_line(&headers[..]));
        out.push('\n');

        if self.rows.is_empty() {
            out.push_str("No data available. Please try again later.\n");
            return out;
        }

        for row in &self.rows {
            out.push_str(&format_line(&row.cells[..]));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::logic::sort;

    fn records() -> Vec<UserRecord> {
        ["Cleo", "Abe", "Bea"]
            .iter()
            .map(|n| {
                let mut r = UserRecord::default();
                r.name.first = n.to_string();
                r
            })
            .collect()
    }

    #[test]
    fn test_rows_follow_given_order() {
        let sorted = sort(&records(), Column::First, true);
        let result = ListResult::new(
            &sorted,
            SortState {
                active: Some(Column::First),
                ascending: true,
            },
            false,
            "%m/%d/%Y",
        );

        assert_eq!(result.total, 3);
        let firsts: Vec<_> = result.rows.iter().map(|r| r.cells[1].as_str()).collect();
        assert_eq!(firsts, vec!["Abe", "Bea", "Cleo"]);
        assert_eq!(result.rows[0].cells[0], "1");
        assert_eq!(result.sort.as_ref().map(|s| s.column), Some(Column::First));
    }

    #[test]
    fn test_json_shape() {
        let result = ListResult::new(&records(), SortState::default(), true, "%Y");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("sort").is_none());
        assert_eq!(json["from_cache"], true);
        assert_eq!(json["rows"][0]["record"]["name"]["first"], "Cleo");
    }

    #[test]
    fn test_human_empty() {
        let result = ListResult::new(&[], SortState::default(), false, "%Y");
        let text = result.to_human();
        assert!(text.starts_with("ID"));
        assert!(text.contains("No data available"));
    }
}
