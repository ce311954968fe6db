//! Demo dataset and JSON row loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use ratatui::layout::Alignment;

use crate::ui::components::data_table::{Column, TableRow};
use crate::ui::components::select_field::SelectOption;
use crate::ui::components::sorting::CellValue;

pub struct Dataset {
    pub options: Vec<SelectOption>,
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
}

impl Dataset {
    /// Fruit options and a small people table, with enough value variety
    /// (numbers, booleans, dates, a few nulls) to exercise every sort
    /// rule from the keyboard.
    pub fn builtin() -> Self {
        let options = vec![
            SelectOption::new("apple", "Apple"),
            SelectOption::new("banana", "Banana"),
            SelectOption::new("cherry", "Cherry"),
            SelectOption::new("durian", "Durian").disabled(),
        ];
        let columns = vec![
            Column::new("name", "Name").sortable(),
            Column::new("age", "Age").sortable().align(Alignment::Right),
            Column::new("active", "Active")
                .sortable()
                .align(Alignment::Center),
            Column::new("joined", "Joined")
                .sortable()
                .render_with(|value, _| match value {
                    CellValue::DateTime(t) => t.format("%Y-%m-%d").to_string(),
                    other => other.display(),
                }),
        ];
        let rows = vec![
            TableRow::new()
                .cell("name", "Alice")
                .cell("age", 25)
                .cell("active", true)
                .cell("joined", date(2021, 3, 4)),
            TableRow::new()
                .cell("name", "Bob")
                .cell("age", 30)
                .cell("active", false)
                .cell("joined", date(2019, 11, 20)),
            TableRow::new()
                .cell("name", "Charlie")
                .cell("age", 35)
                .cell("active", true)
                .cell("joined", date(2022, 7, 1)),
            TableRow::new()
                .cell("name", "Dana")
                .cell("age", CellValue::Null)
                .cell("active", true)
                .cell("joined", date(2020, 5, 12)),
            TableRow::new()
                .cell("name", "Eve")
                .cell("age", 28)
                .cell("active", false),
        ];
        Self {
            options,
            columns,
            rows,
        }
    }
}

/// Loads table rows from a JSON array of flat objects. Strings in
/// RFC 3339 form become date-time cells; `null` and missing keys both
/// sort as absent.
pub fn load_rows(path: &Path) -> Result<Vec<TableRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let rows: Vec<TableRow> =
        serde_json::from_str(&text).context("expected a JSON array of row objects")?;
    tracing::info!(count = rows.len(), path = %path.display(), "loaded rows");
    Ok(rows)
}

fn date(year: i32, month: u32, day: u32) -> CellValue {
    CellValue::from(Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).single())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_dataset_has_options_columns_and_rows() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.options.len(), 4);
        assert!(dataset.options[3].disabled);
        assert_eq!(dataset.columns.len(), 4);
        assert!(dataset.columns.iter().all(|c| c.sortable));
        assert_eq!(dataset.rows.len(), 5);
    }

    #[test]
    fn load_rows_parses_scalars_dates_and_nulls() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Zed", "age": 41, "active": true, "joined": "2024-02-01T09:00:00Z"}},
                {{"name": "Ada", "age": null}}
            ]"#
        )
        .unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("age"), Some(&CellValue::Number(41.0)));
        assert_eq!(rows[0].get("active"), Some(&CellValue::Bool(true)));
        assert!(matches!(
            rows[0].get("joined"),
            Some(CellValue::DateTime(_))
        ));
        assert_eq!(rows[1].get("age"), Some(&CellValue::Null));
        assert_eq!(rows[1].get("active"), None);
    }

    #[test]
    fn load_rows_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(load_rows(file.path()).is_err());
    }

    #[test]
    fn load_rows_reports_missing_file() {
        let err = load_rows(Path::new("/nonexistent/rows.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
