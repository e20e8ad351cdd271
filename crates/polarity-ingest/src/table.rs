use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use polarity_model::ReviewRecord;

use crate::error::{IngestError, Result};

/// Column read when none is named on the command line.
pub const DEFAULT_REVIEW_COLUMN: &str = "review";

/// A review dataset read off disk: trimmed headers plus trimmed string rows.
#[derive(Debug, Clone)]
pub struct ReviewTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads the dataset, trimming cells and skipping fully-empty rows.
///
/// Short rows are tolerated; missing trailing cells surface as empty strings
/// at extraction.
pub fn read_review_table(path: &Path) -> Result<ReviewTable> {
    let csv_err = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    debug!(path = %path.display(), row_count = rows.len(), "read review table");
    Ok(ReviewTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}

/// Pulls the review column out of `table`, one record per row.
///
/// The column lookup is case-insensitive. A row with a missing or blank cell
/// yields an empty-string record, never an error; a dataset without the
/// column at all does fail.
pub fn extract_reviews(table: &ReviewTable, column: &str) -> Result<Vec<ReviewRecord>> {
    let wanted = column.trim();
    let col_idx = table
        .headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| IngestError::MissingColumn {
            column: wanted.to_string(),
            path: table.path.clone(),
        })?;
    Ok(table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let text = row.get(col_idx).map(String::as_str).unwrap_or("");
            ReviewRecord::new(index, text)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_and_trims_table() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "reviews.csv",
            "\u{feff}id, Review \n1,  Great product \n,,\n2,Bad one\n",
        );
        let table = read_review_table(&path).unwrap();
        assert_eq!(table.headers, vec!["id", "Review"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "Great product"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = read_review_table(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Csv { .. }), "got {err}");
    }

    #[test]
    fn extracts_column_case_insensitively() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "reviews.csv", "ID,REVIEW\n1,Loved it\n2,Hated it\n");
        let table = read_review_table(&path).unwrap();
        let records = extract_reviews(&table, "review").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ReviewRecord::new(0, "Loved it"));
        assert_eq!(records[1], ReviewRecord::new(1, "Hated it"));
    }

    #[test]
    fn blank_cells_coerce_to_empty_records() {
        let dir = TempDir::new().unwrap();
        // row 2 has a blank review cell, row 3 is missing it entirely
        let path = write_csv(&dir, "reviews.csv", "id,review\n1,Good\n2,\n3\n");
        let table = read_review_table(&path).unwrap();
        let records = extract_reviews(&table, "review").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text, "Good");
        assert_eq!(records[1].text, "");
        assert_eq!(records[2].text, "");
        assert!(records[1].is_empty());
    }

    #[test]
    fn absent_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "reviews.csv", "id,text\n1,hello\n");
        let table = read_review_table(&path).unwrap();
        let err = extract_reviews(&table, "review").unwrap_err();
        match err {
            IngestError::MissingColumn { column, .. } => assert_eq!(column, "review"),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }
}
