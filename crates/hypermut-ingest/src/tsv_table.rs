//! Tab-separated table reading and writing.
//!
//! Tables are kept as plain strings so columns this tool knows nothing about
//! survive a read/rewrite cycle untouched.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{IngestError, Result};

/// A tab-separated file held fully in memory.
///
/// Every row has exactly `headers.len()` cells; [`read_tsv_table`] pads short
/// records and drops cells beyond the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TsvTable {
    /// Position of `name` in the header row, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Returns the index of `name`, appending an empty column when absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
        width - 1
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Reads a tab-separated file with a single header row.
///
/// Blank lines are skipped. An empty file yields an empty table.
pub fn read_tsv_table(path: &Path) -> Result<TsvTable> {
    let table_read = |source| IngestError::TableRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(table_read)?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(table_read)?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(normalize_cell).collect());
            }
            Some(headers) => {
                let mut row = Vec::with_capacity(headers.len());
                for idx in 0..headers.len() {
                    row.push(normalize_cell(record.get(idx).unwrap_or("")));
                }
                rows.push(row);
            }
        }
    }

    Ok(TsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

/// Writes the table back as tab-separated text, header row first, no index
/// column.
pub fn write_tsv_table(path: &Path, table: &TsvTable) -> Result<()> {
    let table_write = |source: csv::Error| IngestError::TableWrite {
        path: path.to_path_buf(),
        source,
    };

    if table.is_empty() {
        return std::fs::write(path, "").map_err(|source| IngestError::TableWrite {
            path: path.to_path_buf(),
            source: source.into(),
        });
    }

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(table_write)?;
    writer.write_record(&table.headers).map_err(table_write)?;
    for row in &table.rows {
        writer.write_record(row).map_err(table_write)?;
    }
    writer
        .flush()
        .map_err(|source| IngestError::TableWrite {
            path: path.to_path_buf(),
            source: source.into(),
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.tsv");
        std::fs::write(&path, "A\tB\tC\n1\t2\t3\nx\ty\tz\n").unwrap();

        let table = read_tsv_table(&path).unwrap();

        assert_eq!(table.headers, vec!["A", "B", "C"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "2", "3"]);
    }

    #[test]
    fn pads_short_rows_and_drops_extra_cells() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.tsv");
        std::fs::write(&path, "A\tB\n1\nx\ty\tz\n").unwrap();

        let table = read_tsv_table(&path).unwrap();

        assert_eq!(table.rows[0], vec!["1", ""]);
        assert_eq!(table.rows[1], vec!["x", "y"]);
    }

    #[test]
    fn strips_bom_and_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bom.tsv");
        std::fs::write(&path, "\u{feff}A\t B \nv1\t v2 \n").unwrap();

        let table = read_tsv_table(&path).unwrap();

        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows[0], vec!["v1", "v2"]);
    }

    #[test]
    fn skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.tsv");
        std::fs::write(&path, "A\tB\n\n1\t2\n\t\n").unwrap();

        let table = read_tsv_table(&path).unwrap();

        assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.tsv");
        std::fs::write(&path, "").unwrap();

        let table = read_tsv_table(&path).unwrap();

        assert!(table.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn round_trips_unchanged_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.tsv");
        std::fs::write(&path, "A\tB\n1\t2\nx\ty\n").unwrap();

        let table = read_tsv_table(&path).unwrap();
        write_tsv_table(&path, &table).unwrap();

        assert_eq!(read_tsv_table(&path).unwrap(), table);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A\tB\n1\t2\nx\ty\n");
    }

    #[test]
    fn ensure_column_appends_once() {
        let mut table = TsvTable {
            headers: vec!["A".to_string()],
            rows: vec![vec!["1".to_string()], vec!["2".to_string()]],
        };

        let idx = table.ensure_column("B");
        assert_eq!(idx, 1);
        assert_eq!(table.rows[0], vec!["1", ""]);

        assert_eq!(table.ensure_column("B"), 1);
        assert_eq!(table.headers.len(), 2);
    }
}
