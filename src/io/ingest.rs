//! CSV ingest into an in-memory table.
//!
//! Both feeds are read in one blocking pass and held fully in memory. This
//! module only cares about structure (header, record widths); deciding which
//! cells are usable rates is left to `extract`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;

use crate::domain::RawCell;
use crate::error::PipelineError;

/// A parsed CSV file: trimmed header names plus raw string records.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    header_map: HashMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Parse CSV text from any reader.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(rdr);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| PipelineError::MalformedInput {
                message: format!("Failed to read CSV headers: {e}"),
                source: Some(e),
            })?
            .iter()
            .map(normalize_header_name)
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(PipelineError::malformed("CSV file is empty or malformed: no header row found"));
        }

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            // records() starts after the header, lines are 1-based
            let line = idx + 2;
            let record = result.map_err(|e| PipelineError::MalformedInput {
                message: format!("Failed to parse CSV file at line {line}: {e}"),
                source: Some(e),
            })?;
            if record.len() > headers.len() {
                return Err(PipelineError::malformed(format!(
                    "Failed to parse CSV file: expected {} fields in line {line}, saw {}",
                    headers.len(),
                    record.len()
                )));
            }
            rows.push(record);
        }

        // First occurrence wins for duplicated header names.
        let mut header_map = HashMap::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            header_map.entry(name.clone()).or_insert(idx);
        }

        Ok(Self {
            headers,
            header_map,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Column index for an exact (case-sensitive) header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.header_map.get(name).copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trimmed, unquoted text of a cell. Short records read as empty.
    pub fn text(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(strip_quotes)
            .unwrap_or("")
    }

    pub fn cell(&self, row: usize, column: usize) -> RawCell {
        RawCell::parse(self.text(row, column))
    }
}

/// Read a whole CSV file into a [`Table`].
///
/// `what` names the source in error messages (e.g. "Daily rates file").
pub fn load_table(path: &Path, what: &str) -> Result<Table, PipelineError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PipelineError::NotFound {
            what: what.to_string(),
            paths: vec![path.to_path_buf()],
            source: Some(e),
        },
        _ => PipelineError::malformed(format!("Failed to open {what} '{}': {e}", path.display())),
    })?;
    Table::from_reader(file)
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    strip_quotes(name.trim_start_matches('\u{feff}')).to_string()
}

/// Trim, then drop one pair of surrounding double quotes.
///
/// The csv reader only honours a quote at the first byte of a field, so
/// `1.1, "1.5"` yields the literal `"1.5"` for the second field.
fn strip_quotes(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reads_header_and_trims_values() {
        let table = Table::from_reader("\u{feff}Date, USD, JPY, \n2024-01-02, 1.0850 , 157.30, \n".as_bytes()).unwrap();
        assert_eq!(table.headers(), &["Date", "USD", "JPY", ""]);
        assert_eq!(table.column("USD"), Some(1));
        assert_eq!(table.column("usd"), None);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.text(0, 1), "1.0850");
        assert_eq!(table.cell(0, 2), RawCell::Numeric(157.3));
    }

    #[test]
    fn short_records_read_as_empty() {
        let table = Table::from_reader("USD,SEK\n1.1\n".as_bytes()).unwrap();
        assert_eq!(table.cell(0, 1), RawCell::Empty);
    }

    #[test]
    fn long_records_are_malformed() {
        let err = Table::from_reader("USD,SEK\n1.1,2.2,3.3\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = Table::from_reader("".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn header_only_is_an_empty_table() {
        let table = Table::from_reader("USD,SEK\n".as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn quoted_values_after_whitespace_are_unquoted() {
        let table = Table::from_reader("USD, \"SEK\"\n1.1, \"1.5\"\n".as_bytes()).unwrap();
        assert_eq!(table.column("SEK"), Some(1));
        assert_eq!(table.cell(0, 0), RawCell::Numeric(1.1));
        assert_eq!(table.cell(0, 1), RawCell::Numeric(1.5));
    }

    #[test]
    fn lone_quote_is_kept() {
        let table = Table::from_reader("USD\n \"1.5\n".as_bytes()).unwrap();
        assert_eq!(table.text(0, 0), "\"1.5");
    }

    #[test]
    fn unopenable_file_is_not_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        // A path below a regular file fails to open with "not a directory".
        let err = load_table(&file.join("rates.csv"), "Daily rates file").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("Failed to open Daily rates file"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_table(Path::new("definitely/not/here.csv"), "Daily rates file").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
