//! Dataset loader
//!
//! Reads a delimited file from disk and classifies every failure:
//! - path does not exist → NotFound
//! - zero bytes, ragged rows, bad header, non UTF-8 → Malformed
//! - header but no data rows → Empty
//! - anything else → Internal
//!
//! The loader never writes. Each call re-reads the file.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::observability::{log_event_with_fields, Event, ObservationScope};

use super::errors::{DatasetError, DatasetResult};
use super::record::Dataset;
use super::table::Table;

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Loads the student dataset from a fixed path
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
    delimiter: u8,
}

impl DatasetLoader {
    /// Create a loader for a comma-delimited file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Use a different single-byte delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Read the file into an untyped table
    pub fn load_table(&self) -> DatasetResult<Table> {
        let path_str = self.path.display().to_string();
        let scope = ObservationScope::with_fields("DATASET_READ", &[("path", &path_str)]);

        match self.read_table() {
            Ok(table) => {
                scope.complete_with_fields(&[
                    ("columns", &table.headers().len().to_string()),
                    ("rows", &table.row_count().to_string()),
                ]);
                Ok(table)
            }
            Err(e) => {
                scope.fail(e.code().code());
                Err(e)
            }
        }
    }

    fn read_table(&self) -> DatasetResult<Table> {
        if !self.path.exists() {
            return Err(DatasetError::not_found(&self.path));
        }

        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DatasetError::not_found(&self.path),
            _ => DatasetError::from(e).with_path(&self.path),
        })?;

        let table = parse_table(&bytes, self.delimiter).map_err(|e| e.with_path(&self.path))?;

        if table.is_empty() {
            return Err(DatasetError::empty(&self.path));
        }

        Ok(table)
    }

    /// Read the file and bind every row to a typed record
    pub fn load(&self) -> DatasetResult<Dataset> {
        let result = self
            .load_table()
            .and_then(|table| Dataset::from_table(&table, &self.path));

        let path_str = self.path.display().to_string();
        match &result {
            Ok(dataset) => log_event_with_fields(
                Event::DatasetLoaded,
                &[("path", &path_str), ("records", &dataset.len().to_string())],
            ),
            Err(e) => log_event_with_fields(
                Event::DatasetLoadFailed,
                &[("path", &path_str), ("code", e.code().code()), ("reason", e.message())],
            ),
        }

        result
    }
}

/// Parse delimited bytes with a header row into a [`Table`].
///
/// Does not reject a table with zero data rows; callers decide whether
/// that is an error.
pub fn parse_table(bytes: &[u8], delimiter: u8) -> DatasetResult<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(DatasetError::malformed("No columns to parse from file"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DatasetError::malformed(format!("Invalid header row: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    validate_headers(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| DatasetError::malformed(format!("Parse error: {}", e)))?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Table::from_raw(headers, rows))
}

fn validate_headers(headers: &[String]) -> DatasetResult<()> {
    if let Some(pos) = headers.iter().position(|h| h.is_empty()) {
        return Err(DatasetError::malformed(format!(
            "Blank column name at position {}",
            pos + 1
        )));
    }

    let mut seen = HashSet::new();
    for header in headers {
        if !seen.insert(header.as_str()) {
            return Err(DatasetError::malformed(format!(
                "Duplicate column name: {}",
                header
            )));
        }
    }

    Ok(())
}
