//! Comma-separated inventory files.
//!
//! ```text
//! # name,count
//! Sword,3
//! Shield,1
//!
//! # name,count,price
//! Bow,2,40
//! ```
//!
//! A line starting with `#` sets the column names for the lines after it.
//! Blank lines, and data lines seen before any header, are skipped.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};
use vetted_core::domain::OrderedMap;

/// Errors raised while reading an inventory file.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Cannot open inventory file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to read inventory line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("Line {line} has {found} values but the header has {expected} columns")]
    TooManyValues {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line} has no '{column}' column")]
    MissingColumn { line: usize, column: String },
}

/// One data line, keyed by header column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    #[serde(skip)]
    line: usize,
    #[serde(flatten)]
    fields: OrderedMap<String>,
}

impl InventoryRecord {
    /// 1-based line number in the source.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Like [`get`](Self::get), failing when the column is absent.
    pub fn require(&self, column: &str) -> Result<&str, InventoryError> {
        self.get(column).ok_or_else(|| InventoryError::MissingColumn {
            line: self.line,
            column: column.to_owned(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Lazily yields one [`InventoryRecord`] per data line.
pub struct InventoryReader<R> {
    input: R,
    header: Vec<String>,
    line: usize,
    buf: String,
}

impl InventoryReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InventoryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Inventory file opened");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> InventoryReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            header: Vec::new(),
            line: 0,
            buf: String::new(),
        }
    }

    /// Columns currently in effect.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    fn split(line: &str) -> impl Iterator<Item = String> + '_ {
        line.split(',').map(|cell| cell.trim().to_owned())
    }
}

impl<R: BufRead> Iterator for InventoryReader<R> {
    type Item = Result<InventoryRecord, InventoryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            self.line += 1;
            match self.input.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    return Some(Err(InventoryError::Read {
                        line: self.line,
                        source,
                    }));
                }
            }

            // Only a `#` in the first column starts a header.
            if let Some(columns) = self.buf.strip_prefix('#') {
                self.header = Self::split(columns.trim()).collect();
                trace!(line = self.line, columns = self.header.len(), "Header");
                continue;
            }

            let content = self.buf.trim();
            if content.is_empty() || self.header.is_empty() {
                continue;
            }

            let values: Vec<String> = Self::split(content).collect();
            if values.len() > self.header.len() {
                return Some(Err(InventoryError::TooManyValues {
                    line: self.line,
                    expected: self.header.len(),
                    found: values.len(),
                }));
            }

            let fields = self.header.iter().cloned().zip(values).collect();
            return Some(Ok(InventoryRecord {
                line: self.line,
                fields,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read_all(text: &str) -> Vec<Result<InventoryRecord, InventoryError>> {
        InventoryReader::new(Cursor::new(text.to_owned())).collect()
    }

    #[test]
    fn header_names_the_columns() {
        let records = read_all("#name,count\nSword,3\nShield,1\n");
        let records: Vec<_> = records.into_iter().map(Result::unwrap).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some("Sword"));
        assert_eq!(records[0].get("count"), Some("3"));
        assert_eq!(records[1].line(), 3);
    }

    #[test]
    fn lines_before_header_and_blank_lines_are_skipped() {
        let records = read_all("orphan,1\n\n# name , count\n\n Bow , 2 \n");
        let records: Vec<_> = records.into_iter().map(Result::unwrap).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("name"), Some("Bow"));
        assert_eq!(records[0].get("count"), Some("2"));
    }

    #[test]
    fn indented_hash_is_a_data_row() {
        let records = read_all("#name,count\n  # Bow,2\n");
        let record = records.into_iter().next().unwrap().unwrap();
        assert_eq!(record.get("name"), Some("# Bow"));
        assert_eq!(record.get("count"), Some("2"));
    }

    #[test]
    fn later_header_replaces_earlier_one() {
        let records = read_all("#name\nSword\n#name,price\nBow,40\n");
        let last = records.into_iter().last().unwrap().unwrap();
        assert_eq!(last.get("price"), Some("40"));
    }

    #[test]
    fn short_line_fills_present_columns() {
        let record = read_all("#name,count,price\nSword,3\n")
            .remove(0)
            .unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("price"), None);
        assert!(matches!(
            record.require("price"),
            Err(InventoryError::MissingColumn { line: 2, .. })
        ));
    }

    #[test]
    fn extra_values_are_an_error() {
        let err = read_all("#name\nSword,3\n").remove(0).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::TooManyValues {
                line: 2,
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn reads_lazily() {
        let mut reader = InventoryReader::new(Cursor::new("#name\nSword\nShield\n"));
        assert!(reader.next().is_some());
        assert_eq!(reader.header(), ["name"]);
        assert_eq!(reader.line, 2);
    }

    #[test]
    fn record_serializes_as_object() {
        let record = read_all("#name,count\nSword,3\n").remove(0).unwrap();
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"Sword","count":"3"}"#
        );
    }

    #[test]
    fn missing_file_fails_to_open() {
        assert!(matches!(
            InventoryReader::open("/no/such/inventory.csv"),
            Err(InventoryError::Open { .. })
        ));
    }
}
