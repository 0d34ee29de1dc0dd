//! Delimited text parser

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::config::{Config, MissingFieldPolicy};
use crate::error::{Error, Result};
use crate::model::{Column, FieldValue, Record, Table};

/// Reader for delimited text files with a header row.
///
/// The first non-empty line declares the column names; header cells and
/// data cells are trimmed of surrounding whitespace. The source is opened,
/// read once top to bottom, and released when parsing completes or fails.
#[derive(Debug, Clone)]
pub struct TableReader {
    delimiter: u8,
    missing_fields: MissingFieldPolicy,
}

impl Default for TableReader {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            missing_fields: MissingFieldPolicy::Ignore,
        }
    }
}

impl TableReader {
    /// Create a reader with an explicit delimiter and missing-field policy
    pub fn new(delimiter: u8, missing_fields: MissingFieldPolicy) -> Self {
        Self {
            delimiter,
            missing_fields,
        }
    }

    /// Create a reader from a comparison configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.delimiter, config.missing_fields)
    }

    /// Parse the file at `path`. The source identifier of the resulting
    /// table is the file name (or the full path if it has no file name).
    pub fn read_path(&self, path: &Path) -> Result<Table> {
        let source_id = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let file = File::open(path).map_err(|e| Error::UnreadableSource {
            source_id: source_id.clone(),
            source: e,
        })?;

        self.read_from(BufReader::new(file), &source_id)
    }

    /// Parse any readable source, labelling the table with `source_id`
    pub fn read_from<R: Read>(&self, reader: R, source_id: &str) -> Result<Table> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut records = csv_reader.records();

        // The header is the first non-blank line, so blank lines (including
        // whitespace-only ones) before it are skipped the same way as
        // between data rows.
        let headers = loop {
            match records.next() {
                Some(result) => {
                    let row = result.map_err(|e| Error::Parse {
                        source_id: source_id.to_string(),
                        source: e,
                    })?;
                    if !is_blank(&row) {
                        break row;
                    }
                }
                None => {
                    return Err(Error::EmptyFile {
                        source_id: source_id.to_string(),
                    })
                }
            }
        };

        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();

        let mut table = Table::new(source_id, columns);
        let width = table.column_count();

        for result in records {
            let row = result.map_err(|e| Error::Parse {
                source_id: source_id.to_string(),
                source: e,
            })?;

            if is_blank(&row) {
                continue;
            }

            if row.len() < width && self.missing_fields == MissingFieldPolicy::Fail {
                return Err(Error::MalformedRow {
                    source_id: source_id.to_string(),
                    line: row.position().map(|p| p.line()).unwrap_or(0),
                    expected: width,
                    found: row.len(),
                });
            }

            // Short rows pad with absent fields; extra trailing cells are
            // discarded.
            let mut fields: Vec<FieldValue> = row
                .iter()
                .take(width)
                .map(FieldValue::from)
                .collect();
            fields.resize(width, FieldValue::Absent);

            table.add_record(Record::new(fields));
        }

        Ok(table)
    }
}

/// A lone empty cell is what remains of a whitespace-only line after
/// trimming; treat it like the blank lines the reader drops on its own.
fn is_blank(row: &csv::StringRecord) -> bool {
    row.len() == 1 && row.get(0).is_some_and(|s| s.is_empty())
}
