//! Typed errors for parsing and comparison

use std::io;

use thiserror::Error;

/// Errors surfaced by the table reader and the column comparator.
///
/// Failures are terminal to the current comparison attempt; no partial
/// result is ever produced alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be opened or read.
    #[error("cannot read source '{source_id}': {source}")]
    UnreadableSource {
        source_id: String,
        source: io::Error,
    },

    /// The input source contains no header line.
    #[error("source '{source_id}' is empty: no header row")]
    EmptyFile { source_id: String },

    /// The named column is absent from a table's header.
    #[error("column '{column}' not found in '{source_id}'")]
    ColumnNotFound { column: String, source_id: String },

    /// A data row has fewer fields than the header (strict policy only).
    #[error("row at line {line} of '{source_id}' has {found} fields, expected {expected}")]
    MalformedRow {
        source_id: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The underlying delimited-text reader failed.
    #[error("failed to parse '{source_id}': {source}")]
    Parse {
        source_id: String,
        source: csv::Error,
    },

    /// Report rendering or report sink I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
