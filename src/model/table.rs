//! Table, Record, and FieldValue data structures

use crate::error::Error;

use super::Column;

/// A single cell of a parsed record.
///
/// `Absent` marks a field missing from a ragged row. It is distinct from
/// `Value("")`: an empty cell is an ordinary value, a missing cell is not
/// a value at all and never participates in comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Value(String),
    Absent,
}

impl FieldValue {
    /// The contained value, if the field is present
    pub fn value(&self) -> Option<&str> {
        match self {
            FieldValue::Value(s) => Some(s),
            FieldValue::Absent => None,
        }
    }

    /// Check if the field is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Value(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Value(s)
    }
}

/// One data row, with fields in column order.
///
/// Invariant: a record held by a [`Table`] has exactly as many fields as
/// the table has columns; short rows are padded with `Absent` at parse
/// time and long rows are truncated.
#[derive(Debug, Clone)]
pub struct Record {
    fields: Vec<FieldValue>,
}

impl Record {
    /// Create a record from fields already normalized to the header width
    pub fn new(fields: Vec<FieldValue>) -> Self {
        Self { fields }
    }

    /// Get a field by column index
    pub fn field(&self, index: usize) -> &FieldValue {
        self.fields.get(index).unwrap_or(&FieldValue::Absent)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parsed table: source identifier, header columns, and ordered records
#[derive(Debug, Clone)]
pub struct Table {
    /// Identifier of the input source (typically the file name)
    pub source_id: String,
    /// Column definitions from the header row
    pub columns: Vec<Column>,
    /// All data records, in source order
    pub records: Vec<Record>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(source_id: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            source_id: source_id.into(),
            columns,
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get column index by name, case-insensitively
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.matches(name))
    }

    /// Get column index by name, failing with `ColumnNotFound` naming this table
    pub fn require_column(&self, name: &str) -> Result<usize, Error> {
        self.column_index(name).ok_or_else(|| Error::ColumnNotFound {
            column: name.to_string(),
            source_id: self.source_id.clone(),
        })
    }

    /// Number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let columns = vec![Column::new("id", 0), Column::new("Name", 1)];
        let mut table = Table::new("sample.txt", columns);
        table.add_record(Record::new(vec!["1".into(), "alice".into()]));
        table.add_record(Record::new(vec!["2".into(), FieldValue::Absent]));
        table
    }

    #[test]
    fn test_column_lookup_case_insensitive() {
        let table = sample_table();
        assert_eq!(table.column_index("ID"), Some(0));
        assert_eq!(table.column_index("name"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_require_column_names_the_source() {
        let table = sample_table();
        let err = table.require_column("missing").unwrap_err();
        match err {
            Error::ColumnNotFound { column, source_id } => {
                assert_eq!(column, "missing");
                assert_eq!(source_id, "sample.txt");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_absent_is_not_empty_string() {
        let table = sample_table();
        assert_eq!(table.records[0].field(1).value(), Some("alice"));
        assert!(table.records[1].field(1).is_absent());
        assert_ne!(*table.records[1].field(1), FieldValue::Value(String::new()));
    }

    #[test]
    fn test_field_out_of_range_is_absent() {
        let record = Record::new(vec!["x".into()]);
        assert!(record.field(5).is_absent());
    }
}
