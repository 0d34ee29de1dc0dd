//! Column comparison engine

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::Result;
use crate::model::Table;

/// Result of comparing one column across two tables.
///
/// The three value lists are ordered-unique: each value appears at most
/// once, enumerated in order of first appearance in its source sequence
/// (`common` follows first appearance in source A).
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// Name of the analyzed column, as requested by the caller
    pub column: String,
    /// Identifier of the first source
    pub source_a: String,
    /// Identifier of the second source
    pub source_b: String,
    /// Values occurring two or more times within source A
    pub duplicates_a: Vec<String>,
    /// Values occurring two or more times within source B
    pub duplicates_b: Vec<String>,
    /// Distinct values present in both sources
    pub common: Vec<String>,
    /// When the comparison was computed
    pub computed_at: DateTime<Local>,
}

impl ComparisonResult {
    /// Check if any of the three result sets is non-empty
    pub fn has_findings(&self) -> bool {
        !self.duplicates_a.is_empty() || !self.duplicates_b.is_empty() || !self.common.is_empty()
    }
}

/// Compares a named column across two tables
pub struct ColumnComparator {
    column: String,
}

impl ColumnComparator {
    /// Create a comparator for the given column name
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    /// Compare the column across both tables, timestamping the result now.
    ///
    /// Fails with `ColumnNotFound` naming the table whose header lacks the
    /// column. Absent fields contribute no value; empty strings are
    /// ordinary values. Value comparison is exact (case-sensitive).
    pub fn compare(&self, a: &Table, b: &Table) -> Result<ComparisonResult> {
        self.compare_at(a, b, Local::now())
    }

    /// Compare with an explicit clock reading
    pub fn compare_at(
        &self,
        a: &Table,
        b: &Table,
        computed_at: DateTime<Local>,
    ) -> Result<ComparisonResult> {
        let index_a = a.require_column(&self.column)?;
        let index_b = b.require_column(&self.column)?;

        let counts_a = count_values(a, index_a);
        let counts_b = count_values(b, index_b);

        let in_b: FxHashSet<&str> = counts_b.keys().copied().collect();
        let common = counts_a
            .keys()
            .filter(|v| in_b.contains(*v))
            .map(|v| v.to_string())
            .collect();

        Ok(ComparisonResult {
            column: self.column.clone(),
            source_a: a.source_id.clone(),
            source_b: b.source_id.clone(),
            duplicates_a: repeated(&counts_a),
            duplicates_b: repeated(&counts_b),
            common,
            computed_at,
        })
    }
}

/// Count occurrences of the column's values, keyed in order of first
/// appearance. The insertion-ordered map is what makes enumeration
/// deterministic.
fn count_values<'t>(table: &'t Table, column_index: usize) -> IndexMap<&'t str, usize> {
    let mut counts = IndexMap::new();
    for record in &table.records {
        if let Some(value) = record.field(column_index).value() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }
    counts
}

/// Values seen two or more times, in first-appearance order
fn repeated(counts: &IndexMap<&str, usize>) -> Vec<String> {
    counts
        .iter()
        .filter(|(_, &count)| count >= 2)
        .map(|(value, _)| value.to_string())
        .collect()
}

/// Convenience function to compare a column across two tables
pub fn compare_tables(a: &Table, b: &Table, column: &str) -> Result<ComparisonResult> {
    ColumnComparator::new(column).compare(a, b)
}
