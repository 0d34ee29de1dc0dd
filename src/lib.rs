//! coldiff - Column-level duplicate and overlap analysis
//!
//! Compares two delimited text files on a single named column and reports
//! which values repeat within each file and which values appear in both.

pub mod compare;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;

pub use compare::{compare_tables, ColumnComparator, ComparisonResult};
pub use config::{Config, MissingFieldPolicy, OutputFormat, ReportConfig};
pub use error::Error;
pub use model::Table;
pub use parser::TableReader;
pub use report::render_to_string;

use std::path::Path;

/// Parse both files, compare the named column, and render the report.
///
/// Returns the comparison result alongside the rendered document, for
/// callers that also need the raw findings. The two parses are
/// independent and run in parallel. Fails without producing any output
/// if either file cannot be parsed or lacks the column.
pub fn run_analysis(
    path_a: &Path,
    path_b: &Path,
    column: &str,
    config: &Config,
) -> Result<(ComparisonResult, String), Error> {
    let reader = TableReader::from_config(config);
    let (table_a, table_b) = rayon::join(|| reader.read_path(path_a), || reader.read_path(path_b));
    let (table_a, table_b) = (table_a?, table_b?);

    let result = ColumnComparator::new(column).compare(&table_a, &table_b)?;
    let report = render_to_string(&result, config.output_format, &config.report)?;
    Ok((result, report))
}

/// Like [`run_analysis`], returning only the rendered report
pub fn analyze_files(
    path_a: &Path,
    path_b: &Path,
    column: &str,
    config: &Config,
) -> Result<String, Error> {
    run_analysis(path_a, path_b, column, config).map(|(_, report)| report)
}
