//! Report rendering for comparison results

mod json;
mod markdown;

use std::io::{self, Write};

use crate::compare::ComparisonResult;
use crate::config::{OutputFormat, ReportConfig};

pub use json::JsonReport;
pub use markdown::MarkdownReport;

/// Trait for report formatters.
///
/// Formatters render the lists exactly as provided: uniqueness and
/// ordering are guaranteed upstream by the comparator, never re-derived
/// here.
pub trait ReportFormatter {
    /// Render a comparison result to a writer
    fn render(&self, result: &ComparisonResult, writer: &mut dyn Write) -> io::Result<()>;
}

/// Factory for creating report formatters
pub struct ReportFactory;

impl ReportFactory {
    /// Create a formatter for the given output format
    pub fn create(format: OutputFormat, config: &ReportConfig) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Markdown => Box::new(MarkdownReport::new(config.clone())),
            OutputFormat::Json => Box::new(JsonReport::new()),
        }
    }
}

/// Render a comparison result to an owned string
pub fn render_to_string(
    result: &ComparisonResult,
    format: OutputFormat,
    config: &ReportConfig,
) -> io::Result<String> {
    let formatter = ReportFactory::create(format, config);
    let mut buffer = Vec::new();
    formatter.render(result, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
