//! Markdown report output

use std::io::{self, Write};

use crate::compare::ComparisonResult;
use crate::config::ReportConfig;

use super::ReportFormatter;

/// Marker rendered in place of an empty section
const NONE_FOUND: &str = "_none found_";

/// Markdown report with fixed section order: duplicates in A, duplicates
/// in B, values common to both. Every section is rendered even when
/// empty.
pub struct MarkdownReport {
    config: ReportConfig,
}

impl MarkdownReport {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    fn write_section(
        &self,
        writer: &mut dyn Write,
        title: &str,
        values: &[String],
    ) -> io::Result<()> {
        writeln!(writer, "## {}", title)?;
        if values.is_empty() {
            writeln!(writer, "{}", NONE_FOUND)?;
        } else {
            for value in values {
                writeln!(writer, "- `{}`", value)?;
            }
        }
        Ok(())
    }
}

impl Default for MarkdownReport {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl ReportFormatter for MarkdownReport {
    fn render(&self, result: &ComparisonResult, writer: &mut dyn Write) -> io::Result<()> {
        let timestamp = result
            .computed_at
            .format_localized(&self.config.timestamp_format, self.config.locale);

        writeln!(writer, "# Column analysis: `{}`", result.column)?;
        writeln!(writer, "* **Source A:** `{}`", result.source_a)?;
        writeln!(writer, "* **Source B:** `{}`", result.source_b)?;
        writeln!(writer, "* **Analyzed at:** `{}`", timestamp)?;
        writeln!(writer)?;
        writeln!(writer, "---")?;

        self.write_section(
            writer,
            &format!(
                "Values of `{}` duplicated within `{}`",
                result.column, result.source_a
            ),
            &result.duplicates_a,
        )?;
        writeln!(writer)?;
        writeln!(writer, "---")?;

        self.write_section(
            writer,
            &format!(
                "Values of `{}` duplicated within `{}`",
                result.column, result.source_b
            ),
            &result.duplicates_b,
        )?;
        writeln!(writer)?;
        writeln!(writer, "---")?;

        self.write_section(
            writer,
            &format!("Values of `{}` present in both sources", result.column),
            &result.common,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn sample_result() -> ComparisonResult {
        ComparisonResult {
            column: "id".to_string(),
            source_a: "first.txt".to_string(),
            source_b: "second.txt".to_string(),
            duplicates_a: vec!["x".to_string()],
            duplicates_b: vec![],
            common: vec!["y".to_string(), "z".to_string()],
            computed_at: Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    fn render(result: &ComparisonResult) -> String {
        let mut buffer = Vec::new();
        MarkdownReport::default().render(result, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let output = render(&sample_result());

        let title = output.find("# Column analysis: `id`").unwrap();
        let dup_a = output.find("duplicated within `first.txt`").unwrap();
        let dup_b = output.find("duplicated within `second.txt`").unwrap();
        let common = output.find("present in both sources").unwrap();
        assert!(title < dup_a && dup_a < dup_b && dup_b < common);
    }

    #[test]
    fn test_metadata_lines() {
        let output = render(&sample_result());

        assert!(output.contains("* **Source A:** `first.txt`"));
        assert!(output.contains("* **Source B:** `second.txt`"));
        assert!(output.contains("* **Analyzed at:** `01 May 2024 12:30:00`"));
    }

    #[test]
    fn test_empty_section_renders_marker() {
        let output = render(&sample_result());

        // duplicates_b is empty; its marker sits between the two section
        // headings.
        let dup_b = output.find("duplicated within `second.txt`").unwrap();
        let common = output.find("present in both sources").unwrap();
        let marker = output.find(NONE_FOUND).unwrap();
        assert!(dup_b < marker && marker < common);
    }

    #[test]
    fn test_values_render_in_given_order() {
        let output = render(&sample_result());
        let y = output.find("- `y`").unwrap();
        let z = output.find("- `z`").unwrap();
        assert!(y < z);
    }

    #[test]
    fn test_all_empty_renders_three_markers() {
        let mut result = sample_result();
        result.duplicates_a.clear();
        result.common.clear();

        let output = render(&result);
        assert_eq!(output.matches(NONE_FOUND).count(), 3);
    }
}
