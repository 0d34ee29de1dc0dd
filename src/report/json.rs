//! JSON report output

use std::io::{self, Write};

use crate::compare::ComparisonResult;

use super::ReportFormatter;

/// Machine-readable report: the comparison result serialized as
/// pretty-printed JSON.
pub struct JsonReport;

impl JsonReport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReport {
    fn render(&self, result: &ComparisonResult, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, result).map_err(io::Error::from)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use serde_json::Value;

    #[test]
    fn test_json_carries_all_result_fields() {
        let result = ComparisonResult {
            column: "id".to_string(),
            source_a: "a.txt".to_string(),
            source_b: "b.txt".to_string(),
            duplicates_a: vec!["x".to_string()],
            duplicates_b: vec![],
            common: vec!["y".to_string()],
            computed_at: Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let mut buffer = Vec::new();
        JsonReport::new().render(&result, &mut buffer).unwrap();
        let parsed: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(parsed["column"], "id");
        assert_eq!(parsed["source_a"], "a.txt");
        assert_eq!(parsed["duplicates_a"][0], "x");
        assert_eq!(parsed["duplicates_b"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["common"][0], "y");
        assert!(parsed["computed_at"].is_string());
    }
}
