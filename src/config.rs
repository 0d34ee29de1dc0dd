//! Configuration handling for coldiff

use chrono::Locale;

/// Output format for the rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Policy for data rows with fewer fields than the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Record missing trailing fields as absent and continue.
    #[default]
    Ignore,
    /// Fail the parse with a malformed-row error.
    Fail,
}

/// Timestamp presentation for the report renderer.
///
/// Passed in explicitly; the renderer never consults ambient locale state.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// strftime-style format for the computation timestamp
    pub timestamp_format: String,
    /// Locale used for month and day names in the timestamp
    pub locale: Locale,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%d %B %Y %H:%M:%S".to_string(),
            locale: Locale::en_US,
        }
    }
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Field delimiter (single byte)
    pub delimiter: u8,
    /// How to treat rows shorter than the header
    pub missing_fields: MissingFieldPolicy,
    /// Report output format
    pub output_format: OutputFormat,
    /// Timestamp presentation for the report
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            missing_fields: MissingFieldPolicy::default(),
            output_format: OutputFormat::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the missing-field policy
    pub fn with_missing_fields(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }

    /// Set the report output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the report timestamp configuration
    pub fn with_report(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("markdown".parse(), Ok(OutputFormat::Markdown));
        assert_eq!("md".parse(), Ok(OutputFormat::Markdown));
        assert_eq!("JSON".parse(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(config.missing_fields, MissingFieldPolicy::Ignore);
        assert_eq!(config.output_format, OutputFormat::Markdown);
    }
}
