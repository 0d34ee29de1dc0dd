//! coldiff - Column-level duplicate and overlap analysis

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use coldiff::config::{Config, MissingFieldPolicy, OutputFormat};
use coldiff::run_analysis;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Markdown,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Markdown => OutputFormat::Markdown,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Compare a column across two delimited text files
#[derive(Parser, Debug)]
#[command(name = "coldiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First file to analyze
    file_a: PathBuf,

    /// Second file to analyze
    file_b: PathBuf,

    /// Column to analyze (matched case-insensitively against the headers)
    #[arg(short, long)]
    column: String,

    /// Field delimiter
    #[arg(short, long, default_value_t = '\t')]
    delimiter: char,

    /// Fail on rows with fewer fields than the header
    #[arg(long)]
    strict: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: CliOutputFormat,

    /// Also write the report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(has_findings) => {
            if has_findings {
                ExitCode::from(1) // Duplicates or common values found
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    anyhow::ensure!(
        cli.delimiter.is_ascii(),
        "delimiter must be a single-byte character, got '{}'",
        cli.delimiter
    );

    let policy = if cli.strict {
        MissingFieldPolicy::Fail
    } else {
        MissingFieldPolicy::Ignore
    };
    let config = Config::default()
        .with_delimiter(cli.delimiter as u8)
        .with_missing_fields(policy)
        .with_output_format(cli.format.into());

    info!(
        "comparing column '{}' across {} and {}",
        cli.column,
        cli.file_a.display(),
        cli.file_b.display()
    );

    let (result, report) = run_analysis(&cli.file_a, &cli.file_b, &cli.column, &config)?;

    if let Some(output_path) = &cli.output {
        fs::write(output_path, &report)
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
        info!("report saved to {}", output_path.display());
    }

    print!("{}", report);

    write_summary(&result)?;

    Ok(result.has_findings())
}

/// One-line colored summary on stderr, leaving stdout to the report itself
fn write_summary(result: &coldiff::ComparisonResult) -> Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);

    let color = if result.has_findings() {
        Color::Yellow
    } else {
        Color::Green
    };
    stderr.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(
        stderr,
        "{} duplicated in A, {} duplicated in B, {} common",
        result.duplicates_a.len(),
        result.duplicates_b.len(),
        result.common.len()
    )?;
    stderr.reset()?;
    Ok(())
}
