//! Output formatting module

use anyhow::{Context, Result};
use isizulu_engine::{export, ExportFormat, ItemRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::CliError;

pub mod annotated;

pub use annotated::AnnotatedFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Canonical `<LINE n>` analysis per input
    Annotated,
    /// JSON array of item records
    Json,
    /// One CSV row per item
    Csv,
    /// Human-readable report
    Text,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Annotated,
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Annotated => "annotated",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "text",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Annotated => "canonical <LINE n> analysis per input",
            OutputFormat::Json => "indented JSON array of item records",
            OutputFormat::Csv => "one CSV row per item",
            OutputFormat::Text => "human-readable report with summary",
        }
    }

    /// Export format backing this output, if any
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Annotated => None,
            OutputFormat::Json => Some(ExportFormat::Json),
            OutputFormat::Csv => Some(ExportFormat::Csv),
            OutputFormat::Text => Some(ExportFormat::Text),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{s}'")))
    }
}

/// Writer for `path`, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Render records in the chosen format
pub fn write_records<W: Write>(
    records: &[ItemRecord],
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format.export_format() {
        Some(export_format) => export(records, export_format, &mut writer)?,
        None => AnnotatedFormatter::new(&mut writer).write_all(records)?,
    }
    writer.flush()?;
    Ok(())
}
