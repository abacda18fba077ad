//! Export of batch records
//!
//! Records are rendered as CSV, indented JSON or a plain-text report.
//! Rendering never feeds back into analysis.

pub mod csv;
pub mod json;
pub mod report;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::batch::ItemRecord;
use crate::error::{EngineError, Result};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "text",
        }
    }

    /// File extension for exported files
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    /// MIME type of the rendered output
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Text => "text/plain",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(EngineError::ExportFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render records in `format` to a writer
pub fn export<W: Write>(records: &[ItemRecord], format: ExportFormat, writer: W) -> Result<()> {
    log::debug!("exporting {} records as {format}", records.len());
    match format {
        ExportFormat::Csv => csv::write_csv(records, writer),
        ExportFormat::Json => json::write_json(records, writer),
        ExportFormat::Text => report::write_report(records, writer),
    }
}

/// Render records in `format` to a string
pub fn export_to_string(records: &[ItemRecord], format: ExportFormat) -> Result<String> {
    let mut buffer = Vec::new();
    export(records, format, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| EngineError::Io(std::io::Error::other(e)))
}
