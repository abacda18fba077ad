//! Text extraction from uploaded documents
//!
//! Turns a byte buffer plus its file name into UTF-8 plain text. The file
//! extension picks the extractor; unknown extensions are rejected before
//! any bytes are looked at.

#[cfg(feature = "docx")]
pub mod docx;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod plain;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{EngineError, Result};

/// Document formats the extractor recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    PlainText,
    Pdf,
    WordProcessor,
    Json,
    Csv,
}

impl FileKind {
    /// Every kind, for listing
    pub const ALL: [FileKind; 5] = [
        FileKind::PlainText,
        FileKind::Pdf,
        FileKind::WordProcessor,
        FileKind::Json,
        FileKind::Csv,
    ];

    /// Map a file extension (without the dot, any case) to a kind
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" | "md" => Ok(FileKind::PlainText),
            "pdf" => Ok(FileKind::Pdf),
            "docx" | "doc" => Ok(FileKind::WordProcessor),
            "json" => Ok(FileKind::Json),
            "csv" => Ok(FileKind::Csv),
            other => Err(EngineError::UnsupportedFileType(other.to_string())),
        }
    }

    /// Kind from a path or file name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext)
    }

    /// Extensions mapped to this kind
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileKind::PlainText => &["txt", "text", "md"],
            FileKind::Pdf => &["pdf"],
            FileKind::WordProcessor => &["docx", "doc"],
            FileKind::Json => &["json"],
            FileKind::Csv => &["csv"],
        }
    }

    /// Whether this build can extract the kind
    pub fn is_available(self) -> bool {
        match self {
            FileKind::Pdf => cfg!(feature = "pdf"),
            FileKind::WordProcessor => cfg!(feature = "docx"),
            _ => true,
        }
    }

    /// Short label used in records and reports
    pub fn label(self) -> &'static str {
        match self {
            FileKind::PlainText => "text",
            FileKind::Pdf => "pdf",
            FileKind::WordProcessor => "docx",
            FileKind::Json => "json",
            FileKind::Csv => "csv",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converts document bytes to plain text
pub trait TextExtractor: Send + Sync {
    /// Extract text, using `filename` to pick the format
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String>;
}

/// Extractor covering every [`FileKind`] compiled into this build
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExtractor;

impl TextExtractor for DefaultExtractor {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String> {
        let kind = FileKind::from_path(filename)?;
        log::debug!("extracting {filename} as {kind}");

        match kind {
            FileKind::PlainText => plain::decode_utf8(bytes, filename),
            FileKind::Csv => plain::passthrough_csv(bytes, filename),
            FileKind::Json => plain::reformat_json(bytes, filename),
            #[cfg(feature = "pdf")]
            FileKind::Pdf => pdf::extract_pdf(bytes, filename),
            #[cfg(feature = "docx")]
            FileKind::WordProcessor => docx::extract_docx(bytes, filename),
            #[allow(unreachable_patterns)]
            other => Err(EngineError::UnsupportedFileType(format!(
                "{} (not enabled in this build)",
                other.label()
            ))),
        }
    }
}
