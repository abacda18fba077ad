//! Plain text, CSV and JSON sources

use crate::error::{EngineError, Result};

const UTF8_BOM: &str = "\u{feff}";

/// Decode UTF-8 text, dropping a leading byte-order mark
pub fn decode_utf8(bytes: &[u8], filename: &str) -> Result<String> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| EngineError::extraction(filename, format!("invalid UTF-8: {e}")))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

/// CSV files are analyzed as written, commas included
pub fn passthrough_csv(bytes: &[u8], filename: &str) -> Result<String> {
    decode_utf8(bytes, filename)
}

/// Parse JSON and re-serialize it with two-space indentation
///
/// Key order follows the source document.
pub fn reformat_json(bytes: &[u8], filename: &str) -> Result<String> {
    let text = decode_utf8(bytes, filename)?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| EngineError::extraction(filename, format!("invalid JSON: {e}")))?;
    Ok(serde_json::to_string_pretty(&value)?)
}
