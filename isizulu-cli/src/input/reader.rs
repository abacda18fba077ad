//! Reading text and JSON payloads from files or stdin

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read text from a file, or from stdin when `source` is `-`
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    let path = Path::new(source);
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Read and parse a JSON document from a file or stdin
pub fn read_payload(source: &str) -> Result<serde_json::Value> {
    let content = read_source(source)?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("umbhalo.txt");
        fs::write(&path, "Sawubona mngane").unwrap();

        let text = read_source(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "Sawubona mngane");
    }

    #[test]
    fn test_read_source_missing() {
        let err = read_source("/nonexistent/file.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_read_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch.json");
        fs::write(&path, r#"["yebo", {"text": "cha"}]"#).unwrap();

        let payload = read_payload(path.to_str().unwrap()).unwrap();
        assert_eq!(payload.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_read_payload_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch.json");
        fs::write(&path, "[yebo").unwrap();

        let err = read_payload(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON in"));
    }
}
