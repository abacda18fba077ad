//! JSON export

use std::io::Write;

use crate::batch::ItemRecord;
use crate::error::Result;

/// Pretty-printed array of records, two-space indent, trailing newline
pub fn write_json<W: Write>(records: &[ItemRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{ItemRecord, ItemStatus};
    use crate::error::EngineError;

    #[test]
    fn test_failed_record_shape() {
        let record = ItemRecord::failed(
            "scan.pdf",
            10,
            "pdf",
            &EngineError::extraction("scan.pdf", "no text layer"),
        );
        let mut out = Vec::new();
        write_json(&[record], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[\n  {\n    \"filename\": \"scan.pdf\""));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["status"], "failed");
        assert_eq!(
            value[0]["error"],
            "failed to extract text from scan.pdf: no text layer"
        );
        assert_eq!(value[0]["analysis"], "");
    }

    #[test]
    fn test_records_parse_back() {
        let record = ItemRecord::failed("a", 0, "text", &EngineError::InputValidation("x".into()));
        let mut out = Vec::new();
        write_json(std::slice::from_ref(&record), &mut out).unwrap();
        let parsed: Vec<ItemRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0].status, ItemStatus::Failed);
        assert_eq!(parsed[0].processed_at, record.processed_at);
    }
}
