//! Human-readable text report

use chrono::Utc;
use std::io::Write;

use crate::batch::{BatchSummary, ItemRecord};
use crate::error::Result;

const TITLE: &str = "isiZulu Morphological Analysis Report";

pub fn write_report<W: Write>(records: &[ItemRecord], mut w: W) -> Result<()> {
    writeln!(w, "{TITLE}")?;
    writeln!(w, "{}", "=".repeat(TITLE.len()))?;
    writeln!(w, "Generated: {}", Utc::now().to_rfc3339())?;

    for (i, record) in records.iter().enumerate() {
        writeln!(w)?;
        writeln!(w, "[{}] {}", i + 1, record.filename)?;
        writeln!(w, "Status: {}", record.status.as_str())?;
        writeln!(w, "Type: {} | Size: {} bytes", record.file_type, record.size)?;
        match &record.error {
            Some(error) => writeln!(w, "Error: {error}")?,
            None => {
                writeln!(
                    w,
                    "Lines: {} | Words: {} | Morphemes: {}",
                    record.line_count, record.word_count, record.morpheme_count
                )?;
                writeln!(w, "Analysis:")?;
                if !record.analysis.is_empty() {
                    writeln!(w, "{}", record.analysis)?;
                }
            }
        }
    }

    let summary = BatchSummary::from_records(records);
    writeln!(w)?;
    writeln!(w, "Summary")?;
    writeln!(w, "-------")?;
    writeln!(
        w,
        "Total: {} | Completed: {} | Failed: {}",
        summary.total, summary.completed, summary.failed
    )?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_report_sections() {
        let records = [ItemRecord::failed(
            "old.doc",
            4,
            "docx",
            &EngineError::extraction("old.doc", "not a zip"),
        )];
        let mut out = Vec::new();
        write_report(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("isiZulu Morphological Analysis Report\n====="));
        assert!(text.contains("[1] old.doc\nStatus: failed\nType: docx | Size: 4 bytes\n"));
        assert!(text.contains("Error: failed to extract text from old.doc: not a zip"));
        assert!(text.ends_with("Total: 1 | Completed: 0 | Failed: 1\n"));
    }

    #[test]
    fn test_empty_report_has_summary() {
        let mut out = Vec::new();
        write_report(&[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total: 0 | Completed: 0 | Failed: 0"));
    }
}
