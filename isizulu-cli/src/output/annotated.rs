//! Annotated output: the `<LINE n>` analysis as produced by the core

use anyhow::Result;
use isizulu_engine::ItemRecord;
use std::io::Write;

/// Writes each record's analysis, with a header when there are several
pub struct AnnotatedFormatter<W: Write> {
    writer: W,
}

impl<W: Write> AnnotatedFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_all(&mut self, records: &[ItemRecord]) -> Result<()> {
        let headers = records.len() > 1;
        for (i, record) in records.iter().enumerate() {
            if headers {
                if i > 0 {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "==> {} <==", record.filename)?;
            }
            match &record.error {
                Some(error) => writeln!(self.writer, "error: {error}")?,
                None if record.analysis.is_empty() => {}
                None => writeln!(self.writer, "{}", record.analysis)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isizulu_engine::{BatchProcessor, EngineConfig, EngineError};

    fn render(records: &[ItemRecord]) -> String {
        let mut out = Vec::new();
        AnnotatedFormatter::new(&mut out).write_all(records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_record_has_no_header() {
        let processor = BatchProcessor::new(EngineConfig::default()).unwrap();
        let record = processor.analyze_item("text", "jongo.\n\nAfrika");
        assert_eq!(
            render(&[record]),
            "<LINE 1>jongo.[NStem]\n<LINE 2>Afrika[ProperName]\n"
        );
    }

    #[test]
    fn test_headers_and_errors() {
        let processor = BatchProcessor::new(EngineConfig::default()).unwrap();
        let ok = processor.analyze_item("a.txt", "yebo");
        let bad = ItemRecord::failed(
            "b.xlsx",
            0,
            "xlsx",
            &EngineError::UnsupportedFileType("xlsx".into()),
        );
        assert_eq!(
            render(&[ok, bad]),
            "==> a.txt <==\n<LINE 1>yebo[Interj]\n\n==> b.xlsx <==\nerror: unsupported file type: xlsx\n"
        );
    }
}
