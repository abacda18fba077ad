//! CSV export

use serde::Serialize;
use std::io::Write;

use crate::batch::ItemRecord;
use crate::error::Result;

/// Flat CSV row; column order is the header order
#[derive(Serialize)]
struct CsvRow<'a> {
    filename: &'a str,
    size: u64,
    #[serde(rename = "type")]
    file_type: &'a str,
    status: &'static str,
    word_count: usize,
    line_count: usize,
    morpheme_count: usize,
    analysis: &'a str,
    error: &'a str,
    processed_at: String,
}

impl<'a> From<&'a ItemRecord> for CsvRow<'a> {
    fn from(record: &'a ItemRecord) -> Self {
        Self {
            filename: &record.filename,
            size: record.size,
            file_type: &record.file_type,
            status: record.status.as_str(),
            word_count: record.word_count,
            line_count: record.line_count,
            morpheme_count: record.morpheme_count,
            analysis: &record.analysis,
            error: record.error.as_deref().unwrap_or_default(),
            processed_at: record.processed_at.to_rfc3339(),
        }
    }
}

/// Column names, written even when there are no records
pub const HEADER: [&str; 10] = [
    "filename",
    "size",
    "type",
    "status",
    "word_count",
    "line_count",
    "morpheme_count",
    "analysis",
    "error",
    "processed_at",
];

pub fn write_csv<W: Write>(records: &[ItemRecord], writer: W) -> Result<()> {
    let mut csv = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for record in records {
        csv.serialize(CsvRow::from(record))?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::ItemStatus;
    use chrono::{TimeZone, Utc};

    fn record() -> ItemRecord {
        ItemRecord {
            filename: "greeting.txt".into(),
            size: 18,
            file_type: "text".into(),
            status: ItemStatus::Completed,
            word_count: 3,
            line_count: 2,
            morpheme_count: 6,
            extracted_text: Some("ignored".into()),
            analysis: "<LINE 1>yebo[Interj] ,[Punc]\n<LINE 2>cha[Interj]".into(),
            error: None,
            processed_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_header_only() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "filename,size,type,status,word_count,line_count,morpheme_count,analysis,error,processed_at\n"
        );
    }

    #[test]
    fn test_row_quotes_multiline_analysis() {
        let mut out = Vec::new();
        write_csv(&[record()], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.split_once('\n').unwrap().1;
        assert_eq!(
            row,
            "greeting.txt,18,text,completed,3,2,6,\"<LINE 1>yebo[Interj] ,[Punc]\n<LINE 2>cha[Interj]\",,2024-05-01T12:00:00+00:00\n"
        );
    }
}
