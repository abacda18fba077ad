//! Batch orchestration
//!
//! Every item (a text or a file) becomes one [`ItemRecord`]. Items are
//! independent: an extraction failure marks that item as failed and the
//! rest of the batch carries on. Records come back in input order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use isizulu_core::{
    AnalyzerConfig, LineAnalyzer, ResultFormatter, RuleTables, SegmentationEngine, TextStats,
};

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::extract::{DefaultExtractor, FileKind, TextExtractor};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Completed,
    Failed,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Completed => "completed",
            ItemStatus::Failed => "failed",
        }
    }
}

/// Per-item result consumed by the export layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub filename: String,
    /// Input size in bytes
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
    pub status: ItemStatus,
    pub word_count: usize,
    pub line_count: usize,
    pub morpheme_count: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extracted_text: Option<String>,
    /// Rendered `<LINE n>` analysis, empty on failure
    pub analysis: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    pub processed_at: DateTime<Utc>,
}

impl ItemRecord {
    /// Record for an item that could not be analyzed
    pub fn failed(
        filename: impl Into<String>,
        size: u64,
        file_type: impl Into<String>,
        error: &EngineError,
    ) -> Self {
        Self {
            filename: filename.into(),
            size,
            file_type: file_type.into(),
            status: ItemStatus::Failed,
            word_count: 0,
            line_count: 0,
            morpheme_count: 0,
            extracted_text: None,
            analysis: String::new(),
            error: Some(error.to_string()),
            processed_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ItemStatus::Completed
    }
}

/// One named text to analyze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub name: String,
    pub text: String,
}

impl BatchItem {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[ItemRecord]) -> Self {
        let completed = records.iter().filter(|r| r.is_completed()).count();
        Self {
            total: records.len(),
            completed,
            failed: records.len() - completed,
        }
    }

    pub fn all_completed(&self) -> bool {
        self.failed == 0
    }
}

/// Validate a JSON batch request
///
/// The payload must be a non-empty array. Each element is either a string
/// or an object with a string `text` field and an optional string `name`.
/// Unnamed items are called `text_1`, `text_2`, ... by position.
pub fn parse_batch_payload(payload: &Value) -> Result<Vec<BatchItem>> {
    let entries = payload.as_array().ok_or_else(|| {
        EngineError::InputValidation("batch payload must be an array".to_string())
    })?;
    if entries.is_empty() {
        return Err(EngineError::InputValidation(
            "batch payload is empty".to_string(),
        ));
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let default_name = || format!("text_{}", i + 1);
            match entry {
                Value::String(text) => Ok(BatchItem::new(default_name(), text.as_str())),
                Value::Object(fields) => {
                    let text = fields.get("text").and_then(Value::as_str).ok_or_else(|| {
                        EngineError::InputValidation(format!(
                            "item {}: missing string field 'text'",
                            i + 1
                        ))
                    })?;
                    let name = match fields.get("name") {
                        None | Some(Value::Null) => default_name(),
                        Some(Value::String(name)) => name.clone(),
                        Some(_) => {
                            return Err(EngineError::InputValidation(format!(
                                "item {}: 'name' must be a string",
                                i + 1
                            )))
                        }
                    };
                    Ok(BatchItem::new(name, text))
                }
                _ => Err(EngineError::InputValidation(format!(
                    "item {}: expected a string or an object",
                    i + 1
                ))),
            }
        })
        .collect()
}

/// Runs extraction and analysis over many items
pub struct BatchProcessor {
    analyzer: LineAnalyzer,
    extractor: Box<dyn TextExtractor>,
    config: EngineConfig,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl std::fmt::Debug for BatchProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchProcessor")
            .field("analyzer", &self.analyzer)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl BatchProcessor {
    /// Processor over the built-in tables
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_engine(SegmentationEngine::builtin(), config)
    }

    /// Processor over custom rule tables
    pub fn with_tables(tables: Arc<RuleTables>, config: EngineConfig) -> Result<Self> {
        Self::with_engine(SegmentationEngine::new(tables), config)
    }

    fn with_engine(engine: SegmentationEngine, config: EngineConfig) -> Result<Self> {
        // Line-level work runs inside the batch pool, so the analyzer does
        // not get a pool of its own.
        let analyzer = LineAnalyzer::with_config(
            engine,
            AnalyzerConfig {
                threads: None,
                ..config.analyzer_config()
            },
        )?;

        #[cfg(feature = "parallel")]
        let pool = match config.threads {
            Some(threads) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("isizulu-batch-{i}"))
                    .build()
                    .map_err(|e| EngineError::Config(format!("thread pool: {e}")))?,
            )),
            None => None,
        };

        Ok(Self {
            analyzer,
            extractor: Box::new(DefaultExtractor),
            config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    /// Replace the text extractor
    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &LineAnalyzer {
        &self.analyzer
    }

    /// Analyze one named text
    pub fn analyze_item(&self, name: &str, text: &str) -> ItemRecord {
        self.completed(name, text.len() as u64, "text", text)
    }

    /// Analyze raw texts, named `text_1`, `text_2`, ...
    pub fn process_texts(&self, texts: &[String]) -> Vec<ItemRecord> {
        let items: Vec<BatchItem> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| BatchItem::new(format!("text_{}", i + 1), text.as_str()))
            .collect();
        self.process_items(&items)
    }

    /// Analyze named texts
    pub fn process_items(&self, items: &[BatchItem]) -> Vec<ItemRecord> {
        self.run(items, |item| self.analyze_item(&item.name, &item.text), |_| {})
    }

    /// Validate a JSON batch request and analyze its items
    pub fn process_json_payload(&self, payload: &Value) -> Result<Vec<ItemRecord>> {
        let items = parse_batch_payload(payload)?;
        log::info!("processing batch of {} items", items.len());
        Ok(self.process_items(&items))
    }

    /// Extract and analyze files
    pub fn process_files(&self, paths: &[PathBuf]) -> Vec<ItemRecord> {
        self.process_files_with(paths, |_| {})
    }

    /// Extract and analyze files, reporting each finished record
    ///
    /// `on_item` may be called from worker threads in any order.
    pub fn process_files_with<F>(&self, paths: &[PathBuf], on_item: F) -> Vec<ItemRecord>
    where
        F: Fn(&ItemRecord) + Sync,
    {
        self.run(paths, |path| self.process_file(path), on_item)
    }

    /// Extract and analyze a single file
    pub fn process_file(&self, path: &Path) -> ItemRecord {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file_type = match FileKind::from_path(path) {
            Ok(kind) => kind.label().to_string(),
            Err(_) => path
                .extension()
                .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let (size, outcome) = self.extract_file(path, &filename);
        match outcome {
            Ok(text) => self.completed(&filename, size, &file_type, &text),
            Err(e) => {
                log::warn!("{filename}: {e}");
                ItemRecord::failed(filename, size, file_type, &e)
            }
        }
    }

    /// Read and extract a file; the size is known even when extraction fails
    ///
    /// A panicking extractor fails this file only.
    fn extract_file(&self, path: &Path, filename: &str) -> (u64, Result<String>) {
        let size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => return (0, Err(EngineError::extraction(filename, e))),
        };
        if let Err(e) = FileKind::from_path(path) {
            return (size, Err(e));
        }
        if size > self.config.max_file_bytes {
            let message = format!(
                "file is {size} bytes, limit is {}",
                self.config.max_file_bytes
            );
            return (size, Err(EngineError::extraction(filename, message)));
        }

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => return (size, Err(EngineError::extraction(filename, e))),
        };
        let extracted = std::panic::catch_unwind(AssertUnwindSafe(|| {
            self.extractor.extract(&bytes, filename)
        }));
        let result = extracted.unwrap_or_else(|_| {
            Err(EngineError::extraction(
                filename,
                "extractor aborted on this input",
            ))
        });
        (size, result)
    }

    fn completed(&self, name: &str, size: u64, file_type: &str, text: &str) -> ItemRecord {
        let lines = self.analyzer.analyze_lines(text);
        let stats = TextStats::from_lines(&lines);
        log::debug!(
            "{name}: {} lines, {} words, {} morphemes",
            stats.lines,
            stats.words,
            stats.morphemes
        );

        ItemRecord {
            filename: name.to_string(),
            size,
            file_type: file_type.to_string(),
            status: ItemStatus::Completed,
            word_count: stats.words,
            line_count: stats.lines,
            morpheme_count: stats.morphemes,
            extracted_text: self.config.include_text.then(|| text.to_string()),
            analysis: ResultFormatter::format_text(&lines),
            error: None,
            processed_at: Utc::now(),
        }
    }

    fn run<T, P, F>(&self, items: &[T], process: P, on_item: F) -> Vec<ItemRecord>
    where
        T: Sync,
        P: Fn(&T) -> ItemRecord + Sync,
        F: Fn(&ItemRecord) + Sync,
    {
        let one = |item: &T| {
            let record = process(item);
            on_item(&record);
            record
        };

        #[cfg(feature = "parallel")]
        if self.config.parallel_items && items.len() > 1 {
            let run = || -> Vec<ItemRecord> { items.par_iter().map(one).collect() };
            return match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            };
        }

        let run = || -> Vec<ItemRecord> { items.iter().map(one).collect() };
        #[cfg(feature = "parallel")]
        if let Some(pool) = &self.pool {
            return pool.install(run);
        }
        run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn processor() -> BatchProcessor {
        BatchProcessor::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_payload_must_be_array() {
        let err = parse_batch_payload(&json!({"text": "yebo"})).unwrap_err();
        assert!(matches!(err, EngineError::InputValidation(_)));
    }

    #[test]
    fn test_payload_empty_rejected() {
        let err = parse_batch_payload(&json!([])).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: batch payload is empty");
    }

    #[test]
    fn test_payload_mixed_items() {
        let items =
            parse_batch_payload(&json!(["yebo", {"text": "cha", "name": "no"}, {"text": "na"}]))
                .unwrap();
        assert_eq!(
            items,
            vec![
                BatchItem::new("text_1", "yebo"),
                BatchItem::new("no", "cha"),
                BatchItem::new("text_3", "na"),
            ]
        );
    }

    #[test]
    fn test_payload_bad_items() {
        for payload in [json!([1]), json!([{"name": "x"}]), json!([{"text": 5}])] {
            assert!(matches!(
                parse_batch_payload(&payload),
                Err(EngineError::InputValidation(_))
            ));
        }
        let err = parse_batch_payload(&json!([{"text": "a", "name": 3}])).unwrap_err();
        assert!(err.to_string().contains("'name' must be a string"));
    }

    #[test]
    fn test_analyze_item_counts() {
        let record = processor().analyze_item("greeting", "yebo ,\n\nngiyabonga");
        assert_eq!(record.status, ItemStatus::Completed);
        assert_eq!(record.line_count, 2);
        assert_eq!(record.word_count, 3);
        assert_eq!(record.morpheme_count, 6);
        assert_eq!(record.size, 18);
        assert_eq!(record.file_type, "text");
        assert_eq!(
            record.analysis,
            "<LINE 1>yebo[Interj] ,[Punc]\n<LINE 2>ngi[SC1s]-ya[PresLong]-bong[VRoot]-a[VerbTerm]"
        );
        assert_eq!(record.extracted_text.as_deref(), Some("yebo ,\n\nngiyabonga"));
    }

    #[test]
    fn test_include_text_off() {
        let config = EngineConfig::builder().include_text(false).build().unwrap();
        let record = BatchProcessor::new(config)
            .unwrap()
            .analyze_item("t", "yebo");
        assert!(record.extracted_text.is_none());
    }

    #[test]
    fn test_process_texts_keeps_order() {
        let texts: Vec<String> = (0..20)
            .map(|i| if i % 2 == 0 { "yebo" } else { "cha" }.to_string())
            .collect();
        let records = processor().process_texts(&texts);
        assert_eq!(records.len(), 20);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.filename, format!("text_{}", i + 1));
            assert_eq!(record.extracted_text.as_deref(), Some(texts[i].as_str()));
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&ItemStatus::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn test_record_type_field_name() {
        let record = processor().analyze_item("t", "yebo");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["status"], "completed");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_summary() {
        let ok = processor().analyze_item("a", "yebo");
        let bad = ItemRecord::failed(
            "b.xlsx",
            3,
            "xlsx",
            &EngineError::UnsupportedFileType("xlsx".into()),
        );
        let summary = BatchSummary::from_records(&[ok, bad]);
        assert_eq!(
            summary,
            BatchSummary {
                total: 2,
                completed: 1,
                failed: 1
            }
        );
        assert!(!summary.all_completed());
    }

    #[test]
    fn test_missing_file_fails_alone() {
        let records = processor().process_files(&[PathBuf::from("/nonexistent/a.txt")]);
        assert_eq!(records[0].status, ItemStatus::Failed);
        assert_eq!(records[0].filename, "a.txt");
        assert_eq!(records[0].size, 0);
    }
}
