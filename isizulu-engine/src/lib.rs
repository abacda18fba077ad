//! Extraction, batch orchestration and export around the isiZulu analyzer
//!
//! The core crate turns text into morpheme analyses and cannot fail. This
//! crate adds the layers that can: turning documents into text, running
//! many items with per-item failure isolation, and rendering the resulting
//! records.
//!
//! ```no_run
//! use isizulu_engine::{export_to_string, BatchProcessor, EngineConfig, ExportFormat};
//!
//! let processor = BatchProcessor::new(EngineConfig::default())?;
//! let records = processor.process_texts(&["Ngiyabonga kakhulu".to_string()]);
//! print!("{}", export_to_string(&records, ExportFormat::Csv)?);
//! # Ok::<(), isizulu_engine::EngineError>(())
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;

pub use batch::{parse_batch_payload, BatchItem, BatchProcessor, BatchSummary, ItemRecord, ItemStatus};
pub use config::{EngineConfig, EngineConfigBuilder};
pub use error::{EngineError, Result};
pub use export::{export, export_to_string, ExportFormat};
pub use extract::{DefaultExtractor, FileKind, TextExtractor};

// Re-export from core for convenience
pub use isizulu_core::{ExecutionMode, RuleTables};
