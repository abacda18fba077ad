//! Rule-driven morpheme segmentation for isiZulu text
//!
//! Every word is matched against ordered tables of noun-class prefixes,
//! common morphemes, verb extensions, quantifiers and a small vocabulary,
//! and stripped greedily from the left into `(morph, tag)` pairs.
//!
//! # Architecture
//!
//! - **Tables**: immutable, declaration-ordered rule collections, loaded
//!   from TOML (the built-in isiZulu tables are embedded)
//! - **Classifier**: punctuation, vocabulary and proper-name fast paths
//! - **Segmenter**: the stripping state machine
//! - **Analyzer**: line and word splitting, sequential or parallel
//! - **Formatter**: the canonical `<LINE n>morph[TAG]-...` rendering
//!
//! # Example
//!
//! ```rust
//! use isizulu_core::{analyze_text, analyze_word};
//!
//! let word = analyze_word("abantu");
//! assert_eq!(word.to_string(), "a[NPrePre2]-ba[BPre2]-ntu[NStem]");
//!
//! let text = analyze_text("yebo ,\n\nngiyabonga");
//! assert_eq!(
//!     text,
//!     "<LINE 1>yebo[Interj] ,[Punc]\n<LINE 2>ngi[SC1s]-ya[PresLong]-bong[VRoot]-a[VerbTerm]"
//! );
//! ```

pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod format;
pub mod segmenter;
pub mod tables;
pub mod types;

pub use analyzer::{AnalyzerConfig, ExecutionMode, LineAnalyzer};
pub use classifier::{Classification, FastPath, WordClassifier};
pub use error::{CoreError, Result};
pub use format::ResultFormatter;
pub use segmenter::{Rule, SegmentationEngine, Step, Trace};
pub use tables::{NounClass, RuleEntry, RuleTables, RuleTablesBuilder};
pub use types::{AnalyzedLine, Morpheme, TextStats, WordAnalysis};

/// Analyze one word with the built-in tables
pub fn analyze_word(word: &str) -> WordAnalysis {
    SegmentationEngine::builtin().analyze_word(word)
}

/// Analyze a text with the built-in tables and render it
pub fn analyze_text(text: &str) -> String {
    LineAnalyzer::default().analyze_text(text)
}
