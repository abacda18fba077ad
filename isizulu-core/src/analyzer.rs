//! Line-level analysis of text blobs
//!
//! Text is split on `\n`; blank and whitespace-only lines are dropped and
//! the remaining lines are renumbered from 1. Each kept line is split on
//! whitespace and every word goes through the segmentation engine.
//!
//! Lines are independent, so they can be analyzed on a rayon pool. Results
//! are always collected back in line order; the rendered output does not
//! depend on the execution mode.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{CoreError, Result};
use crate::format::ResultFormatter;
use crate::segmenter::SegmentationEngine;
use crate::tables::RuleTables;
use crate::types::AnalyzedLine;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How lines are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One line after another on the calling thread
    Sequential,
    /// Lines spread over worker threads
    Parallel,
    /// Parallel above the configured size threshold
    #[default]
    Adaptive,
}

impl ExecutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(ExecutionMode::Sequential),
            "parallel" => Ok(ExecutionMode::Parallel),
            "adaptive" => Ok(ExecutionMode::Adaptive),
            _ => Err(CoreError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick sequential or parallel for a text of the given byte length
pub fn auto_select(text_len: usize, threshold: usize) -> ExecutionMode {
    if text_len < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub mode: ExecutionMode,
    /// Worker threads for a dedicated pool (None = rayon global pool)
    pub threads: Option<usize>,
    /// Byte size at which adaptive mode switches to parallel
    pub parallel_threshold: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: 64 * 1024, // 64KB
        }
    }
}

/// Splits text into lines and words and analyzes each word
#[derive(Debug, Clone)]
pub struct LineAnalyzer {
    engine: SegmentationEngine,
    config: AnalyzerConfig,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Default for LineAnalyzer {
    fn default() -> Self {
        Self::new(SegmentationEngine::builtin())
    }
}

impl LineAnalyzer {
    /// Analyzer with the default configuration
    pub fn new(engine: SegmentationEngine) -> Self {
        Self {
            engine,
            config: AnalyzerConfig::default(),
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Analyzer over custom rule tables
    pub fn with_tables(tables: Arc<RuleTables>) -> Self {
        Self::new(SegmentationEngine::new(tables))
    }

    /// Analyzer with an explicit configuration
    ///
    /// A dedicated thread pool is created when `threads` is set.
    pub fn with_config(engine: SegmentationEngine, config: AnalyzerConfig) -> Result<Self> {
        #[cfg(feature = "parallel")]
        let pool = match config.threads {
            Some(threads) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("isizulu-worker-{i}"))
                    .build()
                    .map_err(|e| CoreError::ThreadPool(e.to_string()))?,
            )),
            None => None,
        };

        Ok(Self {
            engine,
            config,
            #[cfg(feature = "parallel")]
            pool,
        })
    }

    pub fn engine(&self) -> &SegmentationEngine {
        &self.engine
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Worker count that parallel analysis would use
    pub fn thread_count(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            match &self.pool {
                Some(pool) => pool.current_num_threads(),
                None => num_cpus::get(),
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            1
        }
    }

    /// Mode actually used for a text
    pub fn resolve_mode(&self, text: &str) -> ExecutionMode {
        self.resolve(self.config.mode, text)
    }

    fn resolve(&self, mode: ExecutionMode, text: &str) -> ExecutionMode {
        match mode {
            ExecutionMode::Adaptive => auto_select(text.len(), self.config.parallel_threshold),
            mode => mode,
        }
    }

    /// Analyze every kept line of `text`
    pub fn analyze_lines(&self, text: &str) -> Vec<AnalyzedLine> {
        self.analyze_lines_with_mode(text, self.config.mode)
    }

    /// Analyze with an explicit mode, ignoring the configured one
    pub fn analyze_lines_with_mode(&self, text: &str, mode: ExecutionMode) -> Vec<AnalyzedLine> {
        let mode = self.resolve(mode, text);
        let lines = kept_lines(text);
        log::debug!("analyzing {} lines ({:?})", lines.len(), mode);

        match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.analyze_parallel(&lines),
            _ => lines
                .iter()
                .map(|(number, line)| self.analyze_line(*number, line))
                .collect(),
        }
    }

    /// Analyze and render in the canonical `<LINE n>` format
    pub fn analyze_text(&self, text: &str) -> String {
        ResultFormatter::format_text(&self.analyze_lines(text))
    }

    /// Analyze one line that is already known to be non-blank
    pub fn analyze_line(&self, line_number: usize, line: &str) -> AnalyzedLine {
        AnalyzedLine {
            line_number,
            words: line
                .split_whitespace()
                .map(|word| self.engine.analyze_word(word))
                .collect(),
        }
    }

    #[cfg(feature = "parallel")]
    fn analyze_parallel(&self, lines: &[(usize, &str)]) -> Vec<AnalyzedLine> {
        let run = || -> Vec<AnalyzedLine> {
            lines
                .par_iter()
                .map(|(number, line)| self.analyze_line(*number, line))
                .collect()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

/// Non-blank lines of `text` numbered from 1 in order
pub fn kept_lines(text: &str) -> Vec<(usize, &str)> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kept_lines_renumbers() {
        let lines = kept_lines("a\n\n   \nb\n\tc\n");
        assert_eq!(lines, vec![(1, "a"), (2, "b"), (3, "\tc")]);
    }

    #[test]
    fn test_kept_lines_empty_text() {
        assert!(kept_lines("").is_empty());
        assert!(kept_lines("\n\n \n").is_empty());
    }

    #[test]
    fn test_blank_line_does_not_consume_number() {
        let analyzer = LineAnalyzer::default();
        assert_eq!(
            analyzer.analyze_text("jongo.\n\nAfrika"),
            "<LINE 1>jongo.[NStem]\n<LINE 2>Afrika[ProperName]"
        );
    }

    #[test]
    fn test_words_split_on_whitespace_runs() {
        let analyzer = LineAnalyzer::default();
        let lines = analyzer.analyze_lines("  yebo \t ,   abantu  ");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].words.len(), 3);
        assert_eq!(
            analyzer.analyze_text("  yebo \t ,   abantu  "),
            "<LINE 1>yebo[Interj] ,[Punc] a[NPrePre2]-ba[BPre2]-ntu[NStem]"
        );
    }

    #[test]
    fn test_carriage_returns_are_whitespace() {
        let analyzer = LineAnalyzer::default();
        assert_eq!(
            analyzer.analyze_text("yebo\r\n\r\ncha\r\n"),
            "<LINE 1>yebo[Interj]\n<LINE 2>cha[Interj]"
        );
    }

    #[test]
    fn test_empty_text_renders_empty() {
        assert_eq!(LineAnalyzer::default().analyze_text(""), "");
    }

    #[test]
    fn test_execution_mode_from_str() {
        assert_eq!("Parallel".parse::<ExecutionMode>().unwrap(), ExecutionMode::Parallel);
        assert_eq!(ExecutionMode::Adaptive.to_string(), "adaptive");
        assert!("turbo".parse::<ExecutionMode>().is_err());
    }

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(10, 1024), ExecutionMode::Sequential);
        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(4096, 1024), ExecutionMode::Parallel);
    }

    #[test]
    fn test_modes_agree() {
        let text = "Ngiyabonga kakhulu , mngane wami .\n\nabantu bonke bathandwa\numuntu onke !";
        let analyzer = LineAnalyzer::default();
        let sequential = analyzer.analyze_lines_with_mode(text, ExecutionMode::Sequential);
        let parallel = analyzer.analyze_lines_with_mode(text, ExecutionMode::Parallel);
        assert_eq!(sequential, parallel);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_dedicated_pool() {
        let analyzer = LineAnalyzer::with_config(
            SegmentationEngine::builtin(),
            AnalyzerConfig {
                mode: ExecutionMode::Parallel,
                threads: Some(2),
                parallel_threshold: 0,
            },
        )
        .unwrap();
        assert_eq!(analyzer.thread_count(), 2);
        assert_eq!(analyzer.analyze_text("yebo"), "<LINE 1>yebo[Interj]");
    }
}
