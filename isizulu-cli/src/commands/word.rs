//! Word command implementation

use anyhow::Result;
use clap::Args;
use isizulu_core::{ResultFormatter, SegmentationEngine, Step};
use std::io::Write;
use std::path::PathBuf;

use super::load_rules;

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// Words to analyze
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,

    /// Rule-table file replacing the built-in tables
    #[arg(long, value_name = "FILE", env = "ISIZULU_RULES")]
    pub rules: Option<PathBuf>,

    /// Show which check produced each morpheme
    #[arg(short, long)]
    pub explain: bool,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> Result<()> {
        let engine = match &self.rules {
            Some(path) => SegmentationEngine::new(load_rules(path)?),
            None => SegmentationEngine::builtin(),
        };

        let mut out = std::io::stdout().lock();
        for word in &self.words {
            let analysis = engine.analyze_word(word);
            writeln!(out, "{word}\t{}", ResultFormatter::format_word(&analysis))?;

            if self.explain {
                for trace in engine.explain(word) {
                    let step = match trace.step {
                        Step::FastPath(path) => format!("{path:?}"),
                        Step::Rule(rule) => format!("{rule:?}"),
                        Step::Unknown => "Unknown".to_string(),
                    };
                    writeln!(
                        out,
                        "  {step:<16} {:<14} -> {}",
                        trace.input,
                        ResultFormatter::format_word(&trace.emitted)
                    )?;
                }
            }
        }
        Ok(())
    }
}
