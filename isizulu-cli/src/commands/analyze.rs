//! Analyze command implementation

use anyhow::Result;
use clap::Args;
use isizulu_engine::{BatchSummary, ItemRecord};
use std::path::PathBuf;

use super::{init_logging, resolve_format, EngineArgs};
use crate::error::CliError;
use crate::input::{read_source, resolve_patterns};
use crate::output::{open_output, write_records, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Text to analyze ("-" reads stdin)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else annotated)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let session = self.engine.session()?;
        let format = resolve_format(self.format, &session.config)?;
        let processor = &session.processor;

        let records: Vec<ItemRecord> = match (&self.text, self.input.is_empty()) {
            (Some(text), _) => {
                let text = if text == "-" { read_source("-")? } else { text.clone() };
                vec![processor.analyze_item("text", &text)]
            }
            (None, true) => {
                let text = read_source("-")?;
                vec![processor.analyze_item("stdin", &text)]
            }
            (None, false) => {
                let files = resolve_patterns(&self.input)?;
                log::info!("Analyzing {} files", files.len());

                let mut progress = ProgressReporter::new(self.quiet);
                progress.init_items(files.len() as u64);
                let records = processor.process_files_with(&files, |r| progress.item_done(r));
                progress.finish(&BatchSummary::from_records(&records));
                records
            }
        };

        let writer = open_output(self.output.as_deref())?;
        write_records(&records, format, writer)?;

        let summary = BatchSummary::from_records(&records);
        log::info!(
            "{} items: {} completed, {} failed",
            summary.total,
            summary.completed,
            summary.failed
        );
        if summary.all_completed() {
            Ok(())
        } else {
            Err(CliError::ItemsFailed {
                failed: summary.failed,
                total: summary.total,
            }
            .into())
        }
    }
}
