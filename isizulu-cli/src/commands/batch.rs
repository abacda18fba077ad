//! Batch command implementation

use anyhow::Result;
use clap::Args;
use isizulu_engine::BatchSummary;
use std::path::PathBuf;

use super::{init_logging, EngineArgs};
use crate::error::CliError;
use crate::input::read_payload;
use crate::output::{open_output, write_records, OutputFormat};

/// Arguments for the batch command
///
/// The payload is a JSON array whose items are strings or objects with a
/// `text` field and an optional `name`.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// JSON payload file ("-" reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let payload = read_payload(&self.input)?;
        let session = self.engine.session()?;
        let records = session.processor.process_json_payload(&payload)?;

        let writer = open_output(self.output.as_deref())?;
        write_records(&records, self.format, writer)?;

        let summary = BatchSummary::from_records(&records);
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
