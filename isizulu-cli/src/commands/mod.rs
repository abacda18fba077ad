//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use isizulu_core::{ExecutionMode, RuleTables};
use isizulu_engine::{BatchProcessor, EngineConfig};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::OutputFormat;

pub mod analyze;
pub mod batch;
pub mod list;
pub mod validate;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze files or a text and print morpheme tags
    Analyze(analyze::AnalyzeArgs),

    /// Analyze individual words
    Word(word::WordArgs),

    /// Run a JSON batch request
    Batch(batch::BatchArgs),

    /// Check a rule-table file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List output formats and readable input types
    Formats,

    /// Print the built-in rule tables in match order
    Tables {
        /// Print the embedded TOML document instead
        #[arg(long)]
        toml: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Word(args) => args.execute(),
            Commands::Batch(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand),
        }
    }
}

/// Execution modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    Sequential,
    Parallel,
    Adaptive,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => ExecutionMode::Sequential,
            ModeArg::Parallel => ExecutionMode::Parallel,
            ModeArg::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

/// Options shared by commands that run the analyzer
#[derive(Debug, Clone, Default, Args)]
pub struct EngineArgs {
    /// Rule-table file replacing the built-in tables
    #[arg(long, value_name = "FILE", env = "ISIZULU_RULES")]
    pub rules: Option<PathBuf>,

    /// How lines are scheduled
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of worker threads (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Everything a command needs to run a batch
pub struct Session {
    pub processor: BatchProcessor,
    pub config: CliConfig,
}

impl EngineArgs {
    /// Merge the config file with command-line flags and build a processor
    pub fn session(&self) -> Result<Session> {
        let config = CliConfig::load(self.config.as_deref())?;
        let processing = &config.processing;

        let mode = match self.mode {
            Some(mode) => mode.into(),
            None => processing
                .execution_mode
                .parse::<ExecutionMode>()
                .map_err(|e| CliError::ConfigError(e.to_string()))?,
        };
        let max_file_bytes = processing
            .max_file_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| CliError::ConfigError("max_file_mb too large".to_string()))?;
        let threads = self
            .threads
            .or((processing.threads > 0).then_some(processing.threads));

        let engine_config = EngineConfig::builder()
            .execution_mode(mode)
            .threads(threads)
            .parallel_threshold_kb(processing.parallel_threshold_kb)
            .max_file_bytes(max_file_bytes)
            .include_text(config.output.include_text)
            .build()?;
        log::debug!(
            "engine: mode={mode}, threads={}",
            threads.unwrap_or_else(num_cpus::get)
        );

        let processor = match self.rules.as_ref().or(processing.rules.as_ref()) {
            Some(path) => {
                let tables = load_rules(path)?;
                BatchProcessor::with_tables(tables, engine_config)?
            }
            None => BatchProcessor::new(engine_config)?,
        };

        Ok(Session { processor, config })
    }
}

/// Load a rule-table file
pub fn load_rules(path: &std::path::Path) -> Result<Arc<RuleTables>> {
    let tables = RuleTables::from_file(path)
        .with_context(|| format!("Failed to load rules: {}", path.display()))?;
    log::info!("loaded rule tables '{}' from {}", tables.code(), path.display());
    Ok(Arc::new(tables))
}

/// Pick the output format: flag, then config file
pub fn resolve_format(flag: Option<OutputFormat>, config: &CliConfig) -> Result<OutputFormat> {
    match flag {
        Some(format) => Ok(format),
        None => Ok(config.output.default_format.parse()?),
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` wins over the flags. Quiet mode leaves the logger off.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // a logger may already be installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
