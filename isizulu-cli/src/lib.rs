//! isiZulu CLI library
//!
//! Command definitions, input resolution, output rendering and progress
//! reporting for the `isizulu` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
