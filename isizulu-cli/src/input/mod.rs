//! Input handling module

pub mod glob_resolver;
pub mod reader;

pub use glob_resolver::resolve_patterns;
pub use reader::{read_payload, read_source};
