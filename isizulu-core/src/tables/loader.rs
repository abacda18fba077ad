//! Built-in rule tables
//!
//! The default isiZulu tables are embedded at compile time and parsed once
//! on first use.

use std::sync::{Arc, OnceLock};

use super::RuleTables;
use crate::error::Result;

/// Embedded default rule tables
static BUILTIN: OnceLock<Arc<RuleTables>> = OnceLock::new();

const BUILTIN_TOML: &str = include_str!("../../configs/zulu.toml");

/// Shared handle to the built-in tables
pub fn builtin() -> Arc<RuleTables> {
    BUILTIN
        .get_or_init(|| match load_embedded() {
            Ok(tables) => Arc::new(tables),
            // covered by the loader tests
            Err(e) => panic!("embedded rule tables are invalid: {e}"),
        })
        .clone()
}

fn load_embedded() -> Result<RuleTables> {
    let tables = RuleTables::from_toml_str(BUILTIN_TOML)?;
    log::debug!(
        "loaded built-in rule tables '{}' ({} noun prefixes, {} vocabulary entries)",
        tables.code(),
        tables.noun_prefixes().len(),
        tables.vocabulary_table().len()
    );
    Ok(tables)
}

/// The embedded TOML source, for tools that want to show or copy it
pub fn builtin_source() -> &'static str {
    BUILTIN_TOML
}
