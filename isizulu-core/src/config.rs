//! Configuration structures and validation
//!
//! This module defines the TOML schema for rule tables. Every collection is
//! an array of tables so that declaration order survives parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::tables::NounClass;

/// Root rule-table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub noun_prefixes: Vec<NounPrefixEntry>,
    #[serde(default)]
    pub basic_prefixes: BTreeMap<String, String>,
    #[serde(default)]
    pub common_morphemes: Vec<TaggedEntry>,
    #[serde(default)]
    pub verb_extensions: Vec<TaggedEntry>,
    #[serde(default)]
    pub quantifiers: Vec<TaggedEntry>,
    #[serde(default)]
    pub vocabulary: Vec<TaggedEntry>,
}

/// Table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// A noun-class prefix declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounPrefixEntry {
    pub pattern: String,
    pub class: u8,
}

/// A pattern with an explicit tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedEntry {
    pub pattern: String,
    pub tag: String,
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("static regex"))
}

impl RulesConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }

        for entry in &self.noun_prefixes {
            if entry.pattern.is_empty() {
                return Err("empty pattern in noun_prefixes".to_string());
            }
            NounClass::new(entry.class).ok_or_else(|| {
                format!(
                    "unknown noun class {} for prefix '{}'",
                    entry.class, entry.pattern
                )
            })?;
        }

        for (key, prefix) in &self.basic_prefixes {
            let class = key
                .parse::<u8>()
                .ok()
                .and_then(NounClass::new)
                .ok_or_else(|| format!("basic_prefixes key '{key}' is not a noun class"))?;
            if prefix.is_empty() {
                return Err(format!("empty basic prefix for class {}", class.get()));
            }
        }

        let collections = [
            ("common_morphemes", &self.common_morphemes),
            ("verb_extensions", &self.verb_extensions),
            ("quantifiers", &self.quantifiers),
            ("vocabulary", &self.vocabulary),
        ];
        for (name, entries) in collections {
            for entry in entries {
                if entry.pattern.is_empty() {
                    return Err(format!("empty pattern in {name}"));
                }
                if !tag_regex().is_match(&entry.tag) {
                    return Err(format!(
                        "invalid tag '{}' for pattern '{}' in {name}",
                        entry.tag, entry.pattern
                    ));
                }
            }
        }

        Ok(())
    }
}
