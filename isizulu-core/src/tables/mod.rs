//! Rule tables for morpheme segmentation
//!
//! All tables are built once and then only read. Lookups never allocate.

pub mod loader;
pub mod noun_class;
pub mod rule;

pub use noun_class::{BasicPrefixes, NounClass, NounPrefix};
pub use rule::{OrderedTable, Pattern, RuleEntry, RuleTable};

use crate::config::RulesConfig;
use crate::error::{CoreError, Result};
use std::path::Path;

/// Table of noun-class prefixes
pub type NounPrefixTable = OrderedTable<NounPrefix>;

/// The five rule collections plus the basic-prefix lookup
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    code: String,
    name: String,
    noun_prefixes: NounPrefixTable,
    basic_prefixes: BasicPrefixes,
    common_morphemes: RuleTable,
    verb_extensions: RuleTable,
    quantifiers: RuleTable,
    vocabulary: RuleTable,
}

impl RuleTables {
    /// Start building tables in code
    pub fn builder() -> RuleTablesBuilder {
        RuleTablesBuilder::default()
    }

    /// Build from a parsed configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        config.validate().map_err(CoreError::InvalidConfig)?;

        let mut builder = Self::builder()
            .code(&config.metadata.code)
            .name(&config.metadata.name);

        for entry in &config.noun_prefixes {
            builder = builder.noun_prefix(&entry.pattern, entry.class);
        }
        for (key, prefix) in &config.basic_prefixes {
            // validate() already checked every key parses to a noun class
            if let Ok(class) = key.parse::<u8>() {
                builder = builder.basic_prefix(class, prefix);
            }
        }
        for entry in &config.common_morphemes {
            builder = builder.common_morpheme(&entry.pattern, &entry.tag);
        }
        for entry in &config.verb_extensions {
            builder = builder.verb_extension(&entry.pattern, &entry.tag);
        }
        for entry in &config.quantifiers {
            builder = builder.quantifier(&entry.pattern, &entry.tag);
        }
        for entry in &config.vocabulary {
            builder = builder.vocabulary(&entry.pattern, &entry.tag);
        }

        builder.build()
    }

    /// Process-wide built-in isiZulu tables
    pub fn builtin() -> std::sync::Arc<RuleTables> {
        loader::builtin()
    }

    /// Parse and build from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Language code from the table metadata
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name from the table metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First noun-class prefix, in declaration order, that `remaining` starts with
    pub fn first_noun_prefix(&self, remaining: &str) -> Option<&NounPrefix> {
        self.noun_prefixes.first_prefix_of(remaining)
    }

    /// Basic prefix synthesized for a noun class
    pub fn basic_prefix(&self, class: NounClass) -> Option<&str> {
        self.basic_prefixes.get(class)
    }

    /// First common morpheme, in declaration order, that `remaining` starts with
    pub fn first_common_morpheme(&self, remaining: &str) -> Option<&RuleEntry> {
        self.common_morphemes.first_prefix_of(remaining)
    }

    /// First verb extension, in declaration order, found past index zero
    pub fn first_contained_extension(&self, remaining: &str) -> Option<(usize, &RuleEntry)> {
        self.verb_extensions.first_contained(remaining)
    }

    /// Quantifier equal to `remaining`
    pub fn quantifier(&self, remaining: &str) -> Option<&RuleEntry> {
        self.quantifiers.exact(remaining)
    }

    /// Vocabulary entry whose key equals `word` as given
    ///
    /// Callers pass a lowercased word; keys are compared as declared, so a
    /// mixed-case key never matches.
    pub fn vocabulary(&self, word: &str) -> Option<&RuleEntry> {
        self.vocabulary.exact(word)
    }

    pub fn noun_prefixes(&self) -> &NounPrefixTable {
        &self.noun_prefixes
    }

    pub fn basic_prefixes(&self) -> &BasicPrefixes {
        &self.basic_prefixes
    }

    pub fn common_morphemes(&self) -> &RuleTable {
        &self.common_morphemes
    }

    pub fn verb_extensions(&self) -> &RuleTable {
        &self.verb_extensions
    }

    pub fn quantifiers(&self) -> &RuleTable {
        &self.quantifiers
    }

    pub fn vocabulary_table(&self) -> &RuleTable {
        &self.vocabulary
    }

    /// Every redeclared pattern as `(collection, pattern)`
    pub fn shadowed(&self) -> Vec<(&'static str, &str)> {
        let collections: [(&'static str, &[String]); 5] = [
            ("noun_prefixes", self.noun_prefixes.shadowed()),
            ("common_morphemes", self.common_morphemes.shadowed()),
            ("verb_extensions", self.verb_extensions.shadowed()),
            ("quantifiers", self.quantifiers.shadowed()),
            ("vocabulary", self.vocabulary.shadowed()),
        ];
        collections
            .into_iter()
            .flat_map(|(name, patterns)| patterns.iter().map(move |p| (name, p.as_str())))
            .collect()
    }
}

/// Builder for [`RuleTables`]
///
/// Entries are kept in the order the builder methods are called.
#[derive(Debug, Default)]
pub struct RuleTablesBuilder {
    tables: RuleTables,
    errors: Vec<String>,
}

impl RuleTablesBuilder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.tables.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.tables.name = name.into();
        self
    }

    /// Add a noun-class prefix
    pub fn noun_prefix(mut self, pattern: impl Into<String>, class: u8) -> Self {
        let pattern = pattern.into();
        match NounClass::new(class) {
            Some(class) => self.tables.noun_prefixes.insert(NounPrefix::new(pattern, class)),
            None => self
                .errors
                .push(format!("unknown noun class {class} for prefix '{pattern}'")),
        }
        self
    }

    /// Set the basic prefix for a noun class
    pub fn basic_prefix(mut self, class: u8, prefix: impl Into<String>) -> Self {
        match NounClass::new(class) {
            Some(class) => self.tables.basic_prefixes.insert(class, prefix),
            None => self
                .errors
                .push(format!("unknown noun class {class} for basic prefix")),
        }
        self
    }

    pub fn common_morpheme(mut self, pattern: impl Into<String>, tag: impl Into<String>) -> Self {
        self.tables
            .common_morphemes
            .insert(RuleEntry::new(pattern, tag));
        self
    }

    pub fn verb_extension(mut self, pattern: impl Into<String>, tag: impl Into<String>) -> Self {
        self.tables
            .verb_extensions
            .insert(RuleEntry::new(pattern, tag));
        self
    }

    pub fn quantifier(mut self, pattern: impl Into<String>, tag: impl Into<String>) -> Self {
        self.tables.quantifiers.insert(RuleEntry::new(pattern, tag));
        self
    }

    pub fn vocabulary(mut self, pattern: impl Into<String>, tag: impl Into<String>) -> Self {
        self.tables.vocabulary.insert(RuleEntry::new(pattern, tag));
        self
    }

    /// Finish building
    ///
    /// Empty patterns would match every word without consuming anything, so
    /// they are rejected here along with empty basic prefixes and unknown
    /// noun classes.
    pub fn build(mut self) -> Result<RuleTables> {
        let t = &self.tables;
        for (class, prefix) in t.basic_prefixes.iter() {
            if prefix.is_empty() {
                self.errors
                    .push(format!("empty basic prefix for class {}", class.get()));
            }
        }
        let has_empty = t.noun_prefixes.iter().any(|e| e.pattern.is_empty())
            || [
                &t.common_morphemes,
                &t.verb_extensions,
                &t.quantifiers,
                &t.vocabulary,
            ]
            .iter()
            .any(|table| table.iter().any(|e| e.pattern.is_empty()));
        if has_empty {
            self.errors.push("empty pattern".to_string());
        }

        if self.errors.is_empty() {
            Ok(self.tables)
        } else {
            Err(CoreError::InvalidConfig(self.errors.join("; ")))
        }
    }
}
