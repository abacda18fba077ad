//! Fast-path word classification
//!
//! Checks that resolve a word outright before any rule stripping runs.
//! They are tried in [`FastPath::ORDER`]; the first that applies wins.

use crate::tables::RuleTables;
use crate::types::{WordAnalysis, TAG_PROPER_NAME, TAG_PUNCTUATION};

/// Words that are tagged as punctuation when they stand alone
pub const PUNCTUATION: [&str; 6] = [".", ",", "!", "?", ";", ":"];

/// Minimum character count (exclusive) for the proper-name heuristic
const PROPER_NAME_MIN_CHARS: usize = 2;

/// One fast-path check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastPath {
    /// The raw word is a single punctuation mark
    Punctuation,
    /// The lowercased word is a vocabulary key
    Vocabulary,
    /// The raw word is capitalized and longer than two characters
    ProperName,
}

impl FastPath {
    /// Order in which the checks are tried
    pub const ORDER: [FastPath; 3] = [
        FastPath::Punctuation,
        FastPath::Vocabulary,
        FastPath::ProperName,
    ];

    /// Try this check against a word
    pub fn apply(self, tables: &RuleTables, word: &str, lowered: &str) -> Option<WordAnalysis> {
        match self {
            FastPath::Punctuation => PUNCTUATION
                .iter()
                .any(|p| *p == word)
                .then(|| WordAnalysis::single(word, TAG_PUNCTUATION)),
            FastPath::Vocabulary => tables
                .vocabulary(lowered)
                .map(|entry| WordAnalysis::single(lowered, entry.tag.as_str())),
            FastPath::ProperName => {
                let capitalized = word.chars().next().is_some_and(char::is_uppercase);
                (capitalized && word.chars().count() > PROPER_NAME_MIN_CHARS)
                    .then(|| WordAnalysis::single(word, TAG_PROPER_NAME))
            }
        }
    }
}

/// Outcome of classifying a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A fast path produced the final analysis
    Resolved(FastPath, WordAnalysis),
    /// No fast path applied; segment the lowercased word
    Segment(String),
}

/// Applies the fast paths against a set of rule tables
#[derive(Debug, Clone, Copy)]
pub struct WordClassifier<'t> {
    tables: &'t RuleTables,
}

impl<'t> WordClassifier<'t> {
    pub fn new(tables: &'t RuleTables) -> Self {
        Self { tables }
    }

    pub fn classify(&self, word: &str) -> Classification {
        let lowered = word.to_lowercase();
        FastPath::ORDER
            .iter()
            .find_map(|path| {
                path.apply(self.tables, word, &lowered)
                    .map(|analysis| Classification::Resolved(*path, analysis))
            })
            .unwrap_or(Classification::Segment(lowered))
    }
}
