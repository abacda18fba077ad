//! Value types produced by analysis

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Deref;

/// Tag for single-character punctuation tokens
pub const TAG_PUNCTUATION: &str = "Punc";
/// Tag for capitalized words treated as names
pub const TAG_PROPER_NAME: &str = "ProperName";
/// Tag for a verb root split off before an extension or final vowel
pub const TAG_VERB_ROOT: &str = "VRoot";
/// Tag for the final vowel of a verb
pub const TAG_VERB_TERMINATION: &str = "VerbTerm";
/// Tag for whatever is left when no rule applies
pub const TAG_NOUN_STEM: &str = "NStem";
/// Tag for a word the analyzer produced nothing for
pub const TAG_UNKNOWN: &str = "Unknown";

/// A surface substring paired with its grammatical tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    /// The consumed (or synthesized) surface text
    pub morph: String,
    /// Grammatical label
    pub tag: String,
}

impl Morpheme {
    /// Create a morpheme
    pub fn new(morph: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            morph: morph.into(),
            tag: tag.into(),
        }
    }
}

/// Ordered morphemes of a single word
///
/// Most words split into four or fewer morphemes, so the sequence is kept
/// inline until it grows past that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordAnalysis(SmallVec<[Morpheme; 4]>);

impl WordAnalysis {
    /// Empty analysis
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Analysis holding exactly one morpheme
    pub fn single(morph: impl Into<String>, tag: impl Into<String>) -> Self {
        let mut analysis = Self::new();
        analysis.push(Morpheme::new(morph, tag));
        analysis
    }

    /// Append a morpheme
    pub fn push(&mut self, morpheme: Morpheme) {
        self.0.push(morpheme);
    }

    /// Append every morpheme from an iterator
    pub fn extend<I: IntoIterator<Item = Morpheme>>(&mut self, morphemes: I) {
        self.0.extend(morphemes);
    }

    /// Tags in emission order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|m| m.tag.as_str())
    }

    /// Consume into a plain vector
    pub fn into_vec(self) -> Vec<Morpheme> {
        self.0.into_vec()
    }
}

impl Deref for WordAnalysis {
    type Target = [Morpheme];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Morpheme> for WordAnalysis {
    fn from_iter<I: IntoIterator<Item = Morpheme>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One kept (non-blank) line of input with its analyzed words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedLine {
    /// 1-based number counting kept lines only
    pub line_number: usize,
    /// Per-word analyses in original word order
    pub words: Vec<WordAnalysis>,
}

/// Counts over a set of analyzed lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Number of kept lines
    pub lines: usize,
    /// Number of words across those lines
    pub words: usize,
    /// Number of morphemes emitted
    pub morphemes: usize,
}

impl TextStats {
    /// Compute counts for analyzed lines
    pub fn from_lines(lines: &[AnalyzedLine]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            stats.lines += 1;
            stats.words += line.words.len();
            stats.morphemes += line.words.iter().map(|w| w.len()).sum::<usize>();
            stats
        })
    }
}
