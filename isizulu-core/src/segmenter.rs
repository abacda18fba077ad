//! Greedy morpheme stripping
//!
//! A word is consumed left to right through a single cursor. Each step
//! tries the rules of [`Rule::ORDER`] against what is left of the word and
//! commits to the first that applies; there is no backtracking. Every rule
//! either shortens the cursor, empties it, or stops the loop, so a word of
//! `n` characters takes at most `n` steps.

use smallvec::{smallvec, SmallVec};
use std::sync::Arc;

use crate::classifier::{Classification, FastPath, WordClassifier};
use crate::tables::{loader, RuleTables};
use crate::types::{
    Morpheme, WordAnalysis, TAG_NOUN_STEM, TAG_UNKNOWN, TAG_VERB_ROOT, TAG_VERB_TERMINATION,
};

/// Final vowel split off a verb
const VERB_TERMINATION: char = 'a';

/// Stripping rule, one per transition of the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Remaining text starts with a noun-class prefix
    NounPrefix,
    /// Remaining text starts with a common morpheme
    CommonMorpheme,
    /// A verb extension occurs past the first character
    VerbExtension,
    /// Remaining text ends with the final vowel
    VerbTermination,
    /// Remaining text is exactly a quantifier
    Quantifier,
    /// Nothing else applied
    FallbackStem,
}

/// Where the cursor goes after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor<'w> {
    /// Keep stripping from this suffix of the word
    Continue(&'w str),
    /// Stop immediately
    Stop,
}

/// Morphemes emitted by one rule plus the next cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<'w> {
    pub emitted: SmallVec<[Morpheme; 2]>,
    pub next: Cursor<'w>,
}

impl Rule {
    /// Order in which rules are tried at every step
    pub const ORDER: [Rule; 6] = [
        Rule::NounPrefix,
        Rule::CommonMorpheme,
        Rule::VerbExtension,
        Rule::VerbTermination,
        Rule::Quantifier,
        Rule::FallbackStem,
    ];

    /// Try this rule against the remaining text
    pub fn apply<'w>(self, tables: &RuleTables, remaining: &'w str) -> Option<Transition<'w>> {
        match self {
            Rule::NounPrefix => {
                let prefix = tables.first_noun_prefix(remaining)?;
                let augment = prefix.pattern.chars().next()?;
                let mut emitted: SmallVec<[Morpheme; 2]> =
                    smallvec![Morpheme::new(augment, prefix.tag.as_str())];
                if prefix.pattern.chars().count() > 1 {
                    if let Some(basic) = tables.basic_prefix(prefix.class) {
                        emitted.push(Morpheme::new(basic, prefix.class.basic_prefix_tag()));
                    }
                }
                // The whole pattern is consumed even though only its first
                // character is emitted.
                Some(Transition {
                    emitted,
                    next: Cursor::Continue(&remaining[prefix.pattern.len()..]),
                })
            }
            Rule::CommonMorpheme => {
                let entry = tables.first_common_morpheme(remaining)?;
                Some(Transition {
                    emitted: smallvec![Morpheme::new(entry.pattern.as_str(), entry.tag.as_str())],
                    next: Cursor::Continue(&remaining[entry.pattern.len()..]),
                })
            }
            Rule::VerbExtension => {
                let (index, entry) = tables.first_contained_extension(remaining)?;
                Some(Transition {
                    emitted: smallvec![
                        Morpheme::new(&remaining[..index], TAG_VERB_ROOT),
                        Morpheme::new(entry.pattern.as_str(), entry.tag.as_str()),
                    ],
                    next: Cursor::Continue(&remaining[index + entry.pattern.len()..]),
                })
            }
            Rule::VerbTermination => {
                let root = remaining.strip_suffix(VERB_TERMINATION)?;
                if root.is_empty() {
                    return None;
                }
                Some(Transition {
                    emitted: smallvec![
                        Morpheme::new(root, TAG_VERB_ROOT),
                        Morpheme::new(VERB_TERMINATION, TAG_VERB_TERMINATION),
                    ],
                    next: Cursor::Continue(""),
                })
            }
            Rule::Quantifier => {
                let entry = tables.quantifier(remaining)?;
                Some(Transition {
                    emitted: smallvec![Morpheme::new(remaining, entry.tag.as_str())],
                    next: Cursor::Continue(""),
                })
            }
            Rule::FallbackStem => Some(fallback(remaining)),
        }
    }
}

fn fallback(remaining: &str) -> Transition<'_> {
    Transition {
        emitted: smallvec![Morpheme::new(remaining, TAG_NOUN_STEM)],
        next: Cursor::Stop,
    }
}

/// Which check produced part of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A fast path resolved the whole word
    FastPath(FastPath),
    /// A stripping rule fired
    Rule(Rule),
    /// The word produced no morphemes
    Unknown,
}

/// One entry of an explained analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub step: Step,
    /// Remaining text the step was applied to
    pub input: String,
    pub emitted: Vec<Morpheme>,
}

/// Word analyzer over a shared set of rule tables
///
/// Holds no mutable state, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct SegmentationEngine {
    tables: Arc<RuleTables>,
}

impl Default for SegmentationEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SegmentationEngine {
    pub fn new(tables: Arc<RuleTables>) -> Self {
        Self { tables }
    }

    /// Engine over the built-in isiZulu tables
    pub fn builtin() -> Self {
        Self::new(loader::builtin())
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Analyze a single whitespace-free word
    ///
    /// Never fails and never returns an empty analysis.
    pub fn analyze_word(&self, word: &str) -> WordAnalysis {
        match WordClassifier::new(&self.tables).classify(word) {
            Classification::Resolved(_, analysis) => analysis,
            Classification::Segment(lowered) => {
                let analysis = self.segment(&lowered);
                if analysis.is_empty() {
                    WordAnalysis::single(word, TAG_UNKNOWN)
                } else {
                    analysis
                }
            }
        }
    }

    /// Run the stripping loop on an already lowercased word
    pub fn segment(&self, lowered: &str) -> WordAnalysis {
        let mut analysis = WordAnalysis::new();
        self.run(lowered, |_, _, transition| {
            analysis.extend(transition.emitted.iter().cloned())
        });
        analysis
    }

    /// Analyze a word and record which check produced each morpheme
    pub fn explain(&self, word: &str) -> Vec<Trace> {
        let lowered = match WordClassifier::new(&self.tables).classify(word) {
            Classification::Resolved(path, analysis) => {
                return vec![Trace {
                    step: Step::FastPath(path),
                    input: word.to_string(),
                    emitted: analysis.into_vec(),
                }]
            }
            Classification::Segment(lowered) => lowered,
        };

        let mut traces = Vec::new();
        self.run(&lowered, |rule, input, transition| {
            traces.push(Trace {
                step: Step::Rule(rule),
                input: input.to_string(),
                emitted: transition.emitted.to_vec(),
            })
        });
        if traces.is_empty() {
            traces.push(Trace {
                step: Step::Unknown,
                input: word.to_string(),
                emitted: vec![Morpheme::new(word, TAG_UNKNOWN)],
            });
        }
        traces
    }

    fn run<'w, F>(&self, lowered: &'w str, mut on_step: F)
    where
        F: FnMut(Rule, &'w str, &Transition<'w>),
    {
        let mut remaining = lowered;
        while !remaining.is_empty() {
            let (rule, transition) = Rule::ORDER
                .iter()
                .find_map(|rule| rule.apply(&self.tables, remaining).map(|t| (*rule, t)))
                .unwrap_or_else(|| (Rule::FallbackStem, fallback(remaining)));
            on_step(rule, remaining, &transition);
            match transition.next {
                Cursor::Continue(rest) => remaining = rest,
                Cursor::Stop => break,
            }
        }
    }
}
