//! Noun classes and their prefixes

use super::rule::Pattern;
use std::collections::BTreeMap;
use std::fmt;

/// Noun classes that carry a prefix in the tables
const KNOWN_CLASSES: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 14, 15];

/// A noun-class number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NounClass(u8);

impl NounClass {
    /// Returns `None` for numbers outside the class system
    pub fn new(class: u8) -> Option<Self> {
        KNOWN_CLASSES.contains(&class).then_some(Self(class))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Tag emitted for the augment of a matched prefix
    pub fn prefix_tag(self) -> String {
        format!("NPrePre{}", self.0)
    }

    /// Tag emitted for the synthesized basic prefix
    pub fn basic_prefix_tag(self) -> String {
        format!("BPre{}", self.0)
    }
}

impl fmt::Display for NounClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A noun-class prefix entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounPrefix {
    pub pattern: String,
    pub class: NounClass,
    pub tag: String,
}

impl NounPrefix {
    pub fn new(pattern: impl Into<String>, class: NounClass) -> Self {
        Self {
            pattern: pattern.into(),
            class,
            tag: class.prefix_tag(),
        }
    }
}

impl Pattern for NounPrefix {
    fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Class to basic-prefix lookup
#[derive(Debug, Clone, Default)]
pub struct BasicPrefixes(BTreeMap<NounClass, String>);

impl BasicPrefixes {
    pub fn insert(&mut self, class: NounClass, prefix: impl Into<String>) {
        self.0.insert(class, prefix.into());
    }

    pub fn get(&self, class: NounClass) -> Option<&str> {
        self.0.get(&class).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending class order
    pub fn iter(&self) -> impl Iterator<Item = (NounClass, &str)> {
        self.0.iter().map(|(class, prefix)| (*class, prefix.as_str()))
    }
}

impl FromIterator<(NounClass, String)> for BasicPrefixes {
    fn from_iter<I: IntoIterator<Item = (NounClass, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
