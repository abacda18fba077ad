//! Ordered pattern tables
//!
//! A table is a sequence, not a map: lookups walk entries in declaration
//! order and the first hit wins. Redeclaring a pattern replaces the earlier
//! entry in its original position.

use log::warn;

/// Anything stored in an ordered table
pub trait Pattern {
    /// The surface text this entry matches
    fn pattern(&self) -> &str;
}

/// A pattern and the tag it emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub pattern: String,
    pub tag: String,
}

impl RuleEntry {
    pub fn new(pattern: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            tag: tag.into(),
        }
    }
}

impl Pattern for RuleEntry {
    fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Declaration-ordered table of entries with unique patterns
#[derive(Debug, Clone)]
pub struct OrderedTable<E> {
    entries: Vec<E>,
    shadowed: Vec<String>,
}

/// Table of tagged patterns
pub type RuleTable = OrderedTable<RuleEntry>;

impl<E> Default for OrderedTable<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            shadowed: Vec::new(),
        }
    }
}

impl<E: Pattern> OrderedTable<E> {
    /// Build from entries in declaration order
    pub fn from_entries<I: IntoIterator<Item = E>>(entries: I) -> Self {
        let mut table = Self::default();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// Append an entry, or overwrite an earlier entry with the same pattern
    /// without moving it.
    pub fn insert(&mut self, entry: E) {
        match self
            .entries
            .iter()
            .position(|e| e.pattern() == entry.pattern())
        {
            Some(pos) => {
                warn!(
                    "pattern '{}' declared more than once; later declaration shadows the earlier one",
                    entry.pattern()
                );
                self.shadowed.push(entry.pattern().to_string());
                self.entries[pos] = entry;
            }
            None => self.entries.push(entry),
        }
    }

    /// First entry, in declaration order, that `remaining` starts with
    pub fn first_prefix_of(&self, remaining: &str) -> Option<&E> {
        self.entries
            .iter()
            .find(|e| remaining.starts_with(e.pattern()))
    }

    /// First entry, in declaration order, occurring in `remaining` at an
    /// index greater than zero, with the byte index of its earliest such
    /// occurrence.
    pub fn first_contained(&self, remaining: &str) -> Option<(usize, &E)> {
        let skip = remaining.chars().next()?.len_utf8();
        let tail = &remaining[skip..];
        self.entries
            .iter()
            .find_map(|e| tail.find(e.pattern()).map(|idx| (skip + idx, e)))
    }

    /// Entry whose pattern equals `text` exactly
    pub fn exact(&self, text: &str) -> Option<&E> {
        self.entries.iter().find(|e| e.pattern() == text)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patterns that were declared more than once, one item per redeclaration
    pub fn shadowed(&self) -> &[String] {
        &self.shadowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> RuleTable {
        RuleTable::from_entries(pairs.iter().map(|(p, t)| RuleEntry::new(*p, *t)))
    }

    #[test]
    fn test_first_declared_prefix_wins() {
        let t = table(&[("ng", "Short"), ("ngi", "Long")]);
        assert_eq!(t.first_prefix_of("ngiyabonga").unwrap().tag, "Short");

        let t = table(&[("ngi", "Long"), ("ng", "Short")]);
        assert_eq!(t.first_prefix_of("ngiyabonga").unwrap().tag, "Long");
    }

    #[test]
    fn test_prefix_miss() {
        let t = table(&[("ngi", "SC1s")]);
        assert!(t.first_prefix_of("bonga").is_none());
        assert!(t.first_prefix_of("").is_none());
    }

    #[test]
    fn test_contained_skips_index_zero() {
        let t = table(&[("el", "Appl")]);
        assert!(t.first_contained("el").is_none());
        let (idx, entry) = t.first_contained("elel").unwrap();
        assert_eq!(idx, 2);
        assert_eq!(entry.tag, "Appl");
    }

    #[test]
    fn test_contained_uses_declaration_order_not_position() {
        let t = table(&[("is", "Caus"), ("el", "Appl")]);
        // "el" occurs earlier in the word but "is" is declared first
        let (idx, entry) = t.first_contained("bonelisa").unwrap();
        assert_eq!(entry.tag, "Caus");
        assert_eq!(idx, 5);
    }

    #[test]
    fn test_contained_empty_input() {
        let t = table(&[("w", "Pass")]);
        assert!(t.first_contained("").is_none());
    }

    #[test]
    fn test_contained_multibyte_first_char() {
        let t = table(&[("w", "Pass")]);
        let (idx, _) = t.first_contained("éwa").unwrap();
        assert_eq!(idx, 'é'.len_utf8());
    }

    #[test]
    fn test_exact_match_only() {
        let t = table(&[("onke", "Quant")]);
        assert!(t.exact("onke").is_some());
        assert!(t.exact("bonke").is_none());
        assert!(t.exact("onk").is_none());
    }

    #[test]
    fn test_redeclaration_keeps_first_position_last_value() {
        let t = table(&[("umu", "A"), ("aba", "B"), ("umu", "C")]);
        let entries: Vec<_> = t.iter().map(|e| (e.pattern.as_str(), e.tag.as_str())).collect();
        assert_eq!(entries, vec![("umu", "C"), ("aba", "B")]);
        assert_eq!(t.shadowed(), &["umu".to_string()]);
        assert_eq!(t.len(), 2);
    }
}
