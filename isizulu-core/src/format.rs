//! Canonical textual rendering of analyses
//!
//! A word renders as `morph[TAG]` segments joined by `-`; a line as
//! `<LINE n>` followed directly by its space-separated words.

use std::fmt::{self, Write};

use crate::types::{AnalyzedLine, Morpheme, WordAnalysis};

/// Renders analyses in the canonical annotated format
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFormatter;

impl ResultFormatter {
    /// `morph[TAG]-morph[TAG]...`
    pub fn format_word(morphemes: &[Morpheme]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = Self::write_word(&mut out, morphemes);
        out
    }

    /// `<LINE n>word word ...`
    pub fn format_line(line: &AnalyzedLine) -> String {
        let mut out = String::new();
        let _ = Self::write_line(&mut out, line);
        out
    }

    /// Every line, newline separated, no trailing newline
    pub fn format_text(lines: &[AnalyzedLine]) -> String {
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = Self::write_line(&mut out, line);
        }
        out
    }

    fn write_word<W: Write>(out: &mut W, morphemes: &[Morpheme]) -> fmt::Result {
        for (i, m) in morphemes.iter().enumerate() {
            if i > 0 {
                out.write_char('-')?;
            }
            write!(out, "{}[{}]", m.morph, m.tag)?;
        }
        Ok(())
    }

    fn write_line<W: Write>(out: &mut W, line: &AnalyzedLine) -> fmt::Result {
        write!(out, "<LINE {}>", line.line_number)?;
        for (i, word) in line.words.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            Self::write_word(out, word)?;
        }
        Ok(())
    }
}

impl fmt::Display for WordAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ResultFormatter::write_word(f, self)
    }
}

impl fmt::Display for AnalyzedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ResultFormatter::write_line(f, self)
    }
}
