//! Word-processor documents
//!
//! A `.docx` file is a zip archive; the body lives in `word/document.xml`.
//! Paragraph text is joined with newlines. Legacy binary `.doc` files are
//! not zip archives and fail extraction.

use std::io::{Cursor, Read};

use roxmltree::{Document, Node};
use zip::ZipArchive;

use crate::error::{EngineError, Result};

const BODY_PART: &str = "word/document.xml";
const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Extract the raw text of a `.docx` document
pub fn extract_docx(bytes: &[u8], filename: &str) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
        EngineError::extraction(filename, format!("not an Office Open XML document: {e}"))
    })?;

    let mut xml = String::new();
    let mut body = archive
        .by_name(BODY_PART)
        .map_err(|e| EngineError::extraction(filename, format!("{BODY_PART}: {e}")))?;
    body.read_to_string(&mut xml)
        .map_err(|e| EngineError::extraction(filename, format!("{BODY_PART}: {e}")))?;

    document_text(&xml).map_err(|e| EngineError::extraction(filename, e.to_string()))
}

fn is_wordml(node: &Node<'_, '_>, local: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local
        && node.tag_name().namespace() == Some(WORDML_NS)
}

/// Text of every `w:p` paragraph, one per line
fn document_text(xml: &str) -> std::result::Result<String, roxmltree::Error> {
    let doc = Document::parse(xml)?;
    let mut paragraphs = Vec::new();

    for paragraph in doc.descendants().filter(|n| is_wordml(n, "p")) {
        let mut text = String::new();
        for node in paragraph.descendants().skip(1) {
            // text boxes nest paragraphs; those are visited on their own
            let owner = node.ancestors().skip(1).find(|a| is_wordml(a, "p"));
            if owner != Some(paragraph) {
                continue;
            }
            if is_wordml(&node, "t") {
                text.push_str(node.text().unwrap_or_default());
            } else if is_wordml(&node, "tab") {
                text.push('\t');
            } else if is_wordml(&node, "br") || is_wordml(&node, "cr") {
                text.push('\n');
            }
        }
        paragraphs.push(text);
    }

    Ok(paragraphs.join("\n"))
}
