//! PDF text extraction

use crate::error::{EngineError, Result};

/// Extract the text layer of a PDF
///
/// The parser can panic on malformed documents; that is reported as an
/// extraction failure for this file only.
pub fn extract_pdf(bytes: &[u8], filename: &str) -> Result<String> {
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(EngineError::extraction(filename, e.to_string())),
        Err(_) => Err(EngineError::extraction(
            filename,
            "PDF parser aborted on malformed input",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_extraction_error() {
        let err = extract_pdf(b"definitely not a pdf", "x.pdf").unwrap_err();
        assert!(matches!(err, EngineError::Extraction { ref file, .. } if file == "x.pdf"));
    }
}
