//! PDF text extraction
//!
//! Wraps the pdf-extract crate; encrypted, scanned or corrupted PDFs
//! all degrade to the same "no text" result rather than an error.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

/// Extraction result: text (when any was found) plus the page count
#[derive(Debug, Clone)]
pub struct PdfText {
    /// Extracted text; None when the document yields no readable text
    pub text: Option<String>,

    /// Number of pages; 0 when the document could not be parsed
    pub pages: usize,
}

impl PdfText {
    /// Whether any readable text was extracted
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    fn empty() -> Self {
        Self {
            text: None,
            pages: 0,
        }
    }
}

/// Extract text and page count from PDF bytes.
///
/// Never fails: unparseable documents and documents without readable
/// text (e.g., scanned images) return `{text: None, pages: 0}`.
pub fn extract_from_bytes(bytes: &[u8]) -> PdfText {
    let pages = match lopdf::Document::load_mem(bytes) {
        Ok(doc) => doc.get_pages().len(),
        Err(e) => {
            warn!("Failed to parse PDF structure: {}", e);
            return PdfText::empty();
        }
    };

    // pdf-extract panics on some malformed content streams; contain it
    let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    let text = match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("PDF text extraction failed: {}", e);
            return PdfText::empty();
        }
        Err(_) => {
            warn!("PDF text extraction panicked on malformed content");
            return PdfText::empty();
        }
    };

    if text.trim().is_empty() {
        debug!("PDF parsed ({} pages) but contains no readable text", pages);
        return PdfText::empty();
    }

    debug!(
        "Extracted {} chars of text from {} pages",
        text.len(),
        pages
    );

    PdfText {
        text: Some(text),
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_empty() {
        let result = extract_from_bytes(b"this is not a pdf at all");
        assert!(!result.has_text());
        assert_eq!(result.pages, 0);
    }

    #[test]
    fn test_empty_input_yields_empty() {
        let result = extract_from_bytes(&[]);
        assert!(!result.has_text());
        assert_eq!(result.pages, 0);
    }

    #[test]
    fn test_truncated_header_yields_empty() {
        // Looks like a PDF for the first few bytes, then stops
        let result = extract_from_bytes(b"%PDF-1.7\n");
        assert!(!result.has_text());
        assert_eq!(result.pages, 0);
    }
}
