//! Extraction backends

use super::TextExtractor;
use crate::error::{Result, SupercadernoError};
use std::fs;
use std::path::Path;

/// Structured reader backed by the `pdf-extract` crate.
///
/// Fast and accurate on well-formed PDFs; rejects files with broken
/// cross-reference tables or exotic encodings.
pub struct PdfExtractBackend;

impl TextExtractor for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn try_extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            SupercadernoError::Parse(format!(
                "Failed to extract text from PDF {:?}: {}",
                path, e
            ))
        })
    }
}

/// Page-by-page reader backed by `lopdf`.
///
/// Slower, but opens some malformed files the structured reader cannot.
/// A page that fails to decode contributes nothing; only failure to open
/// the document fails the backend.
pub struct LopdfBackend;

impl TextExtractor for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn try_extract(&self, path: &Path) -> Result<String> {
        let doc = lopdf::Document::load(path).map_err(|e| {
            SupercadernoError::Parse(format!("Failed to open PDF {:?}: {}", path, e))
        })?;

        let mut text = String::new();
        for (page_num, _) in doc.get_pages() {
            match doc.extract_text(&[page_num]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::debug!("Skipping page {} of {:?}: {}", page_num, path, e);
                }
            }
        }
        Ok(text)
    }
}
