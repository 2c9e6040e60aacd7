//! Document text extraction
//!
//! Converts a PDF path into plain text through an ordered list of backends.
//! The first backend that succeeds wins; a backend failure discards its
//! partial output and hands the file to the next one. Total failure yields
//! an empty string, never an error. Every downstream decision (topic
//! prefiltering, eventual model input) reads text through this module.

mod backends;

pub use backends::{LopdfBackend, PdfExtractBackend};

use crate::error::Result;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

/// A single extraction strategy. Backends hold no shared mutable state.
pub trait TextExtractor: Send + Sync {
    /// Backend identifier used in logs
    fn name(&self) -> &'static str;

    /// Extract the full text of the document, or fail
    fn try_extract(&self, path: &Path) -> Result<String>;
}

/// Ordered multi-backend extraction engine
pub struct DocumentExtractor {
    backends: Vec<Box<dyn TextExtractor>>,
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        // pdf-extract is faster and more accurate on well-formed files;
        // the lopdf page reader exists for files it cannot open.
        Self::new(vec![
            Box::new(PdfExtractBackend),
            Box::new(LopdfBackend),
        ])
    }
}

impl DocumentExtractor {
    /// Create an engine with an explicit backend order
    pub fn new(backends: Vec<Box<dyn TextExtractor>>) -> Self {
        Self { backends }
    }

    /// Extract text from a document, degrading through backends.
    ///
    /// Returns `""` when every backend fails. PDF parsers are panic-prone
    /// on malformed input, so each attempt is unwind-isolated; a crash in
    /// one backend must not take out the next.
    pub fn extract_text(&self, path: &Path) -> String {
        for backend in &self.backends {
            match catch_unwind(AssertUnwindSafe(|| backend.try_extract(path))) {
                Ok(Ok(text)) => return text,
                Ok(Err(e)) => {
                    tracing::debug!("Backend {} failed on {:?}: {}", backend.name(), path, e);
                }
                Err(_) => {
                    tracing::debug!("Backend {} panicked on {:?}", backend.name(), path);
                }
            }
        }
        tracing::warn!("No backend could extract text from {:?}", path);
        String::new()
    }
}

/// Best-effort page count. Failure reason is discarded: page counts are
/// non-critical metadata and absence is an expected state.
pub fn page_count(path: &Path) -> Option<u32> {
    let doc = lopdf::Document::load(path).ok()?;
    Some(doc.get_pages().len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SupercadernoError;
    use std::fs;

    struct StaticBackend(&'static str);

    impl TextExtractor for StaticBackend {
        fn name(&self) -> &'static str {
            "static"
        }

        fn try_extract(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    impl TextExtractor for FailingBackend {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn try_extract(&self, _path: &Path) -> Result<String> {
            Err(SupercadernoError::Parse("boom".to_string()))
        }
    }

    struct PanickingBackend;

    impl TextExtractor for PanickingBackend {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn try_extract(&self, _path: &Path) -> Result<String> {
            panic!("malformed xref")
        }
    }

    #[test]
    fn test_first_success_wins() {
        let engine = DocumentExtractor::new(vec![
            Box::new(StaticBackend("first")),
            Box::new(StaticBackend("second")),
        ]);
        assert_eq!(engine.extract_text(Path::new("any.pdf")), "first");
    }

    #[test]
    fn test_failure_degrades_to_next_backend() {
        let engine = DocumentExtractor::new(vec![
            Box::new(FailingBackend),
            Box::new(StaticBackend("fallback")),
        ]);
        assert_eq!(engine.extract_text(Path::new("any.pdf")), "fallback");
    }

    #[test]
    fn test_panic_does_not_reach_caller() {
        let engine = DocumentExtractor::new(vec![
            Box::new(PanickingBackend),
            Box::new(StaticBackend("survivor")),
        ]);
        assert_eq!(engine.extract_text(Path::new("any.pdf")), "survivor");
    }

    #[test]
    fn test_total_failure_returns_empty() {
        let engine = DocumentExtractor::new(vec![Box::new(FailingBackend)]);
        assert_eq!(engine.extract_text(Path::new("any.pdf")), "");
    }

    #[test]
    fn test_zero_byte_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdf");
        fs::write(&path, b"").unwrap();

        let engine = DocumentExtractor::default();
        assert_eq!(engine.extract_text(&path), "");
    }

    #[test]
    fn test_non_pdf_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        fs::write(&path, b"this is plain text, not a pdf").unwrap();

        let engine = DocumentExtractor::default();
        assert_eq!(engine.extract_text(&path), "");
    }

    #[test]
    fn test_page_count_absent_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        fs::write(&path, b"\x00\x01\x02").unwrap();

        assert_eq!(page_count(&path), None);
    }
}
