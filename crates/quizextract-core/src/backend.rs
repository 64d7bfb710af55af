use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors open the document, render each page to plain text and
/// release the document before returning. The block segmentation and
/// option detection pipeline lives in `quizextract_parsing::QuestionExtractor`.
pub trait PdfBackend: Send + Sync {
    /// Extract the plain text of every page, in page order.
    ///
    /// A page that yields no text is reported as `None`, not as an error.
    fn extract_pages(&self, path: &Path) -> Result<Vec<Option<String>>, BackendError>;

    /// Extract the full document text, pages joined by [`crate::join_pages`].
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let pages = self.extract_pages(path)?;
        Ok(crate::join_pages(pages))
    }
}
