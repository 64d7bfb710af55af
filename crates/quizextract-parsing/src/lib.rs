use std::path::Path;

use thiserror::Error;

pub mod config;
pub mod extractor;
pub mod options;
pub mod section;

pub use config::{ParsingConfig, ParsingConfigBuilder};
pub use extractor::QuestionExtractor;
// Re-export domain types from core (canonical definitions live there)
pub use quizextract_core::{
    BackendError, ExtractionResult, PdfBackend, QuestionRecord, RecordDefaults, SkipStats,
};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("backend error: {0}")]
    Backend(#[from] quizextract_core::BackendError),
}

/// Extract quiz questions from a PDF file using the given backend for text extraction.
///
/// Pipeline:
/// 1. Extract per-page text via `backend` and join it, one `\n` after each page
/// 2. Split the text into blocks at lines starting with `N.` or `QN`
/// 3. Take each block's first line as the question and collect A-D option lines
/// 4. Keep blocks with at least two options, numbering them from 1
pub fn extract_questions(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
) -> Result<ExtractionResult, ParsingError> {
    QuestionExtractor::new().extract_questions_via_backend(pdf_path, backend)
}
