use std::path::Path;

use quizextract_core::{ExtractionResult, PdfBackend, QuestionRecord, SkipStats};

use crate::ParsingError;
use crate::config::ParsingConfig;
use crate::options::{extract_options_with_config, strip_line};
use crate::section::segment_blocks_with_config;

/// Config-driven question extractor.
///
/// Wraps a [`ParsingConfig`] and runs the full pipeline: segment the text
/// into blocks, pick the question line and option lines of each block, and
/// number the blocks that have enough options.
#[derive(Debug, Clone, Default)]
pub struct QuestionExtractor {
    config: ParsingConfig,
}

impl QuestionExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with the given configuration.
    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Split one block into its question line and option lines.
    ///
    /// Returns `None` for blank blocks. The question is the first line of
    /// the trimmed block; it is not trimmed further.
    pub fn parse_block<'a>(&self, block: &'a str) -> Option<(&'a str, Vec<String>)> {
        let block = strip_line(block);
        if block.is_empty() {
            return None;
        }
        let mut lines = block.split('\n');
        let question = lines.next()?;
        let options = extract_options_with_config(lines, &self.config);
        Some((question, options))
    }

    /// Run the extraction pipeline on already-extracted document text.
    pub fn extract_from_text(&self, text: &str) -> ExtractionResult {
        let blocks = segment_blocks_with_config(text, &self.config);
        let defaults = &self.config.record_defaults;

        let mut stats = SkipStats {
            total_blocks: blocks.len(),
            ..SkipStats::default()
        };
        let mut questions = Vec::new();

        for (index, block) in blocks.into_iter().enumerate() {
            let Some((question, options)) = self.parse_block(block) else {
                stats.empty_blocks += 1;
                continue;
            };

            if options.len() < self.config.min_options {
                tracing::debug!(
                    block = index,
                    options = options.len(),
                    question,
                    "skipping: too few options"
                );
                stats.too_few_options += 1;
                continue;
            }

            questions.push(QuestionRecord {
                id: questions.len() + 1,
                section: defaults.section.clone(),
                question: question.to_string(),
                options,
                correct_answer: defaults.correct_answer,
                explanation: defaults.explanation.clone(),
            });
        }

        tracing::info!(
            questions = questions.len(),
            blocks = stats.total_blocks,
            empty = stats.empty_blocks,
            too_few_options = stats.too_few_options,
            "extraction complete"
        );

        ExtractionResult {
            questions,
            skip_stats: stats,
        }
    }

    /// Extract questions from a PDF using the given backend for text extraction.
    ///
    /// The backend releases the document before this returns text, so no
    /// file handle is held during segmentation.
    pub fn extract_questions_via_backend(
        &self,
        pdf_path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<ExtractionResult, ParsingError> {
        let text = backend.extract_text(pdf_path)?;
        tracing::debug!(path = %pdf_path.display(), chars = text.len(), "extracted document text");
        Ok(self.extract_from_text(&text))
    }
}
