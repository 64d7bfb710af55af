use serde::{Deserialize, Serialize};

pub mod backend;
pub mod config_file;
pub mod mock;

pub use backend::{BackendError, PdfBackend};
pub use mock::MockBackend;

/// Section label stamped on every record until real categorization exists.
pub const DEFAULT_SECTION: &str = "general";

/// Explanation stamped on every record.
pub const DEFAULT_EXPLANATION: &str = "Extracted from PDF";

/// Index of the correct option. Not derived from content.
pub const DEFAULT_CORRECT_ANSWER: usize = 0;

/// A question extracted from one text block.
///
/// Field order matches the JSON output: `id`, `section`, `question`,
/// `options`, `correctAnswer`, `explanation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    /// 1-based position among emitted records (dropped blocks don't count).
    pub id: usize,
    pub section: String,
    /// First line of the block, as it appeared in the text.
    pub question: String,
    /// Trimmed option lines in document order. Always at least two.
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

/// Placeholder values copied into each emitted [`QuestionRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDefaults {
    pub section: String,
    pub correct_answer: usize,
    pub explanation: String,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
            correct_answer: DEFAULT_CORRECT_ANSWER,
            explanation: DEFAULT_EXPLANATION.to_string(),
        }
    }
}

/// Statistics about blocks that were skipped during extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipStats {
    /// Blocks produced by segmentation, including blank ones.
    pub total_blocks: usize,
    /// Blocks that were empty or whitespace-only.
    pub empty_blocks: usize,
    /// Non-empty blocks with fewer option lines than required.
    pub too_few_options: usize,
}

impl SkipStats {
    pub fn skipped(&self) -> usize {
        self.empty_blocks + self.too_few_options
    }
}

/// Result of extracting questions from a document.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    pub questions: Vec<QuestionRecord>,
    pub skip_stats: SkipStats,
}

/// Concatenate per-page text into one document string.
///
/// Pages that yielded no text (`None` or empty) are skipped. Every
/// contributing page is followed by a single `\n`.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut full_text = String::new();
    for text in pages.into_iter().flatten() {
        let text = text.as_ref();
        if text.is_empty() {
            continue;
        }
        full_text.push_str(text);
        full_text.push('\n');
    }
    full_text
}
