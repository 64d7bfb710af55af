use std::path::Path;

use mupdf::{Document, TextPageFlags};

use quizextract_core::{BackendError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island. It isolates the mupdf dependency
/// (which is AGPL-3.0) so that the parsing and reporting crates do not
/// transitively depend on it.
///
/// Each page renders to its text lines joined by `\n`, with no trailing
/// newline; a page with no characters yields `None`. Header and footer
/// bands can optionally be dropped for papers that repeat a running title
/// or page number on every page. Both are disabled by default.
#[derive(Debug, Clone, Default)]
pub struct MupdfBackend {
    /// Fraction of page height from bottom to exclude as footer (0.0–1.0).
    /// `None` disables footer exclusion.
    footer_exclusion_ratio: Option<f32>,
    /// Fraction of page height from top to exclude as header (0.0–1.0).
    /// `None` disables header exclusion.
    header_exclusion_ratio: Option<f32>,
}

impl MupdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer exclusion ratio. Pass `0.0` to disable.
    pub fn with_footer_exclusion(mut self, ratio: f32) -> Self {
        self.footer_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }

    /// Set the header exclusion ratio. Pass `0.0` to disable.
    pub fn with_header_exclusion(mut self, ratio: f32) -> Self {
        self.header_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_pages(&self, path: &Path) -> Result<Vec<Option<String>>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages_text = Vec::new();

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let page_bounds = page
                .bounds()
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let page_height = page_bounds.y1 - page_bounds.y0;

            let header_threshold = self
                .header_exclusion_ratio
                .map(|r| page_bounds.y0 + page_height * r);
            let footer_threshold = self
                .footer_exclusion_ratio
                .map(|r| page_bounds.y1 - page_height * r);

            let mut lines = Vec::new();
            for block in text_page.blocks() {
                let block_bounds = block.bounds();

                // Skip blocks entirely within the header region
                if let Some(threshold) = header_threshold
                    && block_bounds.y1 <= threshold
                {
                    continue;
                }

                // Skip blocks whose top edge is in the footer region
                if let Some(threshold) = footer_threshold
                    && block_bounds.y0 >= threshold
                {
                    continue;
                }

                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    lines.push(line_text);
                }
            }

            let page_text = lines.join("\n");
            if page_text.is_empty() {
                tracing::debug!(page = pages_text.len() + 1, "page yielded no text");
                pages_text.push(None);
            } else {
                pages_text.push(Some(page_text));
            }
        }

        tracing::debug!(path = %path.display(), pages = pages_text.len(), "read PDF pages");
        // `document` drops here, before any parsing happens.
        Ok(pages_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_ratios_disabled_by_default() {
        let backend = MupdfBackend::new();
        assert!(backend.header_exclusion_ratio.is_none());
        assert!(backend.footer_exclusion_ratio.is_none());
    }

    #[test]
    fn zero_ratio_disables_exclusion() {
        let backend = MupdfBackend::new()
            .with_header_exclusion(0.04)
            .with_footer_exclusion(0.05)
            .with_header_exclusion(0.0);
        assert!(backend.header_exclusion_ratio.is_none());
        assert_eq!(backend.footer_exclusion_ratio, Some(0.05));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.pdf");
        assert!(MupdfBackend::new().extract_pages(&path).is_err());
    }
}
