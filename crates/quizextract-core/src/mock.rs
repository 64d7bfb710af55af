//! In-memory PDF backend for testing.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, PdfBackend};

/// A configurable mock response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a document whose pages render to these texts.
    Pages(Vec<Option<String>>),
    /// Simulate a file the PDF library cannot open.
    OpenError(String),
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Ignores the path it is given and returns the configured pages, so the
/// parsing pipeline can be exercised without a real PDF on disk.
pub struct MockBackend {
    response: MockResponse,
    call_count: AtomicUsize,
}

impl MockBackend {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Mock a document with one page per entry, every page yielding text.
    pub fn with_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MockResponse::Pages(
            pages.into_iter().map(|p| Some(p.into())).collect(),
        ))
    }

    /// Mock a document that fails to open.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockResponse::OpenError(message.into()))
    }

    /// How many times `extract_pages()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl PdfBackend for MockBackend {
    fn extract_pages(&self, _path: &Path) -> Result<Vec<Option<String>>, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Pages(pages) => Ok(pages.clone()),
            MockResponse::OpenError(msg) => Err(BackendError::OpenError(msg.clone())),
        }
    }
}
