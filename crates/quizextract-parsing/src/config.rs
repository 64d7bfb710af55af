use quizextract_core::RecordDefaults;
use regex::Regex;

/// Configuration for the question extraction pipeline.
///
/// Regex fields are `Option<Regex>`, `None` meaning "use the built-in default".
/// Use [`ParsingConfigBuilder`] to construct with string patterns.
#[derive(Debug, Clone)]
pub struct ParsingConfig {
    // ── section.rs ──
    /// Anchored regex tested at the start of every line after the first.
    /// A match starts a new block.
    pub(crate) block_marker_re: Option<Regex>,

    // ── options.rs ──
    /// Anchored regex tested against each trimmed line after the question line.
    pub(crate) option_line_re: Option<Regex>,

    // ── extractor.rs ──
    /// Minimum number of option lines a block needs to be kept (default: 2).
    pub(crate) min_options: usize,
    /// Placeholder values stamped on each emitted record.
    pub(crate) record_defaults: RecordDefaults,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            block_marker_re: None,
            option_line_re: None,
            min_options: 2,
            record_defaults: RecordDefaults::default(),
        }
    }
}

impl ParsingConfig {
    /// Get the minimum option count.
    pub fn min_options(&self) -> usize {
        self.min_options
    }

    pub fn record_defaults(&self) -> &RecordDefaults {
        &self.record_defaults
    }
}

/// Builder for [`ParsingConfig`].
///
/// Accepts string patterns that are compiled to `Regex` in [`build()`](Self::build).
/// Patterns are anchored to the start of the line automatically.
/// Fails fast with `regex::Error` if any pattern is invalid.
#[derive(Debug, Clone, Default)]
pub struct ParsingConfigBuilder {
    block_marker: Option<String>,
    option_marker: Option<String>,
    min_options: Option<usize>,
    record_defaults: Option<RecordDefaults>,
}

impl ParsingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern for a line that begins a new question block, e.g. `\d+\.|Q\d+`.
    pub fn block_marker(mut self, pattern: &str) -> Self {
        self.block_marker = Some(pattern.to_string());
        self
    }

    /// Pattern for the start of an option line, e.g. `[A-Da-d][).]`.
    pub fn option_marker(mut self, pattern: &str) -> Self {
        self.option_marker = Some(pattern.to_string());
        self
    }

    pub fn min_options(mut self, n: usize) -> Self {
        self.min_options = Some(n);
        self
    }

    pub fn record_defaults(mut self, defaults: RecordDefaults) -> Self {
        self.record_defaults = Some(defaults);
        self
    }

    /// Compile all patterns and produce a [`ParsingConfig`].
    pub fn build(self) -> Result<ParsingConfig, regex::Error> {
        let defaults = ParsingConfig::default();

        Ok(ParsingConfig {
            block_marker_re: self
                .block_marker
                .as_deref()
                .map(compile_anchored)
                .transpose()?,
            option_line_re: self
                .option_marker
                .as_deref()
                .map(compile_anchored)
                .transpose()?,
            min_options: self.min_options.unwrap_or(defaults.min_options),
            record_defaults: self.record_defaults.unwrap_or(defaults.record_defaults),
        })
    }
}

fn compile_anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})"))
}
