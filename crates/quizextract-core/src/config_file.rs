use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::RecordDefaults;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub record: Option<RecordConfig>,
    pub pdf: Option<PdfConfig>,
}

/// Placeholder values written into every extracted question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordConfig {
    pub section: Option<String>,
    pub explanation: Option<String>,
    pub correct_answer: Option<usize>,
}

/// Text extraction settings for the MuPDF backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Fraction of page height from the top to drop as header.
    pub header_exclusion: Option<f32>,
    /// Fraction of page height from the bottom to drop as footer.
    pub footer_exclusion: Option<f32>,
}

impl ConfigFile {
    /// Resolve the record placeholders, falling back to the built-in defaults.
    pub fn record_defaults(&self) -> RecordDefaults {
        let defaults = RecordDefaults::default();
        let Some(record) = &self.record else {
            return defaults;
        };
        RecordDefaults {
            section: record.section.clone().unwrap_or(defaults.section),
            correct_answer: record.correct_answer.unwrap_or(defaults.correct_answer),
            explanation: record.explanation.clone().unwrap_or(defaults.explanation),
        }
    }

    pub fn header_exclusion(&self) -> f32 {
        self.pdf
            .as_ref()
            .and_then(|p| p.header_exclusion)
            .unwrap_or(0.0)
    }

    pub fn footer_exclusion(&self) -> f32 {
        self.pdf
            .as_ref()
            .and_then(|p| p.footer_exclusion)
            .unwrap_or(0.0)
    }
}

/// Platform config directory path: `<config_dir>/quizextract/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("quizextract").join("config.toml"))
}

/// Load config by cascading CWD `.quizextract.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".quizextract.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        record: Some(RecordConfig {
            section: overlay
                .record
                .as_ref()
                .and_then(|r| r.section.clone())
                .or_else(|| base.record.as_ref().and_then(|r| r.section.clone())),
            explanation: overlay
                .record
                .as_ref()
                .and_then(|r| r.explanation.clone())
                .or_else(|| base.record.as_ref().and_then(|r| r.explanation.clone())),
            correct_answer: overlay
                .record
                .as_ref()
                .and_then(|r| r.correct_answer)
                .or_else(|| base.record.as_ref().and_then(|r| r.correct_answer)),
        }),
        pdf: Some(PdfConfig {
            header_exclusion: overlay
                .pdf
                .as_ref()
                .and_then(|p| p.header_exclusion)
                .or_else(|| base.pdf.as_ref().and_then(|p| p.header_exclusion)),
            footer_exclusion: overlay
                .pdf
                .as_ref()
                .and_then(|p| p.footer_exclusion)
                .or_else(|| base.pdf.as_ref().and_then(|p| p.footer_exclusion)),
        }),
    }
}
