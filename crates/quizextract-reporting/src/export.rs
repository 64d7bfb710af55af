use std::io::Write;
use std::path::Path;

use quizextract_core::QuestionRecord;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use thiserror::Error;

/// Indentation used for every nesting level of the output array.
const JSON_INDENT: &[u8] = b"    ";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize questions: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Pretty formatter that keeps output pure ASCII.
///
/// Every character outside printable ASCII that serde_json would write
/// verbatim (non-ASCII and DEL) becomes a lowercase `\uXXXX` escape.
/// Characters outside the BMP become a UTF-16 surrogate pair.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn with_indent(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> std::io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> std::io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> std::io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Render questions as a pretty-printed JSON array.
///
/// Uses four-space indentation. Non-ASCII characters and DEL are written
/// as `\uXXXX` escapes, so the output is pure ASCII. An empty slice
/// renders as `[]`. No trailing newline is added.
pub fn to_json_string(questions: &[QuestionRecord]) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    let formatter = AsciiPrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    questions.serialize(&mut ser)?;
    // The formatter only ever emits ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write questions as JSON to `path`, creating or truncating the file.
///
/// The file is only touched once serialization has succeeded.
pub fn write_json(questions: &[QuestionRecord], path: &Path) -> Result<(), ReportError> {
    let content = to_json_string(questions)?;

    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;

    tracing::debug!(path = %path.display(), questions = questions.len(), bytes = content.len(), "wrote JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> QuestionRecord {
        QuestionRecord {
            id: 1,
            section: "general".to_string(),
            question: "1. What is 2+2?".to_string(),
            options: vec!["A) 3".to_string(), "B) 4".to_string(), "C) 5".to_string()],
            correct_answer: 0,
            explanation: "Extracted from PDF".to_string(),
        }
    }

    #[test]
    fn empty_list_is_bare_brackets() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }

    #[test]
    fn layout_uses_four_space_indent_and_field_order() {
        let expected = r#"[
    {
        "id": 1,
        "section": "general",
        "question": "1. What is 2+2?",
        "options": [
            "A) 3",
            "B) 4",
            "C) 5"
        ],
        "correctAnswer": 0,
        "explanation": "Extracted from PDF"
    }
]"#;
        assert_eq!(to_json_string(&[sample_record()]).unwrap(), expected);
    }

    #[test]
    fn non_ascii_escaped_as_lowercase_unicode() {
        let mut record = sample_record();
        record.question = "1. Café’s π?".to_string();
        let json = to_json_string(&[record]).unwrap();
        assert!(json.contains(r#""question": "1. Caf\u00e9\u2019s \u03c0?""#));
        assert!(json.is_ascii());
    }

    #[test]
    fn astral_characters_become_surrogate_pairs() {
        let mut record = sample_record();
        record.options[0] = "A) 😀 ok".to_string();
        let json = to_json_string(&[record]).unwrap();
        assert!(json.contains(r#""A) \ud83d\ude00 ok""#));
    }

    #[test]
    fn delete_character_escaped() {
        let mut record = sample_record();
        record.explanation = "x\u{7f}y".to_string();
        let json = to_json_string(&[record]).unwrap();
        assert!(json.contains(r#""explanation": "x\u007fy""#));
    }

    #[test]
    fn quotes_and_control_characters_escaped() {
        let mut record = sample_record();
        record.question = "1. Say \"hi\"\r".to_string();
        let json = to_json_string(&[record]).unwrap();
        assert!(json.contains(r#""1. Say \"hi\"\r""#));
    }

    #[test]
    fn write_json_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "stale contents that are longer than the new output").unwrap();

        write_json(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn write_json_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("questions.json");
        let err = write_json(&[sample_record()], &path).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
        assert!(err.to_string().contains("questions.json"));
    }
}
