//! JSON Lesson Source
//!
//! Reads the lesson list produced by document extraction. Three shapes
//! are accepted:
//!
//! - `{"lessons": [...]}`
//! - a bare array of lesson objects
//! - a raw chat-completion reply that wraps the `{"lessons": ...}` object
//!   in prose or code fences

use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::LessonRecord;
use crate::domain::ports::LessonSource;
use crate::error::{KidariError, KidariResult};

#[derive(Debug, Deserialize)]
struct LessonEnvelope {
    lessons: Vec<LessonRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LessonDocument {
    Envelope(LessonEnvelope),
    List(Vec<LessonRecord>),
}

impl LessonDocument {
    fn into_lessons(self) -> Vec<LessonRecord> {
        match self {
            LessonDocument::Envelope(envelope) => envelope.lessons,
            LessonDocument::List(lessons) => lessons,
        }
    }
}

/// Lesson source backed by a JSON (or chat-reply) file
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLessonSource;

impl JsonLessonSource {
    pub fn new() -> Self {
        Self
    }
}

impl LessonSource for JsonLessonSource {
    fn load_lessons(&self, path: &Path) -> KidariResult<Vec<LessonRecord>> {
        let content = std::fs::read_to_string(path)?;
        let lessons = parse_lessons(&content, path)?;
        tracing::debug!(file = %path.display(), count = lessons.len(), "loaded lessons");
        Ok(lessons)
    }
}

/// Parse lesson records from file content.
///
/// `file` is only used for error messages.
pub fn parse_lessons(content: &str, file: &Path) -> KidariResult<Vec<LessonRecord>> {
    let trimmed = content.trim_start();

    // Well-formed JSON document: record-shape errors are reported as-is.
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<LessonDocument>(content) {
            Ok(document) => return Ok(document.into_lessons()),
            Err(err) if !err.is_syntax() && !err.is_eof() => {
                return Err(json_error(file, precise_error(content, err)));
            }
            Err(_) => {}
        }
    }

    let Some(span) = extract_lessons_object(content) else {
        return Err(KidariError::NoLessons {
            file: file.to_path_buf(),
        });
    };

    tracing::debug!(file = %file.display(), "reading lessons from wrapped reply");
    serde_json::from_str::<LessonEnvelope>(span)
        .map(|envelope| envelope.lessons)
        .map_err(|err| json_error(file, reply_error(content, &err)))
}

/// Span from the first `{` to the last `}`, provided it mentions `"lessons"`.
pub fn extract_lessons_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    let span = &text[start..=end];
    span.contains("\"lessons\"").then_some(span)
}

/// Re-run the failing parse against the concrete shape so the message
/// names the bad field instead of "did not match any variant".
fn precise_error(content: &str, err: serde_json::Error) -> String {
    let retry = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<LessonRecord>>(content).err()
    } else {
        serde_json::from_str::<LessonEnvelope>(content).err()
    };
    retry.unwrap_or(err).to_string()
}

/// serde_json positions are relative to the extracted span; report them
/// against the whole reply instead.
fn reply_error(content: &str, err: &serde_json::Error) -> String {
    let message = err.to_string();
    let (Some(start), Some((reason, _))) = (content.find('{'), message.rsplit_once(" at line "))
    else {
        return message;
    };
    if err.line() == 0 {
        return message;
    }

    let prefix = &content[..start];
    let line = err.line() + prefix.matches('\n').count();
    let column = if err.line() == 1 {
        err.column() + prefix.len() - prefix.rfind('\n').map_or(0, |nl| nl + 1)
    } else {
        err.column()
    };
    format!("{} at line {} column {}", reason, line, column)
}

fn json_error(file: &Path, message: String) -> KidariError {
    KidariError::Json {
        file: file.to_path_buf(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn file() -> &'static Path {
        Path::new("april.json")
    }

    #[test]
    fn parses_envelope() {
        let content = r#"{"lessons": [
            {"date": "4. 18. (금)", "startTime": "13:40", "endTime": "14:20", "duration": 40, "fullDate": "2025-04-18"}
        ]}"#;

        let lessons = parse_lessons(content, file()).unwrap();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].time_range(), "13:40~14:20");
        assert_eq!(lessons[0].calendar_date(), NaiveDate::from_ymd_opt(2025, 4, 18));
    }

    #[test]
    fn parses_bare_array_in_order() {
        let content = r#"[
            {"date": "a", "startTime": "9:00", "endTime": "9:40", "duration": 40},
            {"date": "b", "startTime": "9:40", "endTime": "10:20", "duration": 40}
        ]"#;

        let lessons = parse_lessons(content, file()).unwrap();
        let dates: Vec<_> = lessons.iter().map(|l| l.date.as_str()).collect();
        assert_eq!(dates, vec!["a", "b"]);
    }

    #[test]
    fn parses_reply_wrapped_in_prose_and_fences() {
        let content = "Here is the result:\n```json\n{\n  \"lessons\": [\n    {\"date\": \"4. 18. (금)\", \"startTime\": \"13:40\", \"endTime\": \"14:20\", \"duration\": 40, \"fullDate\": \"2025-04-18\"}\n  ]\n}\n```\nLet me know if you need anything else.";

        let lessons = parse_lessons(content, file()).unwrap();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].duration, 40);
    }

    #[test]
    fn reply_without_lessons_object_is_an_error() {
        let err = parse_lessons("I could not read this document.", file()).unwrap_err();
        assert!(matches!(err, KidariError::NoLessons { .. }));

        let err = parse_lessons("{\"items\": []}", file()).unwrap_err();
        assert!(matches!(err, KidariError::Json { .. }));
    }

    #[test]
    fn bad_record_reports_field_error() {
        let content = r#"{"lessons": [{"date": "a", "startTime": "13h40", "endTime": "14:20", "duration": 40}]}"#;
        let err = parse_lessons(content, file()).unwrap_err();
        match err {
            KidariError::Json { message, .. } => {
                assert!(message.contains("invalid time of day '13h40'"), "{message}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reply_syntax_error_points_at_reply_line() {
        let content = "Sure!\n\n{\"lessons\": [\n  {\"date\": \"a\", \"startTime\": \"9:00\",}\n]}\n";
        let err = parse_lessons(content, file()).unwrap_err();
        match err {
            KidariError::Json { message, .. } => {
                assert!(message.contains("at line 4 column"), "{message}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reply_error_shifts_first_line_column() {
        let content = "Result: {\"lessons\": x}";
        let err = parse_lessons(content, file()).unwrap_err();
        match err {
            KidariError::Json { message, .. } => {
                assert!(message.ends_with("at line 1 column 21"), "{message}")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extract_requires_lessons_key() {
        assert_eq!(
            extract_lessons_object("x {\"lessons\": []} y"),
            Some("{\"lessons\": []}")
        );
        assert_eq!(extract_lessons_object("{\"other\": 1}"), None);
        assert_eq!(extract_lessons_object("} \"lessons\" {"), None);
        assert_eq!(extract_lessons_object("no braces"), None);
    }

    #[test]
    fn load_lessons_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lessons.json");
        fs::write(
            &path,
            r#"{"lessons": [{"date": "a", "startTime": "9:00", "endTime": "9:40", "duration": 40, "fullDate": null}]}"#,
        )
        .unwrap();

        let lessons = JsonLessonSource::new().load_lessons(&path).unwrap();
        assert_eq!(lessons.len(), 1);
        assert!(lessons[0].full_date.is_none());
    }

    #[test]
    fn load_lessons_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = JsonLessonSource::new()
            .load_lessons(&dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, KidariError::Io(_)));
    }
}
