//! Lesson sources

mod json;

pub use json::{extract_lessons_object, parse_lessons, JsonLessonSource};
