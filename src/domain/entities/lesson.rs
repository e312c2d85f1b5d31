//! Lesson record entity
//!
//! One supplementary session as extracted from an instructor's lesson log.
//! Records arrive in chronological order and that order is significant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{LessonDate, TimeOfDay};
use crate::error::KidariResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    /// Display date as written in the log (e.g. `4. 18. (금)`); never parsed
    pub date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    /// Minutes, trusted as given
    pub duration: u32,
    #[serde(default)]
    pub full_date: Option<LessonDate>,
}

impl LessonRecord {
    /// Build a record from its textual parts (no `fullDate`).
    pub fn new(
        date: impl Into<String>,
        start_time: &str,
        end_time: &str,
        duration: u32,
    ) -> KidariResult<Self> {
        Ok(Self {
            date: date.into(),
            start_time: start_time.parse()?,
            end_time: end_time.parse()?,
            duration,
            full_date: None,
        })
    }

    pub fn with_full_date(mut self, full_date: impl Into<LessonDate>) -> Self {
        self.full_date = Some(full_date.into());
        self
    }

    /// `start~end` as shown in reports
    pub fn time_range(&self) -> String {
        format!("{}~{}", self.start_time, self.end_time)
    }

    /// Normalized calendar day, `None` when missing or unreadable
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.full_date.as_ref().and_then(LessonDate::normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_extraction_output() {
        let json = r#"{
            "date": "4. 18. (금)",
            "startTime": "13:40",
            "endTime": "14:20",
            "duration": 40,
            "fullDate": "2025-04-18"
        }"#;

        let lesson: LessonRecord = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.date, "4. 18. (금)");
        assert_eq!(lesson.time_range(), "13:40~14:20");
        assert_eq!(lesson.duration, 40);
        assert_eq!(lesson.calendar_date(), NaiveDate::from_ymd_opt(2025, 4, 18));
    }

    #[test]
    fn missing_or_null_full_date_is_none() {
        let json = r#"{"date": "d", "startTime": "9:00", "endTime": "9:40", "duration": 40}"#;
        let lesson: LessonRecord = serde_json::from_str(json).unwrap();
        assert!(lesson.full_date.is_none());

        let json = r#"{"date": "d", "startTime": "9:00", "endTime": "9:40", "duration": 40, "fullDate": null}"#;
        let lesson: LessonRecord = serde_json::from_str(json).unwrap();
        assert!(lesson.full_date.is_none());
        assert!(lesson.calendar_date().is_none());
    }

    #[test]
    fn malformed_time_is_a_structural_error() {
        let json = r#"{"date": "d", "startTime": "nine", "endTime": "9:40", "duration": 40}"#;
        let err = serde_json::from_str::<LessonRecord>(json).unwrap_err();
        assert!(err.to_string().contains("invalid time of day 'nine'"));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let json = r#"{"date": "d", "startTime": "9:00", "endTime": "9:40", "duration": -5}"#;
        assert!(serde_json::from_str::<LessonRecord>(json).is_err());
    }

    #[test]
    fn builder_sets_full_date() {
        let lesson = LessonRecord::new("4. 18. (금)", "13:40", "14:20", 40)
            .unwrap()
            .with_full_date("2025-04-18");
        assert_eq!(lesson.calendar_date(), NaiveDate::from_ymd_opt(2025, 4, 18));
    }
}
