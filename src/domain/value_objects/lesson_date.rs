//! Calendar date attached to a lesson record.
//!
//! Extraction output is loose about `fullDate`: it may be a plain ISO date,
//! a full timestamp, or text nobody can read. `LessonDate` names both shapes
//! and `normalize` folds them into one comparable `NaiveDate`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// `fullDate` as it arrived at the ingestion boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LessonDate {
    /// Already a calendar date
    Date(NaiveDate),
    /// Free text, parsed on demand
    Text(String),
}

impl LessonDate {
    /// Canonical calendar date, or `None` when the value cannot be compared.
    pub fn normalize(&self) -> Option<NaiveDate> {
        match self {
            LessonDate::Date(date) => Some(*date),
            LessonDate::Text(text) => parse_calendar_date(text.trim()),
        }
    }
}

impl From<NaiveDate> for LessonDate {
    fn from(date: NaiveDate) -> Self {
        LessonDate::Date(date)
    }
}

impl From<&str> for LessonDate {
    fn from(text: &str) -> Self {
        LessonDate::Text(text.to_string())
    }
}

fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    // Offset-carrying timestamps keep the calendar day of their own offset.
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|instant| instant.date())
}
