//! Violation report
//!
//! The fully materialized outcome of one compliance check. Field names
//! follow the camelCase contract consumed by renderers and JSON output.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ConflictKind;

/// Lesson shorter than the single-session minimum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationIssue {
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub shortage: u32,
}

/// Back-to-back pair shorter than the combined minimum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsecutiveIssue {
    pub date: String,
    /// First lesson's start through second lesson's end
    pub time: String,
    pub total_duration: u32,
    pub shortage: u32,
}

/// Lesson overlapping an approved duty or trip block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictIssue {
    pub lesson_date: String,
    pub lesson_time: String,
    pub conflict_type: ConflictKind,
    pub conflict_detail: String,
    pub conflict_period: String,
}

/// One row per input lesson, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDetail {
    /// 1-based position in the input
    pub index: usize,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub issues: Vec<String>,
}

impl LessonDetail {
    pub fn is_compliant(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationReport {
    pub total_lessons: usize,
    pub duration_issues: Vec<DurationIssue>,
    pub consecutive_issues: Vec<ConsecutiveIssue>,
    pub conflict_issues: Vec<ConflictIssue>,
    pub lessons_detail: Vec<LessonDetail>,
}

impl ViolationReport {
    /// Entries across all three issue categories
    pub fn total_issues(&self) -> usize {
        self.duration_issues.len() + self.consecutive_issues.len() + self.conflict_issues.len()
    }

    /// Lessons with no attached issue
    pub fn passed_lessons(&self) -> usize {
        self.lessons_detail
            .iter()
            .filter(|lesson| lesson.is_compliant())
            .count()
    }

    pub fn has_violations(&self) -> bool {
        self.total_issues() > 0
    }

    /// Conflict entries raised against one kind of schedule
    pub fn conflicts_of(&self, kind: ConflictKind) -> impl Iterator<Item = &ConflictIssue> {
        self.conflict_issues
            .iter()
            .filter(move |issue| issue.conflict_type == kind)
    }
}
