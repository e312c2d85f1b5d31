//! Audit Options

use std::path::PathBuf;

use crate::domain::policies::CheckPolicy;

/// Options for the audit use case
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Lesson log (extraction JSON or chat reply)
    pub lessons: PathBuf,
    /// Work-status exports, read in order
    pub duty_files: Vec<PathBuf>,
    /// Business-trip exports, read in order
    pub trip_files: Vec<PathBuf>,
    /// Thresholds to check against
    pub policy: CheckPolicy,
}

impl AuditOptions {
    pub fn new(lessons: impl Into<PathBuf>) -> Self {
        Self {
            lessons: lessons.into(),
            duty_files: Vec::new(),
            trip_files: Vec::new(),
            policy: CheckPolicy::default(),
        }
    }

    pub fn with_duty_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.duty_files.push(path.into());
        self
    }

    pub fn with_trip_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.trip_files.push(path.into());
        self
    }

    pub fn with_policy(mut self, policy: CheckPolicy) -> Self {
        self.policy = policy;
        self
    }
}
