//! Audit Result

use crate::domain::services::ViolationReport;

/// Outcome of one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    pub report: ViolationReport,
    /// Approved duty blocks loaded across all duty files
    pub duty_schedules: usize,
    /// Approved trips loaded across all trip files
    pub trip_schedules: usize,
    /// Lessons without a readable `fullDate`, checked for duration only
    pub undated_lessons: usize,
}

impl AuditOutcome {
    pub fn is_success(&self) -> bool {
        !self.report.has_violations()
    }
}
