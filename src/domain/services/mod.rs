//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod compliance_checker;
mod report;

pub use compliance_checker::ComplianceChecker;
pub use report::{ConflictIssue, ConsecutiveIssue, DurationIssue, LessonDetail, ViolationReport};
