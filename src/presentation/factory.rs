//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::AuditUseCase;
use crate::infrastructure::{JsonLessonSource, SpreadsheetScheduleSource};

/// Type alias for the concrete AuditUseCase with all dependencies
pub type ConcreteAuditUseCase = AuditUseCase<JsonLessonSource, SpreadsheetScheduleSource>;

/// Create an audit use case reading lesson JSON and spreadsheet exports
pub fn create_audit_use_case() -> ConcreteAuditUseCase {
    AuditUseCase::new(JsonLessonSource::new(), SpreadsheetScheduleSource::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AuditOptions;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn factory_use_case_reads_real_files() {
        let dir = tempdir().unwrap();
        let lessons = dir.path().join("lessons.json");
        fs::write(
            &lessons,
            r#"[{"date": "a", "startTime": "9:00", "endTime": "9:30", "duration": 30}]"#,
        )
        .unwrap();

        let outcome = create_audit_use_case()
            .execute(&AuditOptions::new(&lessons))
            .unwrap();
        assert_eq!(outcome.report.duration_issues.len(), 1);
    }
}
