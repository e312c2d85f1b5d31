//! Audit Use Case
//!
//! 1. Load the lesson log
//! 2. Load every duty export, then every trip export
//! 3. Run the compliance checker
//!
//! All rules live in `ComplianceChecker`; this is orchestration only.

use std::path::PathBuf;

use crate::domain::entities::ScheduleRecord;
use crate::domain::ports::{LessonSource, ScheduleSource};
use crate::domain::services::ComplianceChecker;
use crate::domain::value_objects::ScheduleLayout;
use crate::error::KidariResult;

use super::options::AuditOptions;
use super::result::AuditOutcome;

/// Audit use case, parameterized by its ingestion ports
pub struct AuditUseCase<L, S>
where
    L: LessonSource,
    S: ScheduleSource,
{
    lesson_source: L,
    schedule_source: S,
}

impl<L, S> AuditUseCase<L, S>
where
    L: LessonSource,
    S: ScheduleSource,
{
    pub fn new(lesson_source: L, schedule_source: S) -> Self {
        Self {
            lesson_source,
            schedule_source,
        }
    }

    /// Execute the audit
    pub fn execute(&self, options: &AuditOptions) -> KidariResult<AuditOutcome> {
        let lessons = self.lesson_source.load_lessons(&options.lessons)?;
        let duty = self.load_all(&options.duty_files, ScheduleLayout::Duty)?;
        let trips = self.load_all(&options.trip_files, ScheduleLayout::Trip)?;

        tracing::info!(
            lessons = lessons.len(),
            duty = duty.len(),
            trips = trips.len(),
            "running compliance check"
        );

        let undated_lessons = lessons
            .iter()
            .filter(|lesson| lesson.calendar_date().is_none())
            .count();
        if undated_lessons > 0 {
            tracing::debug!(
                undated_lessons,
                "lessons without a readable fullDate skip pair and conflict checks"
            );
        }

        let report = ComplianceChecker::new(options.policy).check(&lessons, &duty, &trips);

        Ok(AuditOutcome {
            report,
            duty_schedules: duty.len(),
            trip_schedules: trips.len(),
            undated_lessons,
        })
    }

    fn load_all(
        &self,
        files: &[PathBuf],
        layout: ScheduleLayout,
    ) -> KidariResult<Vec<ScheduleRecord>> {
        let mut schedules = Vec::new();
        for file in files {
            schedules.extend(self.schedule_source.load_schedules(file, layout)?);
        }
        Ok(schedules)
    }
}
