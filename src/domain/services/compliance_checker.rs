//! Compliance Checker
//!
//! Evaluates a lesson log against the session-length policy and against
//! the approved duty and business-trip schedules.
//!
//! For each lesson, in input order:
//!
//! 1. **Duration** - shorter than `min_session_minutes`.
//! 2. **Consecutive pair** - same calendar day as the previous lesson and
//!    starting exactly where it ended (literal `endTime == startTime`), with a
//!    combined length under `min_consecutive_minutes`. Only the immediately
//!    preceding lesson is considered; longer runs are evaluated pairwise.
//! 3. **Conflicts** - every duty schedule, then every trip schedule, whose
//!    window overlaps the lesson anchored on its calendar day.
//!
//! Lessons whose `fullDate` is missing or unreadable still get the
//! duration rule, but are silently excluded from rules 2 and 3.

use chrono::NaiveDate;

use super::report::{ConflictIssue, ConsecutiveIssue, DurationIssue, LessonDetail, ViolationReport};
use crate::domain::entities::{LessonRecord, ScheduleRecord};
use crate::domain::policies::CheckPolicy;
use crate::domain::value_objects::ConflictKind;

/// Stateless checker; one instance may be reused for any number of calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplianceChecker {
    policy: CheckPolicy,
}

impl ComplianceChecker {
    pub fn new(policy: CheckPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CheckPolicy {
        self.policy
    }

    /// Build the violation report for one lesson log.
    pub fn check(
        &self,
        lessons: &[LessonRecord],
        duty_schedules: &[ScheduleRecord],
        trip_schedules: &[ScheduleRecord],
    ) -> ViolationReport {
        let mut report = ViolationReport {
            total_lessons: lessons.len(),
            lessons_detail: Vec::with_capacity(lessons.len()),
            ..ViolationReport::default()
        };

        let schedule_sets = [
            (ConflictKind::Duty, duty_schedules),
            (ConflictKind::BusinessTrip, trip_schedules),
        ];

        let mut previous: Option<(&LessonRecord, Option<NaiveDate>)> = None;

        for (i, lesson) in lessons.iter().enumerate() {
            let day = lesson.calendar_date();
            let time = lesson.time_range();
            let mut issues = Vec::new();

            if let Some(shortage) = self.policy.session_shortage(lesson.duration) {
                issues.push(format!(
                    "Lesson too short: {} min (under {} min)",
                    lesson.duration, self.policy.min_session_minutes
                ));
                report.duration_issues.push(DurationIssue {
                    date: lesson.date.clone(),
                    time: time.clone(),
                    duration: lesson.duration,
                    shortage,
                });
            }

            if let Some((prev, prev_day)) = previous {
                if is_same_day(prev_day, day) && is_back_to_back(prev, lesson) {
                    let total_duration = prev.duration.saturating_add(lesson.duration);
                    if let Some(shortage) = self.policy.consecutive_shortage(total_duration) {
                        issues.push(format!(
                            "Consecutive sessions too short: {} min (under {} min)",
                            total_duration, self.policy.min_consecutive_minutes
                        ));
                        report.consecutive_issues.push(ConsecutiveIssue {
                            date: lesson.date.clone(),
                            time: format!("{}~{}", prev.start_time, lesson.end_time),
                            total_duration,
                            shortage,
                        });
                    }
                }
            }

            if let Some(day) = day {
                let start = lesson.start_time.on(day);
                let end = lesson.end_time.on(day);

                for (kind, schedules) in schedule_sets {
                    for schedule in schedules.iter().filter(|s| s.overlaps(start, end)) {
                        issues.push(format!(
                            "{}: {} ({})",
                            kind.issue_label(),
                            schedule.kind,
                            schedule.detail
                        ));
                        report.conflict_issues.push(ConflictIssue {
                            lesson_date: lesson.date.clone(),
                            lesson_time: time.clone(),
                            conflict_type: kind,
                            conflict_detail: schedule.summary(),
                            conflict_period: schedule.period_label(),
                        });
                    }
                }
            }

            report.lessons_detail.push(LessonDetail {
                index: i + 1,
                date: lesson.date.clone(),
                time,
                duration: lesson.duration,
                issues,
            });

            previous = Some((lesson, day));
        }

        tracing::trace!(
            lessons = report.total_lessons,
            duration_issues = report.duration_issues.len(),
            consecutive_issues = report.consecutive_issues.len(),
            conflict_issues = report.conflict_issues.len(),
            "compliance check finished"
        );

        report
    }
}

/// Both days known and equal; a missing day never matches.
fn is_same_day(a: Option<NaiveDate>, b: Option<NaiveDate>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// Literal text comparison: `"9:05"` and `"09:05"` are not back-to-back.
fn is_back_to_back(prev: &LessonRecord, next: &LessonRecord) -> bool {
    prev.end_time.as_str() == next.start_time.as_str()
}
