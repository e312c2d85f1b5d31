//! Property tests for the compliance checker.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;

use kidari::{CheckPolicy, ComplianceChecker, LessonRecord, ScheduleRecord};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 18).unwrap()
}

fn clock(minutes: u16) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

fn at(minutes: u16) -> NaiveDateTime {
    day().and_time(NaiveTime::MIN) + chrono::TimeDelta::minutes(i64::from(minutes))
}

/// A lesson starting between 08:00 and 18:59, up to two hours long.
fn lesson() -> impl Strategy<Value = LessonRecord> {
    (480u16..1140, 1u16..=120, any::<bool>()).prop_map(|(start, len, dated)| {
        let record = LessonRecord::new("4. 18. (금)", &clock(start), &clock(start + len), u32::from(len))
            .unwrap();
        if dated {
            record.with_full_date(day())
        } else {
            record
        }
    })
}

fn schedule() -> impl Strategy<Value = ScheduleRecord> {
    (480u16..1140, 10u16..=240).prop_map(|(start, len)| {
        ScheduleRecord::new(at(start), at(start + len), "외출", "병원")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: checking is a pure function of its inputs.
    #[test]
    fn property_check_is_deterministic(
        lessons in proptest::collection::vec(lesson(), 0..=10),
        duty in proptest::collection::vec(schedule(), 0..=3),
        trips in proptest::collection::vec(schedule(), 0..=3),
    ) {
        let checker = ComplianceChecker::default();
        let first = checker.check(&lessons, &duty, &trips);
        let second = checker.check(&lessons, &duty, &trips);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: one detail row per lesson, in order, and every categorized
    /// issue shows up as exactly one row-level issue string.
    #[test]
    fn property_details_mirror_categorized_issues(
        lessons in proptest::collection::vec(lesson(), 0..=10),
        duty in proptest::collection::vec(schedule(), 0..=3),
        trips in proptest::collection::vec(schedule(), 0..=3),
    ) {
        let report = ComplianceChecker::default().check(&lessons, &duty, &trips);

        prop_assert_eq!(report.total_lessons, lessons.len());
        prop_assert_eq!(report.lessons_detail.len(), lessons.len());
        for (i, detail) in report.lessons_detail.iter().enumerate() {
            prop_assert_eq!(detail.index, i + 1);
            prop_assert_eq!(detail.duration, lessons[i].duration);
        }

        let row_issues: usize = report.lessons_detail.iter().map(|d| d.issues.len()).sum();
        prop_assert_eq!(row_issues, report.total_issues());
        prop_assert_eq!(
            report.passed_lessons() + report.lessons_detail.iter().filter(|d| !d.issues.is_empty()).count(),
            lessons.len()
        );
    }

    /// PROPERTY: the duration rule fires exactly below the threshold.
    #[test]
    fn property_duration_rule_matches_threshold(
        duration in 1u32..=180,
        threshold in 1u32..=120,
    ) {
        let lesson = LessonRecord::new("4. 18. (금)", "9:00", "9:30", duration).unwrap();
        let report = ComplianceChecker::new(CheckPolicy::new(threshold, 80))
            .check(std::slice::from_ref(&lesson), &[], &[]);

        prop_assert_eq!(report.duration_issues.len(), usize::from(duration < threshold));
        if let Some(issue) = report.duration_issues.first() {
            prop_assert_eq!(issue.shortage, threshold - duration);
        }
    }

    /// PROPERTY: undated lessons only ever collect duration issues.
    #[test]
    fn property_undated_lessons_skip_pair_and_conflict_rules(
        lessons in proptest::collection::vec(lesson(), 1..=8),
        duty in proptest::collection::vec(schedule(), 0..=3),
    ) {
        let undated: Vec<LessonRecord> = lessons
            .into_iter()
            .map(|mut lesson| {
                lesson.full_date = None;
                lesson
            })
            .collect();

        let report = ComplianceChecker::default().check(&undated, &duty, &duty);
        prop_assert!(report.consecutive_issues.is_empty());
        prop_assert!(report.conflict_issues.is_empty());
    }
}
