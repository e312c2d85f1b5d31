//! GitHub Actions workflow commands

use std::path::Path;

use kidari::ViolationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    line: Option<usize>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(line) = line {
        props.push(format!("line={}", line));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_property(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!("::{}{}::{}", level_str, prop_str, escape_data(message))
}

/// One `::warning` per violation, in report order.
pub fn report_annotations(report: &ViolationReport, lessons_file: &Path) -> Vec<String> {
    let file = lessons_file.to_string_lossy();
    let annotate = |title: &str, message: String| {
        github_actions_annotation(
            AnnotationLevel::Warning,
            &message,
            Some(&file),
            None,
            Some(title),
        )
    };

    let duration = report.duration_issues.iter().map(|issue| {
        annotate(
            "Lesson too short",
            format!(
                "{} {}: {} min ({} min short)",
                issue.date, issue.time, issue.duration, issue.shortage
            ),
        )
    });
    let consecutive = report.consecutive_issues.iter().map(|issue| {
        annotate(
            "Consecutive sessions too short",
            format!(
                "{} {}: {} min combined ({} min short)",
                issue.date, issue.time, issue.total_duration, issue.shortage
            ),
        )
    });
    let conflicts = report.conflict_issues.iter().map(|issue| {
        annotate(
            "Schedule conflict",
            format!(
                "{} {} overlaps {} {} ({})",
                issue.lesson_date,
                issue.lesson_time,
                issue.conflict_type,
                issue.conflict_detail,
                issue.conflict_period
            ),
        )
    });

    duration.chain(consecutive).chain(conflicts).collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
