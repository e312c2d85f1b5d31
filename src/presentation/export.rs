//! Markdown report export
//!
//! A printable summary of one audit: totals, one table per non-empty issue
//! category and the full lesson list. Korean weekday markers in display
//! dates are translated so the report reads in English throughout.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::policies::CheckPolicy;
use crate::domain::services::ViolationReport;
use crate::error::KidariResult;

const WEEKDAYS: &[(&str, &str)] = &[
    ("(월)", "(Mon)"),
    ("(화)", "(Tue)"),
    ("(수)", "(Wed)"),
    ("(목)", "(Thu)"),
    ("(금)", "(Fri)"),
    ("(토)", "(Sat)"),
    ("(일)", "(Sun)"),
];

/// Replace Korean weekday markers such as `(금)` with `(Fri)`.
pub fn translate_weekday(date: &str) -> String {
    WEEKDAYS
        .iter()
        .fold(date.to_string(), |acc, (korean, english)| {
            acc.replace(korean, english)
        })
}

/// Render the report as Markdown. `generated` is printed verbatim.
pub fn render_markdown(report: &ViolationReport, policy: CheckPolicy, generated: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Kidari Lesson Checker Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated: {generated}");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Total Lessons | Passed | Issues Found |");
    let _ = writeln!(out, "|---|---|---|");
    let _ = writeln!(
        out,
        "| {} | {} | {} |",
        report.total_lessons,
        report.passed_lessons(),
        report.total_issues()
    );

    if !report.duration_issues.is_empty() {
        section(
            &mut out,
            &format!(
                "Duration Issues (< {}min): {}",
                policy.min_session_minutes,
                report.duration_issues.len()
            ),
            &["Date", "Time", "Duration", "Shortage"],
            report.duration_issues.iter().map(|issue| {
                vec![
                    translate_weekday(&issue.date),
                    issue.time.clone(),
                    format!("{}min", issue.duration),
                    format!("{}min", issue.shortage),
                ]
            }),
        );
    }

    if !report.consecutive_issues.is_empty() {
        section(
            &mut out,
            &format!(
                "Consecutive Session Issues (< {}min): {}",
                policy.min_consecutive_minutes,
                report.consecutive_issues.len()
            ),
            &["Date", "Time", "Total Duration", "Shortage"],
            report.consecutive_issues.iter().map(|issue| {
                vec![
                    translate_weekday(&issue.date),
                    issue.time.clone(),
                    format!("{}min", issue.total_duration),
                    format!("{}min", issue.shortage),
                ]
            }),
        );
    }

    if !report.conflict_issues.is_empty() {
        section(
            &mut out,
            &format!("Schedule Conflicts: {}", report.conflict_issues.len()),
            &["Lesson Date", "Lesson Time", "Type", "Detail", "Conflict Period"],
            report.conflict_issues.iter().map(|issue| {
                vec![
                    translate_weekday(&issue.lesson_date),
                    issue.lesson_time.clone(),
                    issue.conflict_type.title().to_string(),
                    issue.conflict_detail.clone(),
                    issue.conflict_period.clone(),
                ]
            }),
        );
    }

    section(
        &mut out,
        "All Lessons",
        &["#", "Date", "Time", "Duration", "Status"],
        report.lessons_detail.iter().map(|lesson| {
            vec![
                lesson.index.to_string(),
                translate_weekday(&lesson.date),
                lesson.time.clone(),
                format!("{}min", lesson.duration),
                if lesson.is_compliant() { "OK" } else { "ISSUE" }.to_string(),
            ]
        }),
    );

    out
}

/// Render and write the report to `path`.
pub fn write_markdown(
    path: &Path,
    report: &ViolationReport,
    policy: CheckPolicy,
    generated: &str,
) -> KidariResult<()> {
    std::fs::write(path, render_markdown(report, policy, generated))?;
    tracing::info!(file = %path.display(), "wrote report");
    Ok(())
}

fn section(
    out: &mut String,
    title: &str,
    head: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## {title}");
    let _ = writeln!(out);
    let _ = writeln!(out, "| {} |", head.join(" | "));
    let _ = writeln!(out, "|{}", "---|".repeat(head.len()));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|cell| table_cell(cell)).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
}

/// A cell must stay on its row: pipes are escaped, line breaks become `<br>`.
fn table_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\r', '\n'], "<br>")
}
