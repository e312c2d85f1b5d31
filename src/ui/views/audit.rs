use std::path::Path;

use kidari::application::{AuditOptions, AuditOutcome};
use kidari::{CheckPolicy, ConflictKind, ViolationReport};

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{plural, ColoredText};

pub fn render_audit_header(
    options: &AuditOptions,
    outcome: &AuditOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    CommandHeader::audit()
        .field("Lessons", options.lessons.display().to_string())
        .sources("Duty", outcome.duty_schedules, options.duty_files.len())
        .sources("Trips", outcome.trip_schedules, options.trip_files.len())
        .policy(options.policy)
        .render(supports_color, supports_unicode)
}

/// One section per non-empty issue category, entries in report order.
pub fn render_issue_sections(
    report: &ViolationReport,
    policy: CheckPolicy,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !report.duration_issues.is_empty() {
        let items = report.duration_issues.iter().map(|issue| CheckItem {
            name: format!("{} {}", issue.date, issue.time),
            status: CheckStatus::Issue,
            message: format!("{} min", issue.duration),
            recommendation: Some(format!("{} min short", issue.shortage)),
            details: Vec::new(),
        });
        push_section(
            &mut out,
            Icon::Duration,
            &format!(
                "Duration Issues (< {}min): {}",
                policy.min_session_minutes,
                report.duration_issues.len()
            ),
            items,
            supports_color,
            supports_unicode,
        );
    }

    if !report.consecutive_issues.is_empty() {
        let items = report.consecutive_issues.iter().map(|issue| CheckItem {
            name: format!("{} {}", issue.date, issue.time),
            status: CheckStatus::Issue,
            message: format!("{} min combined", issue.total_duration),
            recommendation: Some(format!("{} min short", issue.shortage)),
            details: Vec::new(),
        });
        push_section(
            &mut out,
            Icon::Consecutive,
            &format!(
                "Consecutive Session Issues (< {}min): {}",
                policy.min_consecutive_minutes,
                report.consecutive_issues.len()
            ),
            items,
            supports_color,
            supports_unicode,
        );
    }

    if !report.conflict_issues.is_empty() {
        let items = [ConflictKind::Duty, ConflictKind::BusinessTrip]
            .into_iter()
            .flat_map(|kind| report.conflicts_of(kind))
            .map(|issue| CheckItem {
                name: format!("{} {}", issue.lesson_date, issue.lesson_time),
                status: CheckStatus::Issue,
                message: format!("{}: {}", issue.conflict_type.title(), issue.conflict_detail),
                recommendation: Some(issue.conflict_period.clone()),
                details: Vec::new(),
            });
        push_section(
            &mut out,
            Icon::Conflict,
            &format!("Schedule Conflicts: {}", report.conflict_issues.len()),
            items,
            supports_color,
            supports_unicode,
        );
    }

    out
}

/// Every lesson in input order; issue descriptions only when verbose.
pub fn render_lesson_table(
    report: &ViolationReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if report.lessons_detail.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim("No lessons found in the log.").render(supports_color)
        );
    }

    let index_width = report.total_lessons.to_string().len();
    let mut out = format!(
        "{}\n",
        ColoredText::info("Lessons").bold().render(supports_color)
    );
    for lesson in &report.lessons_detail {
        let (status, message) = match lesson.issues.len() {
            0 => (CheckStatus::Pass, format!("{} min", lesson.duration)),
            1 => (CheckStatus::Issue, format!("{} min, 1 issue", lesson.duration)),
            n => (CheckStatus::Issue, format!("{} min, {} issues", lesson.duration, n)),
        };
        let item = CheckItem {
            name: format!(
                "#{:<width$} {} {}",
                lesson.index,
                lesson.date,
                lesson.time,
                width = index_width
            ),
            status,
            message,
            recommendation: None,
            details: lesson.issues.clone(),
        };
        out.push_str(&item.render(verbose > 0, supports_color, supports_unicode));
    }
    out
}

pub fn render_audit_summary(
    outcome: &AuditOutcome,
    export: Option<&Path>,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let report = &outcome.report;
    let mut summary = if outcome.is_success() {
        ResultSummary::success("Audit passed")
    } else {
        ResultSummary::failure(format!(
            "Audit failed: {} {}",
            report.total_issues(),
            plural(report.total_issues(), "issue", "issues")
        ))
    };

    summary.add_stat("lessons checked", report.total_lessons);
    summary.add_stat("passed", report.passed_lessons());
    summary.add_stat("duration issues", report.duration_issues.len());
    summary.add_stat("consecutive issues", report.consecutive_issues.len());
    summary.add_stat("schedule conflicts", report.conflict_issues.len());

    if let Some(path) = export {
        summary.add_info(format!("Report written to {}", path.display()));
    }

    if outcome.undated_lessons > 0 {
        summary.add_warning(format!(
            "{} {} without a readable date: duration check only",
            outcome.undated_lessons,
            plural(outcome.undated_lessons, "lesson", "lessons")
        ));
    }

    if !outcome.is_success() {
        if verbose == 0 {
            summary.with_next_step("Rerun with -v to list every issue per lesson");
        } else {
            summary.with_next_step("Run `kidari explain` to review the rules");
        }
    }

    summary.render(supports_color, supports_unicode)
}

fn push_section(
    out: &mut String,
    icon: Icon,
    title: &str,
    items: impl Iterator<Item = CheckItem>,
    supports_color: bool,
    supports_unicode: bool,
) {
    out.push_str(&format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        ColoredText::warning(title).bold().render(supports_color)
    ));
    for item in items {
        out.push_str(&item.render(false, supports_color, supports_unicode));
    }
    out.push('\n');
}
