//! Audit command implementation

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};

use kidari::application::{AuditOptions, AuditOutcome};
use kidari::presentation::{create_audit_use_case, export};

use crate::ui::context::UiContext;
use crate::ui::json::events::StartEvent;
use crate::ui::views::audit::{
    render_audit_header, render_audit_summary, render_issue_sections, render_lesson_table,
};

const COMMAND: &str = "audit";

/// Everything `kidari audit` needs beyond the use-case options
#[derive(Debug, Clone)]
pub struct AuditRequest {
    pub options: AuditOptions,
    pub export: Option<PathBuf>,
    pub allow_violations: bool,
}

pub fn cmd_audit(request: AuditRequest, ui: &UiContext) -> Result<()> {
    let started = Instant::now();

    if ui.json {
        crate::ui::json::emit_event(&StartEvent::new(COMMAND).with_policy(request.options.policy))?;
    }

    let outcome = create_audit_use_case().execute(&request.options)?;

    if let Some(path) = &request.export {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        export::write_markdown(path, &outcome.report, request.options.policy, &generated)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    if ui.json {
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        crate::ui::json::write_report(
            &mut std::io::stdout().lock(),
            COMMAND,
            &outcome.report,
            elapsed,
        )?;
    } else {
        print_text(&request, &outcome, ui);
    }

    if ui.annotate() {
        for line in crate::ui::ci::report_annotations(&outcome.report, &request.options.lessons) {
            println!("{}", line);
        }
    }

    if !outcome.is_success() && !request.allow_violations {
        std::process::exit(1);
    }

    Ok(())
}

fn print_text(request: &AuditRequest, outcome: &AuditOutcome, ui: &UiContext) {
    let options = &request.options;

    println!(
        "{}",
        render_audit_header(options, outcome, ui.color, ui.unicode)
    );
    print!(
        "{}",
        render_issue_sections(&outcome.report, options.policy, ui.color, ui.unicode)
    );
    println!(
        "{}",
        render_lesson_table(&outcome.report, ui.verbose, ui.color, ui.unicode)
    );
    print!(
        "{}",
        render_audit_summary(
            outcome,
            request.export.as_deref(),
            ui.verbose,
            ui.color,
            ui.unicode
        )
    );
}
