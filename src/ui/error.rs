use kidari::KidariError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json::events::ErrorEvent;

pub fn format_kidari_error(err: &KidariError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_kidari_error_with(
        err,
        caps.supports_color,
        caps.supports_unicode,
        caps.is_tty.then(|| usize::from(caps.width)),
    )
}

fn format_kidari_error_with(
    err: &KidariError,
    supports_color: bool,
    supports_unicode: bool,
    columns: Option<usize>,
) -> String {
    let file = err
        .file()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("kidari"));

    let mut block = ErrorBlock::new(file, err.to_string());
    if let Some(line) = error_line(err) {
        block = block.at_line(line).with_source_context(1);
    }
    if let Some(fix) = error_help(err) {
        block = block.with_fix(fix);
    }
    if let Some(columns) = columns {
        block = block.max_width(columns);
    }
    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(kidari) = err.downcast_ref::<KidariError>() {
        return format_kidari_error(kidari);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool, command: &str) {
    let kidari = err.downcast_ref::<KidariError>();

    if json {
        let code = kidari.map(error_code).unwrap_or("ERROR");
        let mut event = ErrorEvent::new(command, code, format!("{:#}", err));
        if let Some(help) = kidari.and_then(error_help) {
            event = event.with_help(help);
        }
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_github_actions() {
        let file = kidari
            .and_then(KidariError::file)
            .map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &format!("{:#}", err),
                file.as_deref(),
                kidari.and_then(error_line),
                Some("Kidari"),
            )
        );
    }

    eprint!("{}", format_error(err));
}

/// Stable identifier for the `error` NDJSON event
pub fn error_code(err: &KidariError) -> &'static str {
    match err {
        KidariError::Io(_) => "IO_ERROR",
        KidariError::Json { .. } => "INVALID_JSON",
        KidariError::NoLessons { .. } => "NO_LESSONS",
        KidariError::InvalidTimeOfDay { .. } => "INVALID_TIME",
        KidariError::InvalidConfig { .. } => "INVALID_CONFIG",
        KidariError::Spreadsheet { .. } => "INVALID_SPREADSHEET",
        KidariError::InvalidSchedulePeriod { .. } => "INVALID_SCHEDULE",
    }
}

fn error_help(err: &KidariError) -> Option<&'static str> {
    match err {
        KidariError::Json { .. } => Some(
            "Lessons need date, startTime, endTime and duration; schedules need startTime, endTime and type.",
        ),
        KidariError::NoLessons { .. } => {
            Some("Pass the extraction output: {\"lessons\": [...]} or a bare array of lessons.")
        }
        KidariError::InvalidTimeOfDay { .. } => Some("Write lesson times as 24-hour H:MM, e.g. 13:40."),
        KidariError::InvalidConfig { .. } => {
            Some("Fix the TOML, or remove the file to fall back to defaults.")
        }
        KidariError::Spreadsheet { .. } => Some(
            "Pass the .xlsx/.xls file as exported, or save the first sheet as JSON rows or TSV.",
        ),
        KidariError::InvalidSchedulePeriod { .. } => {
            Some("Swap startTime and endTime, or drop the entry.")
        }
        KidariError::Io(_) => None,
    }
}

/// Line reported by the TOML or JSON parser (`... at line N, column M`)
fn error_line(err: &KidariError) -> Option<usize> {
    let (KidariError::InvalidConfig { message, .. } | KidariError::Json { message, .. }) = err
    else {
        return None;
    };
    let rest = &message[message.rfind("at line ")? + "at line ".len()..];
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
