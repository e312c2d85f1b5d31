//! NDJSON output for `--json` mode.
//!
//! One JSON object per line on stdout: `start`, the command's payload
//! events (`lesson` rows for audit, `data` for explain), then `complete`
//! or `error`.

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

use kidari::ViolationReport;

use events::{CompleteEvent, LessonEvent};

/// Write one event followed by a newline.
pub fn write_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event).map_err(io::Error::from)?;
    out.write_all(b"\n")
}

/// Write one event to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    write_event(&mut io::stdout().lock(), event)
}

/// Stream an audit result: one `lesson` event per row in input order, then
/// `complete` carrying the whole report. `success` is false on any violation.
pub fn write_report<W: Write>(
    out: &mut W,
    command: &str,
    report: &ViolationReport,
    duration_ms: u64,
) -> io::Result<()> {
    for lesson in &report.lessons_detail {
        write_event(out, &LessonEvent::new(command, lesson))?;
    }

    let complete = if report.has_violations() {
        CompleteEvent::failure(command)
    } else {
        CompleteEvent::success(command)
    };
    write_event(out, &complete.with_duration(duration_ms).with_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::StartEvent;
    use kidari::{ComplianceChecker, LessonRecord};

    fn lines(buffer: Vec<u8>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn write_event_is_one_line() {
        let mut buffer = Vec::new();
        write_event(&mut buffer, &StartEvent::new("audit")).unwrap();

        let output = String::from_utf8(buffer.clone()).unwrap();
        assert!(output.ends_with('\n'));
        assert_eq!(output.matches('\n').count(), 1);
        assert_eq!(lines(buffer)[0]["event"], "start");
    }

    #[test]
    fn report_streams_lessons_then_complete() {
        let lessons = vec![
            LessonRecord::new("4. 18. (금)", "13:00", "13:40", 40).unwrap(),
            LessonRecord::new("4. 18. (금)", "13:40", "14:10", 30).unwrap(),
        ];
        let report = ComplianceChecker::default().check(&lessons, &[], &[]);

        let mut buffer = Vec::new();
        write_report(&mut buffer, "audit", &report, 7).unwrap();
        let events = lines(buffer);

        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "lesson");
        assert_eq!(events[0]["index"], 1);
        assert_eq!(events[1]["time"], "13:40~14:10");
        assert_eq!(events[2]["event"], "complete");
        assert_eq!(events[2]["success"], false);
        assert_eq!(events[2]["duration_ms"], 7);
        assert_eq!(events[2]["report"]["totalLessons"], 2);
    }

    #[test]
    fn clean_report_completes_successfully() {
        let lessons = vec![LessonRecord::new("4. 21. (월)", "15:00", "15:50", 50).unwrap()];
        let report = ComplianceChecker::default().check(&lessons, &[], &[]);

        let mut buffer = Vec::new();
        write_report(&mut buffer, "audit", &report, 0).unwrap();
        let events = lines(buffer);

        assert_eq!(events.len(), 2);
        assert_eq!(events[1]["success"], true);
    }
}
