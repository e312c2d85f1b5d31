//! Spreadsheet Schedule Source
//!
//! Reads the work-status and business-trip lists exported from the
//! attendance system. Exports arrive as `.xlsx`/`.xls` workbooks (first
//! worksheet), as a JSON array of row arrays, or as tab-separated text.
//! Row 0 is the header.
//!
//! A JSON array of objects is taken to be an already-normalized schedule
//! list. It is deserialized without filtering, but a period that ends
//! before it starts is rejected.

use std::path::Path;
use std::sync::LazyLock;

use calamine::{open_workbook_auto, Data, Range, Reader};
use regex::Regex;
use serde_json::Value;

use crate::domain::entities::{parse_instant, ScheduleRecord};
use crate::domain::ports::ScheduleSource;
use crate::domain::value_objects::ScheduleLayout;
use crate::error::{KidariError, KidariResult};

/// Extensions read as workbooks rather than text
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls"];

/// Approval state of a finalized request
const APPROVED_MARKER: &str = "완결";
/// Approval state of a request cancelled after approval
const CANCELLED_MARKER: &str = "기결취소";

static DUTY_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2})\s*~\s*(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2})")
        .expect("duty period regex")
});

static TRIP_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}\.\d{2}\.\d{2}\s+\d{2}:\d{2})\s*~\s*(\d{4}\.\d{2}\.\d{2}\s+\d{2}:\d{2})")
        .expect("trip period regex")
});

/// Column positions within one export layout
#[derive(Debug, Clone, Copy)]
struct Columns {
    kind: usize,
    detail: usize,
    period: usize,
    approval: usize,
}

fn columns(layout: ScheduleLayout) -> Columns {
    match layout {
        ScheduleLayout::Duty => Columns {
            kind: 2,
            detail: 5,
            period: 3,
            approval: 9,
        },
        ScheduleLayout::Trip => Columns {
            kind: 4,
            detail: 5,
            period: 7,
            approval: 9,
        },
    }
}

fn period_pattern(layout: ScheduleLayout) -> &'static Regex {
    match layout {
        ScheduleLayout::Duty => &DUTY_PERIOD,
        ScheduleLayout::Trip => &TRIP_PERIOD,
    }
}

/// Schedule source backed by a spreadsheet export
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetScheduleSource;

impl SpreadsheetScheduleSource {
    pub fn new() -> Self {
        Self
    }
}

impl ScheduleSource for SpreadsheetScheduleSource {
    fn load_schedules(
        &self,
        path: &Path,
        layout: ScheduleLayout,
    ) -> KidariResult<Vec<ScheduleRecord>> {
        let schedules = if is_workbook(path) {
            parse_rows(&workbook_rows(path)?, layout)
        } else {
            let content = std::fs::read_to_string(path)?;
            parse_schedules(&content, path, layout)?
        };
        tracing::debug!(
            file = %path.display(),
            %layout,
            count = schedules.len(),
            "loaded schedules"
        );
        Ok(schedules)
    }
}

/// Parse an export into approved schedules.
///
/// `file` is only used for error messages.
pub fn parse_schedules(
    content: &str,
    file: &Path,
    layout: ScheduleLayout,
) -> KidariResult<Vec<ScheduleRecord>> {
    if !content.trim_start().starts_with('[') {
        return Ok(parse_rows(&tsv_rows(content), layout));
    }

    let json_error = |err: serde_json::Error| KidariError::Json {
        file: file.to_path_buf(),
        message: err.to_string(),
    };

    let items: Vec<Value> = serde_json::from_str(content).map_err(json_error)?;

    if items.iter().any(Value::is_object) {
        let records: Vec<ScheduleRecord> =
            serde_json::from_value(Value::Array(items)).map_err(json_error)?;
        if let Some(reversed) = records.iter().find(|r| r.end_time < r.start_time) {
            return Err(KidariError::InvalidSchedulePeriod {
                file: file.to_path_buf(),
                period: reversed.period_label(),
            });
        }
        return Ok(records);
    }

    let rows: Vec<Vec<String>> = items
        .into_iter()
        .map(|row| match row {
            Value::Array(cells) => cells.iter().map(cell_text).collect(),
            Value::Null => Vec::new(),
            other => vec![cell_text(&other)],
        })
        .collect();
    Ok(parse_rows(&rows, layout))
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.iter().any(|w| ext.eq_ignore_ascii_case(w)))
}

/// First worksheet as text rows, anchored at cell A1.
pub fn workbook_rows(path: &Path) -> KidariResult<Vec<Vec<String>>> {
    let spreadsheet_error = |message: String| KidariError::Spreadsheet {
        file: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| spreadsheet_error("workbook has no worksheets".to_string()))?
        .map_err(|e| spreadsheet_error(e.to_string()))?;

    Ok(range_rows(&range))
}

/// Column positions are absolute, so pad back to A1 when the used range
/// starts further in.
fn range_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let lead = first_col as usize;
    let mut rows = vec![Vec::new(); first_row as usize];
    rows.extend(range.rows().map(|cells| {
        vec![String::new(); lead]
            .into_iter()
            .chain(cells.iter().map(|cell| cell.to_string()))
            .collect()
    }));
    rows
}

/// Keep approved rows whose period can be read; row 0 is the header.
pub fn parse_rows(rows: &[Vec<String>], layout: ScheduleLayout) -> Vec<ScheduleRecord> {
    let cols = columns(layout);
    let pattern = period_pattern(layout);
    let mut schedules = Vec::new();

    for (line, row) in rows.iter().enumerate().skip(1) {
        if row.len() < layout.min_columns() {
            tracing::debug!(%layout, row = line, cells = row.len(), "skipping short row");
            continue;
        }

        let period = row[cols.period].trim();
        let approval = row[cols.approval].trim();
        if period.is_empty() || approval.is_empty() {
            tracing::debug!(%layout, row = line, "skipping row without period or approval");
            continue;
        }
        if !is_approved(approval) {
            tracing::debug!(%layout, row = line, approval, "skipping unapproved row");
            continue;
        }

        let Some((start_time, end_time)) = parse_period(pattern, period) else {
            tracing::debug!(%layout, row = line, period, "skipping unreadable period");
            continue;
        };

        schedules.push(ScheduleRecord::new(
            start_time,
            end_time,
            row[cols.kind].trim(),
            row[cols.detail].trim(),
        ));
    }

    schedules
}

/// Finalized and not cancelled afterwards
pub fn is_approved(approval: &str) -> bool {
    approval.contains(APPROVED_MARKER) && !approval.contains(CANCELLED_MARKER)
}

fn parse_period(
    pattern: &Regex,
    period: &str,
) -> Option<(chrono::NaiveDateTime, chrono::NaiveDateTime)> {
    let caps = pattern.captures(period)?;
    let start = parse_instant(caps.get(1)?.as_str())?;
    let end = parse_instant(caps.get(2)?.as_str())?;
    Some((start, end))
}

fn tsv_rows(content: &str) -> Vec<Vec<String>> {
    content
        .lines()
        .map(|line| {
            line.trim_end_matches('\r')
                .split('\t')
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
