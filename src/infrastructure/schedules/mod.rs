//! Schedule sources

mod spreadsheet;

pub use spreadsheet::{is_approved, parse_rows, parse_schedules, SpreadsheetScheduleSource};
