//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `lessons/` - Lesson log readers (extraction JSON, chat replies)
//! - `schedules/` - Attendance-system export readers (duty, business trip)

pub mod lessons;
pub mod schedules;

// Re-export for convenience
pub use lessons::JsonLessonSource;
pub use schedules::SpreadsheetScheduleSource;
