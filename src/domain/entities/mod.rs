//! Domain Entities
//!
//! - `LessonRecord` - one session from an instructor's lesson log
//! - `ScheduleRecord` - an approved duty or business-trip block

mod lesson;
mod schedule;

pub use lesson::LessonRecord;
pub use schedule::{parse_instant, ScheduleRecord};
