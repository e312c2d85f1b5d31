//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod conflict_kind;
mod lesson_date;
mod schedule_layout;
mod time_of_day;

pub use config_warning::ConfigWarning;
pub use conflict_kind::ConflictKind;
pub use lesson_date::LessonDate;
pub use schedule_layout::ScheduleLayout;
pub use time_of_day::TimeOfDay;
