//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod lesson_source;
pub mod schedule_source;

pub use lesson_source::LessonSource;
pub use schedule_source::ScheduleSource;
