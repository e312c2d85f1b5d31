//! Kidari - supplementary lesson log compliance checker
//!
//! Kidari audits the lesson log of an after-school support program. Every
//! session must meet a minimum length, back-to-back pairs must meet a
//! combined minimum, and no session may overlap an approved duty absence
//! or business trip taken from the attendance system.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{LessonRecord, ScheduleRecord};
pub use domain::policies::{CheckPolicy, MIN_CONSECUTIVE_MINUTES, MIN_SESSION_MINUTES};
pub use domain::services::{ComplianceChecker, ViolationReport};
pub use domain::value_objects::{ConflictKind, LessonDate, TimeOfDay};
pub use error::{KidariError, KidariResult};
