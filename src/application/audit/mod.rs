//! Audit Module
//!
//! Loads a lesson log plus its duty and trip exports and runs the
//! compliance check over them.
//!
//! ## Structure
//!
//! - `options` - Input files and thresholds (`AuditOptions`)
//! - `result` - Report plus load statistics (`AuditOutcome`)
//! - `use_case` - Orchestration (`AuditUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use kidari::application::audit::{AuditOptions, AuditUseCase};
//!
//! let use_case = AuditUseCase::new(lesson_source, schedule_source);
//! let outcome = use_case.execute(&AuditOptions::new("lessons.json"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::AuditOptions;
pub use result::AuditOutcome;
pub use use_case::AuditUseCase;
