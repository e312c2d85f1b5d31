//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AuditUseCase` - Load lessons and schedules, then run the compliance check

pub mod audit;

pub use audit::{AuditOptions, AuditOutcome, AuditUseCase};
