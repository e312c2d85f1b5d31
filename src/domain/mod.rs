//! Domain Layer
//!
//! This is the core of Kidari - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (LessonRecord, ScheduleRecord)
//! - `value_objects/` - Immutable value types (TimeOfDay, LessonDate, ConflictKind)
//! - `services/` - Domain services (ComplianceChecker, ViolationReport)
//! - `policies/` - Business rules (CheckPolicy)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
