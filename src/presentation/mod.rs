//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Report export (Markdown)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `export` - Markdown rendering of a violation report
//!
//! ## Usage
//!
//! ```ignore
//! use kidari::presentation::factory;
//!
//! let use_case = factory::create_audit_use_case();
//! let outcome = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod export;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_audit_use_case;
