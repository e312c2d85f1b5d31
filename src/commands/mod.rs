//! Command handlers for the `kidari` binary.

mod audit;
mod explain;

pub use audit::{cmd_audit, AuditRequest};
pub use explain::cmd_explain;
