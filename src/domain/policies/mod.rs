//! Domain Policies
//!
//! Business rules that govern what counts as a violation.

mod check_policy;

pub use check_policy::{CheckPolicy, MIN_CONSECUTIVE_MINUTES, MIN_SESSION_MINUTES};
