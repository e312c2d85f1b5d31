//! Check Policy
//!
//! Minimum-length rules for supplementary sessions. The thresholds are
//! plain data so a different policy can be injected without code edits.

use serde::{Deserialize, Serialize};

/// Shortest acceptable single session, in minutes
pub const MIN_SESSION_MINUTES: u32 = 40;

/// Shortest acceptable back-to-back pair, in minutes
pub const MIN_CONSECUTIVE_MINUTES: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPolicy {
    #[serde(default = "default_min_session_minutes")]
    pub min_session_minutes: u32,

    #[serde(default = "default_min_consecutive_minutes")]
    pub min_consecutive_minutes: u32,
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self {
            min_session_minutes: MIN_SESSION_MINUTES,
            min_consecutive_minutes: MIN_CONSECUTIVE_MINUTES,
        }
    }
}

fn default_min_session_minutes() -> u32 {
    MIN_SESSION_MINUTES
}

fn default_min_consecutive_minutes() -> u32 {
    MIN_CONSECUTIVE_MINUTES
}

impl CheckPolicy {
    pub fn new(min_session_minutes: u32, min_consecutive_minutes: u32) -> Self {
        Self {
            min_session_minutes,
            min_consecutive_minutes,
        }
    }

    /// Minutes missing from a single session, if any
    pub fn session_shortage(&self, duration: u32) -> Option<u32> {
        shortage(self.min_session_minutes, duration)
    }

    /// Minutes missing from a back-to-back pair, if any
    pub fn consecutive_shortage(&self, total_duration: u32) -> Option<u32> {
        shortage(self.min_consecutive_minutes, total_duration)
    }
}

fn shortage(minimum: u32, actual: u32) -> Option<u32> {
    (actual < minimum).then(|| minimum - actual)
}
