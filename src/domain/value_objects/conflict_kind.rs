//! Conflict kind value object - which official record a lesson collided with
//!
//! - `Duty`: approved absence or duty time from the work-status list
//! - `BusinessTrip`: approved travel from the business-trip list

use serde::{Deserialize, Serialize};

/// Source of a schedule conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Work-status (duty) schedule
    #[serde(rename = "duty")]
    Duty,
    /// Business-trip schedule
    #[serde(rename = "business trip")]
    BusinessTrip,
}

impl ConflictKind {
    /// Prefix used in per-lesson issue descriptions
    pub fn issue_label(&self) -> &'static str {
        match self {
            ConflictKind::Duty => "Duty conflict",
            ConflictKind::BusinessTrip => "Business trip conflict",
        }
    }

    /// Heading used by report renderers
    pub fn title(&self) -> &'static str {
        match self {
            ConflictKind::Duty => "Work Status",
            ConflictKind::BusinessTrip => "Business Trip",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictKind::Duty => write!(f, "duty"),
            ConflictKind::BusinessTrip => write!(f, "business trip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_kind_display() {
        assert_eq!(ConflictKind::Duty.to_string(), "duty");
        assert_eq!(ConflictKind::BusinessTrip.to_string(), "business trip");
    }

    #[test]
    fn conflict_kind_serializes_as_label() {
        assert_eq!(serde_json::to_string(&ConflictKind::Duty).unwrap(), "\"duty\"");
        assert_eq!(
            serde_json::to_string(&ConflictKind::BusinessTrip).unwrap(),
            "\"business trip\""
        );
    }
}
