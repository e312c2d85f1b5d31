//! Layout of a tabular schedule export

use serde::{Deserialize, Serialize};

use super::ConflictKind;

/// Which official export a spreadsheet came from.
///
/// The two exports put the period, label and approval state in different
/// columns and write dates with different separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleLayout {
    /// Work-status (duty) list
    Duty,
    /// Business-trip list
    Trip,
}

impl ScheduleLayout {
    /// Fewest cells a data row must have to be read
    pub fn min_columns(&self) -> usize {
        match self {
            ScheduleLayout::Duty => 10,
            ScheduleLayout::Trip => 12,
        }
    }

    /// Conflict kind raised by schedules of this layout
    pub fn conflict_kind(&self) -> ConflictKind {
        match self {
            ScheduleLayout::Duty => ConflictKind::Duty,
            ScheduleLayout::Trip => ConflictKind::BusinessTrip,
        }
    }
}

impl std::fmt::Display for ScheduleLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleLayout::Duty => write!(f, "duty"),
            ScheduleLayout::Trip => write!(f, "trip"),
        }
    }
}
