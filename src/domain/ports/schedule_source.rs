//! ScheduleSource port
//!
//! Produces approved duty or business-trip blocks from an attendance export.

use std::path::Path;

use crate::domain::entities::ScheduleRecord;
use crate::domain::value_objects::ScheduleLayout;
use crate::error::KidariResult;

pub trait ScheduleSource: Send + Sync {
    /// Load every approved schedule in `path`, read with the given column layout.
    fn load_schedules(&self, path: &Path, layout: ScheduleLayout)
        -> KidariResult<Vec<ScheduleRecord>>;
}
