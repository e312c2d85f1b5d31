//! LessonSource port
//!
//! Produces the ordered lesson log that the checker consumes.

use std::path::Path;

use crate::domain::entities::LessonRecord;
use crate::error::KidariResult;

pub trait LessonSource: Send + Sync {
    /// Load lessons in their original chronological order.
    fn load_lessons(&self, path: &Path) -> KidariResult<Vec<LessonRecord>>;
}
