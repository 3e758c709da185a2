use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::instructor::Instructor;

/// Persisted row of the `courses` table.
///
/// The instructor is held by id only; callers that need the instructor
/// itself fetch it through the instructor repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub instructor_id: i32,
}

/// Course that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub category: String,
    pub instructor_id: i32,
}

impl NewCourse {
    /// Build a course owned by an instructor that was already loaded from the store.
    pub fn for_instructor(
        name: impl Into<String>,
        category: impl Into<String>,
        instructor: &Instructor,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            instructor_id: instructor.id,
        }
    }
}
