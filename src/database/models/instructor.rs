use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted row of the `instructors` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    pub id: i32,
    pub name: String,
}

/// Instructor that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstructor {
    pub name: String,
}

impl NewInstructor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
