use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Course, Instructor, NewCourse, NewInstructor};

/// Persistence operations on instructors.
///
/// Implementations own all storage details; no `sqlx` types leak through
/// these signatures.
#[async_trait]
pub trait InstructorRepository: Send + Sync {
    /// All instructors, ordered by id
    async fn find_all(&self) -> Result<Vec<Instructor>, DatabaseError>;

    /// Instructors whose name equals `name` exactly
    async fn find_by_name(&self, name: &str) -> Result<Vec<Instructor>, DatabaseError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Instructor>, DatabaseError>;

    /// Insert and return the row with its assigned id
    async fn insert(&self, instructor: &NewInstructor) -> Result<Instructor, DatabaseError>;

    /// Returns `false` when no row had that id.
    ///
    /// Fails with `DatabaseError::ForeignKeyViolation` while courses still
    /// reference the instructor.
    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError>;
}

/// Persistence operations on courses
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// All courses, ordered by id
    async fn find_all(&self) -> Result<Vec<Course>, DatabaseError>;

    /// Courses whose name contains `fragment` (case-sensitive)
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Course>, DatabaseError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DatabaseError>;

    /// Insert and return the row with its assigned id.
    ///
    /// Fails with `DatabaseError::ForeignKeyViolation` when the instructor
    /// does not exist.
    async fn insert(&self, course: &NewCourse) -> Result<Course, DatabaseError>;

    /// Overwrite name and category of an existing course.
    ///
    /// Returns `DatabaseError::NotFound` when the row is gone.
    async fn update(&self, course: &Course) -> Result<Course, DatabaseError>;

    /// Returns `false` when no row had that id
    async fn delete_by_id(&self, id: i32) -> Result<bool, DatabaseError>;
}
