use std::sync::Arc;

use crate::database::{
    DatabaseManager, MemoryStore, PgCourseRepository, PgInstructorRepository,
};
use crate::services::{CourseService, InstructorService};

/// Composition root: the services every handler reaches through `State`
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
    pub instructors: InstructorService,
    /// `None` when running on the in-memory store
    pub database: Option<DatabaseManager>,
}

impl AppState {
    /// Services backed by PostgreSQL
    pub fn postgres(database: DatabaseManager) -> Self {
        let pool = database.pool().clone();
        let instructors = InstructorService::new(Arc::new(PgInstructorRepository::new(pool.clone())));
        let courses = CourseService::new(Arc::new(PgCourseRepository::new(pool)), instructors.clone());

        Self {
            courses,
            instructors,
            database: Some(database),
        }
    }

    /// Services backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// Services backed by an existing in-memory store, so callers can seed it
    pub fn with_store(store: MemoryStore) -> Self {
        let instructors = InstructorService::new(Arc::new(store.clone()));
        let courses = CourseService::new(Arc::new(store), instructors.clone());

        Self {
            courses,
            instructors,
            database: None,
        }
    }
}
