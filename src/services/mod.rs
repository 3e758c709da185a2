pub mod course_service;
pub mod instructor_service;

pub use course_service::CourseService;
pub use instructor_service::InstructorService;

use crate::database::manager::DatabaseError;

/// Domain errors raised by the services
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    InstructorNotValid(String),
    #[error("{0}")]
    InstructorNotFound(String),
    #[error("{0}")]
    CourseNotFound(String),
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    pub fn instructor_not_valid(instructor_id: i32) -> Self {
        ServiceError::InstructorNotValid(format!("Instructor Not Valid for id : {}", instructor_id))
    }

    pub fn instructor_not_found(instructor_id: i32) -> Self {
        ServiceError::InstructorNotFound(format!("NO instructor found with this id : {}", instructor_id))
    }

    pub fn course_not_found(course_id: i32) -> Self {
        ServiceError::CourseNotFound(format!("NO course found with this id : {}", course_id))
    }
}
