use std::sync::Arc;

use tracing::info;

use crate::api::dto::InstructorDto;
use crate::database::models::{Instructor, NewInstructor};
use crate::database::repository::InstructorRepository;
use crate::services::ServiceError;

#[derive(Clone)]
pub struct InstructorService {
    repository: Arc<dyn InstructorRepository>,
}

impl InstructorService {
    pub fn new(repository: Arc<dyn InstructorRepository>) -> Self {
        Self { repository }
    }

    /// Persist a new instructor. The name was checked at the boundary.
    pub async fn create(&self, instructor: InstructorDto) -> Result<InstructorDto, ServiceError> {
        let saved = self
            .repository
            .insert(&NewInstructor::new(instructor.name))
            .await?;

        info!("New instructor was saved : {:?}", saved);
        Ok(saved.into())
    }

    /// Exact name match when `name` is given, every instructor otherwise
    pub async fn list_all(&self, name: Option<&str>) -> Result<Vec<InstructorDto>, ServiceError> {
        let instructors = match name {
            Some(name) => self.repository.find_by_name(name).await?,
            None => self.repository.find_all().await?,
        };
        Ok(instructors.into_iter().map(InstructorDto::from).collect())
    }

    /// Courses of the instructor are left untouched; while any exist the
    /// store refuses the delete.
    pub async fn delete(&self, instructor_id: i32) -> Result<(), ServiceError> {
        if !self.repository.delete_by_id(instructor_id).await? {
            return Err(ServiceError::instructor_not_found(instructor_id));
        }
        info!("Instructor {} was deleted", instructor_id);
        Ok(())
    }

    pub async fn find_by_id(&self, instructor_id: i32) -> Result<Option<Instructor>, ServiceError> {
        Ok(self.repository.find_by_id(instructor_id).await?)
    }
}
