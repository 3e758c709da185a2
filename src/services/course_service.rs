use std::sync::Arc;

use tracing::info;

use crate::api::dto::{CourseDto, UpdateCourseDto};
use crate::database::manager::DatabaseError;
use crate::database::models::NewCourse;
use crate::database::repository::CourseRepository;
use crate::services::{InstructorService, ServiceError};

#[derive(Clone)]
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
    instructors: InstructorService,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>, instructors: InstructorService) -> Self {
        Self {
            repository,
            instructors,
        }
    }

    /// Persist a course for an existing instructor.
    ///
    /// Fails with `InstructorNotValid` before touching the courses table when
    /// the instructor is unknown. An instructor removed between the lookup
    /// and the insert is caught by the foreign key and reported the same way.
    pub async fn create(&self, course: CourseDto) -> Result<CourseDto, ServiceError> {
        let instructor_id = course.instructor_id.ok_or_else(|| {
            ServiceError::InstructorNotValid("Instructor Not Valid for id : null".to_string())
        })?;

        let instructor = self
            .instructors
            .find_by_id(instructor_id)
            .await?
            .ok_or_else(|| ServiceError::instructor_not_valid(instructor_id))?;

        let new_course = NewCourse::for_instructor(course.name, course.category, &instructor);
        let saved = match self.repository.insert(&new_course).await {
            Ok(saved) => saved,
            Err(DatabaseError::ForeignKeyViolation(_)) => {
                return Err(ServiceError::instructor_not_valid(instructor_id))
            }
            Err(e) => return Err(e.into()),
        };

        info!("New course was saved : {:?}", saved);
        Ok(saved.into())
    }

    /// Courses whose name contains `name` when given, every course otherwise
    pub async fn list_all(&self, name: Option<&str>) -> Result<Vec<CourseDto>, ServiceError> {
        let courses = match name {
            Some(name) => self.repository.find_by_name_containing(name).await?,
            None => self.repository.find_all().await?,
        };
        Ok(courses.into_iter().map(CourseDto::from).collect())
    }

    /// Overwrite name and category; the instructor stays the same
    pub async fn update(&self, course: UpdateCourseDto, course_id: i32) -> Result<CourseDto, ServiceError> {
        let mut existing = self
            .repository
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| ServiceError::course_not_found(course_id))?;

        existing.name = course.name;
        existing.category = course.category;

        let updated = match self.repository.update(&existing).await {
            Ok(updated) => updated,
            Err(DatabaseError::NotFound(_)) => return Err(ServiceError::course_not_found(course_id)),
            Err(e) => return Err(e.into()),
        };

        info!("Course was updated : {:?}", updated);
        Ok(updated.into())
    }

    pub async fn delete(&self, course_id: i32) -> Result<(), ServiceError> {
        if !self.repository.delete_by_id(course_id).await? {
            return Err(ServiceError::course_not_found(course_id));
        }
        info!("Course {} was deleted", course_id);
        Ok(())
    }
}
