//! Field-presence checks run at the HTTP boundary before any service call

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::dto::{CourseDto, InstructorDto, UpdateCourseDto};
use crate::error::ApiError;

/// A body type that knows which of its fields are required
pub trait Validate {
    /// Human-readable violation messages, empty when the value is valid
    fn violations(&self) -> Vec<String>;

    fn validate(&self) -> Result<(), ApiError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error(violations))
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Validate for CourseDto {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if is_blank(&self.name) {
            violations.push("courseDTO.name must NOT be blank".to_string());
        }
        if is_blank(&self.category) {
            violations.push("courseDTO.category must NOT be blank".to_string());
        }
        if self.instructor_id.is_none() {
            violations.push("courseDTO.instructorId must NOT be null".to_string());
        }
        violations
    }
}

impl Validate for UpdateCourseDto {
    fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if is_blank(&self.name) {
            violations.push("courseDTO.name must NOT be blank".to_string());
        }
        if is_blank(&self.category) {
            violations.push("courseDTO.category must NOT be blank".to_string());
        }
        violations
    }
}

impl Validate for InstructorDto {
    fn violations(&self) -> Vec<String> {
        if is_blank(&self.name) {
            vec!["instructorDTO.name must NOT be blank".to_string()]
        } else {
            Vec::new()
        }
    }
}

/// JSON body extractor that rejects with `ApiError` when the body does not
/// parse or when `Validate` reports violations
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

/// Path extractor that rejects with `ApiError`, so an unparseable id gets
/// the same JSON error body as every other failure
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(ValidPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{course_dto, instructor_dto};

    #[test]
    fn empty_course_yields_three_sorted_messages() {
        let dto = CourseDto {
            id: None,
            name: String::new(),
            category: String::new(),
            instructor_id: None,
        };

        match dto.validate() {
            Err(ApiError::ValidationError(errors)) => assert_eq!(
                errors,
                vec![
                    "courseDTO.category must NOT be blank",
                    "courseDTO.instructorId must NOT be null",
                    "courseDTO.name must NOT be blank",
                ]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_counts_as_blank() {
        let mut dto = course_dto(Some(1));
        dto.category = "   ".to_string();
        assert_eq!(dto.violations(), vec!["courseDTO.category must NOT be blank"]);
    }

    #[test]
    fn complete_course_is_valid() {
        assert!(course_dto(Some(1)).validate().is_ok());
    }

    #[test]
    fn update_does_not_require_instructor() {
        let dto = UpdateCourseDto {
            name: "Kotlin Design Patterns".to_string(),
            category: "Design".to_string(),
        };
        assert!(dto.violations().is_empty());
    }

    #[test]
    fn blank_update_yields_two_sorted_messages() {
        let dto = UpdateCourseDto {
            name: String::new(),
            category: " ".to_string(),
        };

        match dto.validate() {
            Err(ApiError::ValidationError(errors)) => assert_eq!(
                errors,
                vec![
                    "courseDTO.category must NOT be blank",
                    "courseDTO.name must NOT be blank",
                ]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn instructor_requires_name() {
        assert_eq!(
            instructor_dto("").violations(),
            vec!["instructorDTO.name must NOT be blank"]
        );
        assert!(instructor_dto("Moshe Rabenu").violations().is_empty());
    }
}
