// handlers/courses.rs - /v1/courses handlers

use axum::extract::{Query, State};

use crate::api::dto::{CourseDto, CourseQuery, UpdateCourseDto};
use crate::api::validation::{ValidJson, ValidPath};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /v1/courses - Create a course for an existing instructor
pub async fn create(
    State(state): State<AppState>,
    ValidJson(course): ValidJson<CourseDto>,
) -> ApiResult<CourseDto> {
    let saved = state.courses.create(course).await?;
    Ok(ApiResponse::created(saved))
}

/// GET /v1/courses?course_name= - List courses, optionally by name fragment
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> ApiResult<Vec<CourseDto>> {
    let courses = state.courses.list_all(query.course_name.as_deref()).await?;
    Ok(ApiResponse::success(courses))
}

/// PUT /v1/courses/:id - Rename or recategorize a course
pub async fn update(
    State(state): State<AppState>,
    ValidPath(course_id): ValidPath<i32>,
    ValidJson(course): ValidJson<UpdateCourseDto>,
) -> ApiResult<CourseDto> {
    let updated = state.courses.update(course, course_id).await?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /v1/courses/:id
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(course_id): ValidPath<i32>,
) -> ApiResult<()> {
    state.courses.delete(course_id).await?;
    Ok(ApiResponse::no_content())
}
