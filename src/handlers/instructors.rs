// handlers/instructors.rs - /v1/instructors handlers

use axum::extract::{Query, State};

use crate::api::dto::{InstructorDto, InstructorQuery};
use crate::api::validation::{ValidJson, ValidPath};
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /v1/instructors
pub async fn create(
    State(state): State<AppState>,
    ValidJson(instructor): ValidJson<InstructorDto>,
) -> ApiResult<InstructorDto> {
    let saved = state.instructors.create(instructor).await?;
    Ok(ApiResponse::created(saved))
}

/// GET /v1/instructors?instructor_name= - List instructors, optionally by exact name
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<InstructorQuery>,
) -> ApiResult<Vec<InstructorDto>> {
    let instructors = state
        .instructors
        .list_all(query.instructor_name.as_deref())
        .await?;
    Ok(ApiResponse::success(instructors))
}

/// DELETE /v1/instructors/:id
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(instructor_id): ValidPath<i32>,
) -> ApiResult<()> {
    state.instructors.delete(instructor_id).await?;
    Ok(ApiResponse::no_content())
}
