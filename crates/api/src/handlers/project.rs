//! Handlers for the `/projects` resource.

use appdir_core::error::CoreError;
use appdir_core::types::DbId;
use appdir_db::intake;
use appdir_db::models::project::{CreateProject, Project, ProjectWithCategory};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::query::ProjectListParams;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<ProjectWithCategory>>> {
    let filters = params.into_filters()?;
    let projects = state.store.list_projects(&filters).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<ProjectWithCategory>> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let project = state
        .store
        .get_project(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    Ok(Json(project))
}

/// POST /api/projects
///
/// Public submission. The stored project is pending review and is not
/// listed until a moderator approves it.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let project = intake::submit_project(state.store.as_ref(), &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
