//! Handlers for the `/categories` resource.

use appdir_core::error::CoreError;
use appdir_db::models::category::Category;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

/// GET /api/categories/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Category>> {
    let found = state.store.get_category_by_slug(&slug).await?;
    let category = found.ok_or(CoreError::SlugNotFound {
        entity: "Category",
        slug,
    })?;
    Ok(Json(category))
}
