//! Handler for the `/stats` resource.

use appdir_db::models::stats::CatalogStats;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> AppResult<Json<CatalogStats>> {
    let stats = state.store.stats().await?;
    Ok(Json(stats))
}
