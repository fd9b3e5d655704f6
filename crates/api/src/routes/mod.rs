pub mod category;
pub mod health;
pub mod project;
pub mod stats;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list
/// /categories/{slug}          get by slug
///
/// /projects                   list (filtered, sorted), submit (POST)
/// /projects/{id}              get
///
/// /stats                      directory counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/projects", project::router())
        .nest("/stats", stats::router())
}
