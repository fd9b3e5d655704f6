//! Storage contract for the catalog.
//!
//! [`CatalogStore`] is the single capability both backends implement. The
//! HTTP layer and [`crate::intake`] only ever see `dyn CatalogStore`, so the
//! backend is chosen once at startup and nothing downstream can tell which
//! one is in use.

use appdir_core::types::DbId;
use async_trait::async_trait;

use crate::models::category::{Category, CreateCategory};
use crate::models::project::{
    CreateProject, ModerateProject, Project, ProjectFilters, ProjectWithCategory, UpdateProject,
};
use crate::models::stats::CatalogStats;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failures raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database could not be reached or a query failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored project references a category that does not exist.
    #[error("Project {project_id} references missing category {category_id}")]
    MissingCategory { project_id: DbId, category_id: DbId },

    /// A write referenced a category that does not exist.
    #[error("Category {0} does not exist")]
    UnknownCategory(DbId),

    /// A write would violate a uniqueness rule.
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Convenience alias for backend results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for categories and projects.
///
/// Both implementations must return identical observable results for
/// identical inputs, including ordering when a sort is requested.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;

    /// Confirm the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    /// All categories, ordered by id.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn get_category(&self, id: DbId) -> StoreResult<Option<Category>>;

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>>;

    /// Insert a category. Duplicate names or slugs yield [`StoreError::Conflict`].
    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category>;

    /// Projects matching every criterion in `filters`, joined with their
    /// category and ordered by `filters.sort`.
    async fn list_projects(&self, filters: &ProjectFilters)
        -> StoreResult<Vec<ProjectWithCategory>>;

    async fn get_project(&self, id: DbId) -> StoreResult<Option<ProjectWithCategory>>;

    /// Insert a submission with the server-owned defaults (pending, rating
    /// 45, only `is_new` set). Performs no field validation.
    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project>;

    /// Apply a partial content update. Returns `None` for an unknown id.
    async fn update_project(&self, id: DbId, input: &UpdateProject)
        -> StoreResult<Option<Project>>;

    /// Apply server-side rating, flag or status changes. Returns `None` for
    /// an unknown id.
    async fn moderate_project(
        &self,
        id: DbId,
        input: &ModerateProject,
    ) -> StoreResult<Option<Project>>;

    async fn stats(&self) -> StoreResult<CatalogStats>;
}
