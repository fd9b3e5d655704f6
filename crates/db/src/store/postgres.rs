//! PostgreSQL catalog backend.
//!
//! A thin adapter from [`CatalogStore`] onto the repositories. Constraint
//! violations are translated into the same [`StoreError`] variants the
//! memory backend raises.

use appdir_core::types::DbId;
use async_trait::async_trait;

use crate::models::category::{Category, CreateCategory};
use crate::models::project::{
    CreateProject, ModerateProject, Project, ProjectFilters, ProjectWithCategory, UpdateProject,
};
use crate::models::stats::CatalogStats;
use crate::repositories::{CategoryRepo, ProjectRepo};
use crate::store::{CatalogStore, StoreError, StoreResult};
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL foreign key violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database-backed [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Whether `err` is a database error with the given SQLSTATE code.
fn has_code(err: &sqlx::Error, code: &str) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(code))
}

/// Map a foreign key failure on `category_id` to [`StoreError::UnknownCategory`].
fn category_fk(err: sqlx::Error, category_id: DbId) -> StoreError {
    if has_code(&err, FOREIGN_KEY_VIOLATION) {
        StoreError::UnknownCategory(category_id)
    } else {
        StoreError::Database(err)
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn get_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(CategoryRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        Ok(CategoryRepo::find_by_slug(&self.pool, slug).await?)
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        CategoryRepo::create(&self.pool, input)
            .await
            .map_err(|err| {
                if has_code(&err, UNIQUE_VIOLATION) {
                    StoreError::Conflict(format!(
                        "Category name '{}' or slug '{}' is already taken",
                        input.name, input.slug
                    ))
                } else {
                    StoreError::Database(err)
                }
            })
    }

    async fn list_projects(
        &self,
        filters: &ProjectFilters,
    ) -> StoreResult<Vec<ProjectWithCategory>> {
        Ok(ProjectRepo::list(&self.pool, filters).await?)
    }

    async fn get_project(&self, id: DbId) -> StoreResult<Option<ProjectWithCategory>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        ProjectRepo::create(&self.pool, input)
            .await
            .map_err(|err| category_fk(err, input.category_id))
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        ProjectRepo::update(&self.pool, id, input)
            .await
            .map_err(|err| match input.category_id {
                Some(category_id) => category_fk(err, category_id),
                None => StoreError::Database(err),
            })
    }

    async fn moderate_project(
        &self,
        id: DbId,
        input: &ModerateProject,
    ) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::moderate(&self.pool, id, input).await?)
    }

    async fn stats(&self) -> StoreResult<CatalogStats> {
        Ok(ProjectRepo::stats(&self.pool).await?)
    }
}
