//! Submission intake.
//!
//! The only path by which client input reaches the store. Field rules come
//! from the `validator` derives on the DTOs; the category reference is
//! checked here because it needs the store.

use appdir_core::types::DbId;
use appdir_core::validation::{field_error, CODE_UNKNOWN_CATEGORY};
use validator::{Validate, ValidationErrors};

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::{CatalogStore, StoreError};

/// Why a submission or revision was not stored.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The caller sent bad input; the errors name each offending field.
    #[error("Invalid submission: {0}")]
    Invalid(ValidationErrors),

    /// The backend failed. Not caller-correctable.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn unknown_category(category_id: DbId) -> IntakeError {
    IntakeError::Invalid(field_error(
        "category_id",
        CODE_UNKNOWN_CATEGORY,
        format!("category {category_id} does not exist"),
    ))
}

/// A store rejecting the category reference is still the caller's mistake.
fn classify(err: StoreError) -> IntakeError {
    match err {
        StoreError::UnknownCategory(id) => unknown_category(id),
        other => IntakeError::Store(other),
    }
}

async fn ensure_category(store: &dyn CatalogStore, category_id: DbId) -> Result<(), IntakeError> {
    match store.get_category(category_id).await? {
        Some(_) => Ok(()),
        None => Err(unknown_category(category_id)),
    }
}

/// Validate and persist a public submission.
///
/// The stored project always starts pending with the default rating and
/// only the `is_new` flag set.
pub async fn submit_project(
    store: &dyn CatalogStore,
    input: &CreateProject,
) -> Result<Project, IntakeError> {
    input.validate().map_err(IntakeError::Invalid)?;
    ensure_category(store, input.category_id).await?;

    let project = store.create_project(input).await.map_err(classify)?;
    tracing::info!(
        project_id = project.id,
        category_id = project.category_id,
        "Project submitted for review"
    );
    Ok(project)
}

/// Validate and apply a partial content update.
///
/// Returns `None` if the project does not exist.
pub async fn revise_project(
    store: &dyn CatalogStore,
    id: DbId,
    input: &UpdateProject,
) -> Result<Option<Project>, IntakeError> {
    input.validate().map_err(IntakeError::Invalid)?;
    if let Some(category_id) = input.category_id {
        ensure_category(store, category_id).await?;
    }
    store.update_project(id, input).await.map_err(classify)
}
