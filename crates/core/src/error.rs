use validator::ValidationErrors;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with slug {slug}")]
    SlugNotFound { entity: &'static str, slug: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Per-field validation failures, reported back to the caller verbatim.
    #[error("Validation failed: {0}")]
    InvalidFields(ValidationErrors),
}
