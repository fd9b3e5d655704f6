//! Category entity model and DTOs.

use appdir_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    /// Symbolic reference to a glyph (emoji or icon class).
    pub icon: String,
    pub slug: String,
}

/// DTO for creating a new category. Categories are created by seeding or
/// administration only.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub icon: String,
    pub slug: String,
}
