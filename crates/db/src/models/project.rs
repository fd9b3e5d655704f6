//! Project entity model, DTOs and list filters.

use appdir_core::catalog::{ProjectStatus, SortOrder};
use appdir_core::search::{matches_any, normalize_search};
use appdir_core::types::{DbId, Timestamp};
use appdir_core::validation::{no_nul, non_blank, non_blank_tags};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::Category;

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub short_description: String,
    pub developer: String,
    pub developer_email: Option<String>,
    pub developer_twitter: Option<String>,
    pub developer_github: Option<String>,
    pub developer_website: Option<String>,
    pub image_url: String,
    pub external_url: Option<String>,
    pub github_url: Option<String>,
    pub category_id: DbId,
    /// Fixed-point rating, `0..=50` for 0.0 to 5.0 stars.
    pub rating: i32,
    pub is_featured: bool,
    pub is_new: bool,
    pub is_trending: bool,
    pub tags: Vec<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub created_at: Timestamp,
}

impl Project {
    /// Attach the category this project references.
    pub fn with_category(self, category: Category) -> ProjectWithCategory {
        ProjectWithCategory {
            project: self,
            category,
        }
    }
}

/// A project joined with its category. Every read operation returns this
/// shape; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectWithCategory {
    #[serde(flatten)]
    pub project: Project,
    pub category: Category,
}

/// Public submission payload.
///
/// Server-owned fields (id, rating, promotional flags, status, creation
/// time) have no counterpart here, so any client attempt to send them is
/// dropped during deserialization. Missing text fields deserialize as empty
/// strings and are then rejected by validation with a per-field error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProject {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(custom(function = "non_blank"))]
    pub description: String,
    #[validate(custom(function = "non_blank"))]
    pub short_description: String,
    #[validate(custom(function = "non_blank"))]
    pub developer: String,
    #[validate(email, custom(function = "no_nul"))]
    pub developer_email: Option<String>,
    #[validate(custom(function = "no_nul"))]
    pub developer_twitter: Option<String>,
    #[validate(custom(function = "no_nul"))]
    pub developer_github: Option<String>,
    #[validate(url, custom(function = "no_nul"))]
    pub developer_website: Option<String>,
    #[validate(custom(function = "non_blank"), url)]
    pub image_url: String,
    #[validate(url, custom(function = "no_nul"))]
    pub external_url: Option<String>,
    #[validate(url, custom(function = "no_nul"))]
    pub github_url: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: DbId,
    #[validate(custom(function = "non_blank_tags"))]
    pub tags: Vec<String>,
}

/// Partial update of the client-owned content fields. Only non-`None`
/// fields are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(custom(function = "non_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub short_description: Option<String>,
    #[validate(custom(function = "non_blank"))]
    pub developer: Option<String>,
    #[validate(email, custom(function = "no_nul"))]
    pub developer_email: Option<String>,
    #[validate(custom(function = "no_nul"))]
    pub developer_twitter: Option<String>,
    #[validate(custom(function = "no_nul"))]
    pub developer_github: Option<String>,
    #[validate(url, custom(function = "no_nul"))]
    pub developer_website: Option<String>,
    #[validate(url, custom(function = "no_nul"))]
    pub image_url: Option<String>,
    #[validate(url, custom(function = "no_nul"))]
    pub external_url: Option<String>,
    #[validate(url, custom(function = "no_nul"))]
    pub github_url: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: Option<DbId>,
    #[validate(custom(function = "non_blank_tags"))]
    pub tags: Option<Vec<String>>,
}

/// Server-side changes to the trust-sensitive fields. Never deserialized
/// from client input.
#[derive(Debug, Clone, Default)]
pub struct ModerateProject {
    /// Clamped into `0..=50` before it is stored.
    pub rating: Option<i32>,
    pub is_featured: Option<bool>,
    pub is_new: Option<bool>,
    pub is_trending: Option<bool>,
    pub status: Option<ProjectStatus>,
}

/// Criteria for listing projects. Every supplied criterion must hold.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilters {
    pub category_id: Option<DbId>,
    /// Case-insensitive substring over name, description, developer and tags.
    pub search: Option<String>,
    /// `None` leaves the flag unrestricted; `Some(false)` excludes featured.
    pub featured: Option<bool>,
    pub trending: Option<bool>,
    /// `None` means [`ProjectStatus::LISTED`].
    pub status: Option<ProjectStatus>,
    pub sort: SortOrder,
}

impl ProjectFilters {
    /// The status actually filtered on.
    pub fn effective_status(&self) -> ProjectStatus {
        self.status.unwrap_or(ProjectStatus::LISTED)
    }

    /// The normalised search term, if the search restricts anything.
    pub fn search_term(&self) -> Option<String> {
        normalize_search(self.search.as_deref())
    }

    /// Whether `project` satisfies every supplied criterion.
    pub fn matches(&self, project: &Project) -> bool {
        if project.status != self.effective_status() {
            return false;
        }
        if self.category_id.is_some_and(|id| id != project.category_id) {
            return false;
        }
        if self.featured.is_some_and(|flag| flag != project.is_featured) {
            return false;
        }
        if self.trending.is_some_and(|flag| flag != project.is_trending) {
            return false;
        }
        match self.search_term() {
            Some(term) => matches_any(
                &term,
                [
                    project.name.as_str(),
                    project.description.as_str(),
                    project.developer.as_str(),
                ]
                .into_iter()
                .chain(project.tags.iter().map(String::as_str)),
            ),
            None => true,
        }
    }
}
