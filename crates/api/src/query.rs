//! Query parameter types for API handlers.

use appdir_core::catalog::{parse_flag, parse_status_filter, SortOrder};
use appdir_core::error::CoreError;
use appdir_core::types::DbId;
use appdir_db::models::project::ProjectFilters;
use serde::Deserialize;

/// Raw `GET /api/projects` query string.
///
/// Every field is kept as a string so that lenient values (an unknown
/// `sortBy`, `featured=yes`) fall back to "unset" instead of rejecting the
/// whole request. [`ProjectListParams::into_filters`] does the typing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListParams {
    pub category_id: Option<String>,
    pub search: Option<String>,
    pub featured: Option<String>,
    pub trending: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
}

impl ProjectListParams {
    /// Convert into typed filters.
    ///
    /// A non-numeric `categoryId` or an unknown `status` is a validation
    /// error; the boolean flags and `sortBy` never fail.
    pub fn into_filters(self) -> Result<ProjectFilters, CoreError> {
        let category_id = match self.category_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<DbId>().map_err(|_| {
                CoreError::Validation(format!("categoryId must be an integer, got '{raw}'"))
            })?),
        };

        Ok(ProjectFilters {
            category_id,
            search: self.search,
            featured: parse_flag(self.featured.as_deref()),
            trending: parse_flag(self.trending.as_deref()),
            status: Some(parse_status_filter(self.status.as_deref())?),
            sort: SortOrder::parse_lenient(self.sort_by.as_deref()),
        })
    }
}
