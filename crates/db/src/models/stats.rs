//! Directory-wide counters shown on the landing page.

use serde::Serialize;

/// Aggregate counts across the catalog.
///
/// `total_apps` and `developers` only consider approved projects;
/// `categories` counts every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_apps: i64,
    /// Number of distinct developer names.
    pub developers: i64,
    pub categories: i64,
}
