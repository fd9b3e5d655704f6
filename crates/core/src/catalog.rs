//! Catalog constants, moderation status and list ordering.
//!
//! The storage backends and the HTTP layer both read these so that every
//! backend applies the same defaults and understands the same sort
//! vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

/// Highest storable rating. Ratings are fixed-point integers, so `50` is
/// 5.0 stars and `47` is 4.7.
pub const MAX_RATING: i32 = 50;

/// Rating assigned to every new submission (4.5 stars).
pub const DEFAULT_SUBMISSION_RATING: i32 = 45;

/// Clamp a rating into the storable `0..=MAX_RATING` range.
pub fn clamp_rating(rating: i32) -> i32 {
    rating.clamp(0, MAX_RATING)
}

// ---------------------------------------------------------------------------
// Moderation status
// ---------------------------------------------------------------------------

/// Moderation state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Awaiting review. Every new submission starts here.
    Pending,
    /// Publicly listed.
    Approved,
    /// Hidden from listings.
    Rejected,
}

impl ProjectStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [ProjectStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Status shown by public listings when the caller does not ask for one.
    pub const LISTED: ProjectStatus = Self::Approved;

    /// Status given to new submissions.
    pub const SUBMITTED: ProjectStatus = Self::Pending;

    /// The string stored in the `projects.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: pending, approved, rejected"
                ))
            })
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Resolve an optional `status` query value.
///
/// Absent or empty input falls back to [`ProjectStatus::LISTED`] so that
/// unmoderated submissions never leak into public listings by accident.
pub fn parse_status_filter(raw: Option<&str>) -> Result<ProjectStatus, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(ProjectStatus::LISTED),
        Some(value) => value.parse(),
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Result ordering for project listings.
///
/// There is no dedicated popularity metric, so `Popular` and `Trending`
/// both order by rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Insertion order (ascending id).
    #[default]
    Default,
    /// Most recently created first.
    Newest,
    /// Highest rating first.
    Popular,
    /// Highest rating first.
    Trending,
    /// By name, folding ASCII case only.
    Alphabetical,
}

impl SortOrder {
    /// Parse a `sortBy` value. Unrecognised or absent values yield
    /// [`SortOrder::Default`] rather than an error.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Default;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" | "recent" => Self::Newest,
            "popular" => Self::Popular,
            "trending" => Self::Trending,
            "alphabetical" | "name" | "a-z" => Self::Alphabetical,
            _ => Self::Default,
        }
    }

    /// SQL `ORDER BY` body for a query that aliases `projects` as `p`.
    ///
    /// Every order ends with an id tie-break so results are deterministic
    /// and line up with the in-memory backend.
    pub fn order_by_clause(self) -> &'static str {
        match self {
            Self::Default => "p.id ASC",
            Self::Newest => "p.created_at DESC, p.id DESC",
            Self::Popular | Self::Trending => "p.rating DESC, p.id ASC",
            Self::Alphabetical => "LOWER(p.name COLLATE \"C\") ASC, p.id ASC",
        }
    }
}

// ---------------------------------------------------------------------------
// Tri-state query flags
// ---------------------------------------------------------------------------

/// Parse a boolean query flag that distinguishes "unset" from `false`.
///
/// Only the literal strings `"true"` and `"false"` carry a value; anything
/// else, including absence, means the filter is not applied.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
