//! Repository for the `projects` table.
//!
//! Every read joins `categories` so callers always receive a
//! [`ProjectWithCategory`].

use appdir_core::catalog::{clamp_rating, ProjectStatus, DEFAULT_SUBMISSION_RATING};
use appdir_core::search::ilike_pattern;
use appdir_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::category::Category;
use crate::models::project::{
    CreateProject, ModerateProject, Project, ProjectFilters, ProjectWithCategory, UpdateProject,
};
use crate::models::stats::CatalogStats;

/// Column list for `RETURNING` clauses.
const COLUMNS: &str = "\
    id, name, description, short_description, developer, \
    developer_email, developer_twitter, developer_github, developer_website, \
    image_url, external_url, github_url, category_id, \
    rating, is_featured, is_new, is_trending, tags, status, created_at";

/// Column list for reads that join `projects p` with `categories c`.
const JOINED_COLUMNS: &str = "\
    p.id, p.name, p.description, p.short_description, p.developer, \
    p.developer_email, p.developer_twitter, p.developer_github, p.developer_website, \
    p.image_url, p.external_url, p.github_url, p.category_id, \
    p.rating, p.is_featured, p.is_new, p.is_trending, p.tags, p.status, p.created_at, \
    c.name AS category_name, c.icon AS category_icon, c.slug AS category_slug";

/// A `projects` row plus the columns of its joined category.
#[derive(Debug, FromRow)]
struct JoinedRow {
    #[sqlx(flatten)]
    project: Project,
    category_name: String,
    category_icon: String,
    category_slug: String,
}

impl From<JoinedRow> for ProjectWithCategory {
    fn from(row: JoinedRow) -> Self {
        let category = Category {
            id: row.project.category_id,
            name: row.category_name,
            icon: row.category_icon,
            slug: row.category_slug,
        };
        row.project.with_category(category)
    }
}

/// Provides catalog queries and writes for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a submission. Server-owned fields always take their defaults.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (\
                name, description, short_description, developer, \
                developer_email, developer_twitter, developer_github, developer_website, \
                image_url, external_url, github_url, category_id, tags, \
                rating, is_featured, is_new, is_trending, status\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
                       $14, FALSE, TRUE, FALSE, $15) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.short_description)
            .bind(&input.developer)
            .bind(input.developer_email.as_deref())
            .bind(input.developer_twitter.as_deref())
            .bind(input.developer_github.as_deref())
            .bind(input.developer_website.as_deref())
            .bind(&input.image_url)
            .bind(input.external_url.as_deref())
            .bind(input.github_url.as_deref())
            .bind(input.category_id)
            .bind(&input.tags)
            .bind(DEFAULT_SUBMISSION_RATING)
            .bind(ProjectStatus::SUBMITTED.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID, joined with its category.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM projects p \
             JOIN categories c ON c.id = p.category_id \
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, JoinedRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Into::into))
    }

    /// List projects matching every criterion in `filters`.
    pub async fn list(
        pool: &PgPool,
        filters: &ProjectFilters,
    ) -> Result<Vec<ProjectWithCategory>, sqlx::Error> {
        // Each condition consumes exactly one bind parameter, so the next
        // placeholder is always `conditions.len() + 1`. Search runs under the
        // C collation so only ASCII letters fold, independent of the
        // database ctype.
        let mut conditions = vec!["p.status = $1".to_string()];

        if filters.category_id.is_some() {
            conditions.push(format!("p.category_id = ${}", conditions.len() + 1));
        }
        let search = filters.search_term().map(|term| ilike_pattern(&term));
        if search.is_some() {
            let n = conditions.len() + 1;
            conditions.push(format!(
                "(p.name COLLATE \"C\" ILIKE ${n} \
                  OR p.description COLLATE \"C\" ILIKE ${n} \
                  OR p.developer COLLATE \"C\" ILIKE ${n} \
                  OR EXISTS (SELECT 1 FROM unnest(p.tags) AS tag \
                             WHERE tag COLLATE \"C\" ILIKE ${n}))"
            ));
        }
        if filters.featured.is_some() {
            conditions.push(format!("p.is_featured = ${}", conditions.len() + 1));
        }
        if filters.trending.is_some() {
            conditions.push(format!("p.is_trending = ${}", conditions.len() + 1));
        }

        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM projects p \
             JOIN categories c ON c.id = p.category_id \
             WHERE {conditions} \
             ORDER BY {order}",
            conditions = conditions.join(" AND "),
            order = filters.sort.order_by_clause(),
        );

        // Bind dynamic parameters in the order the conditions were pushed.
        let mut q = sqlx::query_as::<_, JoinedRow>(&query).bind(filters.effective_status().as_str());
        if let Some(category_id) = filters.category_id {
            q = q.bind(category_id);
        }
        if let Some(pattern) = search {
            q = q.bind(pattern);
        }
        if let Some(featured) = filters.featured {
            q = q.bind(featured);
        }
        if let Some(trending) = filters.trending {
            q = q.bind(trending);
        }

        let rows = q.fetch_all(pool).await?;
        tracing::debug!(count = rows.len(), ?filters, "Listed projects");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Update content fields. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                short_description = COALESCE($4, short_description), \
                developer = COALESCE($5, developer), \
                developer_email = COALESCE($6, developer_email), \
                developer_twitter = COALESCE($7, developer_twitter), \
                developer_github = COALESCE($8, developer_github), \
                developer_website = COALESCE($9, developer_website), \
                image_url = COALESCE($10, image_url), \
                external_url = COALESCE($11, external_url), \
                github_url = COALESCE($12, github_url), \
                category_id = COALESCE($13, category_id), \
                tags = COALESCE($14, tags) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.short_description.as_deref())
            .bind(input.developer.as_deref())
            .bind(input.developer_email.as_deref())
            .bind(input.developer_twitter.as_deref())
            .bind(input.developer_github.as_deref())
            .bind(input.developer_website.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.external_url.as_deref())
            .bind(input.github_url.as_deref())
            .bind(input.category_id)
            .bind(input.tags.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Update rating, promotional flags or status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn moderate(
        pool: &PgPool,
        id: DbId,
        input: &ModerateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                rating = COALESCE($2, rating), \
                is_featured = COALESCE($3, is_featured), \
                is_new = COALESCE($4, is_new), \
                is_trending = COALESCE($5, is_trending), \
                status = COALESCE($6, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.rating.map(clamp_rating))
            .bind(input.is_featured)
            .bind(input.is_new)
            .bind(input.is_trending)
            .bind(input.status.map(ProjectStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Directory counters. Apps and developers only count approved projects.
    pub async fn stats(pool: &PgPool) -> Result<CatalogStats, sqlx::Error> {
        let (total_apps, developers, categories): (i64, i64, i64) = sqlx::query_as(
            "SELECT \
                (SELECT COUNT(*) FROM projects WHERE status = $1), \
                (SELECT COUNT(DISTINCT developer) FROM projects WHERE status = $1), \
                (SELECT COUNT(*) FROM categories)",
        )
        .bind(ProjectStatus::Approved.as_str())
        .fetch_one(pool)
        .await?;

        Ok(CatalogStats {
            total_apps,
            developers,
            categories,
        })
    }
}
