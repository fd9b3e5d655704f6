//! Ephemeral in-process catalog backend.
//!
//! State lives for the lifetime of the [`MemoryStore`] value and is rebuilt
//! from the fixtures every time the process starts. Id counters only ever
//! increase, so ids are unique within one store but not across restarts.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use appdir_core::catalog::{clamp_rating, ProjectStatus, SortOrder, DEFAULT_SUBMISSION_RATING};
use appdir_core::types::DbId;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::category::{Category, CreateCategory};
use crate::models::project::{
    CreateProject, ModerateProject, Project, ProjectFilters, ProjectWithCategory, UpdateProject,
};
use crate::models::stats::CatalogStats;
use crate::seed;
use crate::store::{CatalogStore, StoreError, StoreResult};

/// Maps plus id allocation state, guarded as one unit.
#[derive(Debug)]
struct MemoryState {
    categories: BTreeMap<DbId, Category>,
    projects: BTreeMap<DbId, Project>,
    next_category_id: DbId,
    next_project_id: DbId,
}

impl MemoryState {
    fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
            projects: BTreeMap::new(),
            next_category_id: 1,
            next_project_id: 1,
        }
    }

    fn allocate_category_id(&mut self) -> DbId {
        let id = self.next_category_id;
        self.next_category_id += 1;
        id
    }

    fn allocate_project_id(&mut self) -> DbId {
        let id = self.next_project_id;
        self.next_project_id += 1;
        id
    }

    fn require_category(&self, id: DbId) -> StoreResult<()> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(StoreError::UnknownCategory(id))
        }
    }

    fn join(&self, project: &Project) -> StoreResult<ProjectWithCategory> {
        let category = self
            .categories
            .get(&project.category_id)
            .cloned()
            .ok_or(StoreError::MissingCategory {
                project_id: project.id,
                category_id: project.category_id,
            })?;
        Ok(project.clone().with_category(category))
    }
}

/// In-memory [`CatalogStore`].
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// A store pre-loaded with the fixture catalog.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut state = MemoryState::empty();

        for fixture in seed::CATEGORIES {
            let id = state.allocate_category_id();
            state.categories.insert(id, fixture.to_category(id));
        }

        for fixture in seed::PROJECTS {
            let Some(category_id) = state
                .categories
                .values()
                .find(|c| c.slug == fixture.category_slug)
                .map(|c| c.id)
            else {
                tracing::warn!(
                    project = fixture.name,
                    slug = fixture.category_slug,
                    "Skipping fixture with unknown category"
                );
                continue;
            };
            let id = state.allocate_project_id();
            state
                .projects
                .insert(id, fixture.to_project(id, category_id, now));
        }

        tracing::info!(
            categories = state.categories.len(),
            projects = state.projects.len(),
            "Memory store seeded"
        );

        Self {
            state: RwLock::new(state),
        }
    }
}

/// Order `projects` the same way the SQL backend does.
fn sort_projects(projects: &mut [ProjectWithCategory], order: SortOrder) {
    let compare = |a: &ProjectWithCategory, b: &ProjectWithCategory| -> Ordering {
        let (a, b) = (&a.project, &b.project);
        match order {
            SortOrder::Default => a.id.cmp(&b.id),
            SortOrder::Newest => b
                .created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id)),
            SortOrder::Popular | SortOrder::Trending => {
                b.rating.cmp(&a.rating).then_with(|| a.id.cmp(&b.id))
            }
            SortOrder::Alphabetical => a
                .name
                .to_ascii_lowercase()
                .cmp(&b.name.to_ascii_lowercase())
                .then_with(|| a.id.cmp(&b.id)),
        }
    };
    projects.sort_by(compare);
}

#[async_trait]
impl CatalogStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.get(&id).cloned())
    }

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.values().find(|c| c.slug == slug).cloned())
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        let mut state = self.state.write().await;
        if let Some(existing) = state
            .categories
            .values()
            .find(|c| c.name == input.name || c.slug == input.slug)
        {
            return Err(StoreError::Conflict(format!(
                "Category '{}' already uses that name or slug",
                existing.slug
            )));
        }

        let id = state.allocate_category_id();
        let category = Category {
            id,
            name: input.name.clone(),
            icon: input.icon.clone(),
            slug: input.slug.clone(),
        };
        state.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn list_projects(
        &self,
        filters: &ProjectFilters,
    ) -> StoreResult<Vec<ProjectWithCategory>> {
        let state = self.state.read().await;
        let mut matched = state
            .projects
            .values()
            .filter(|p| filters.matches(p))
            .map(|p| state.join(p))
            .collect::<StoreResult<Vec<_>>>()?;
        sort_projects(&mut matched, filters.sort);

        tracing::debug!(count = matched.len(), ?filters, "Listed projects");
        Ok(matched)
    }

    async fn get_project(&self, id: DbId) -> StoreResult<Option<ProjectWithCategory>> {
        let state = self.state.read().await;
        let joined = state.projects.get(&id).map(|p| state.join(p)).transpose();
        joined
    }

    async fn create_project(&self, input: &CreateProject) -> StoreResult<Project> {
        let mut state = self.state.write().await;
        state.require_category(input.category_id)?;

        let id = state.allocate_project_id();
        let project = Project {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            short_description: input.short_description.clone(),
            developer: input.developer.clone(),
            developer_email: input.developer_email.clone(),
            developer_twitter: input.developer_twitter.clone(),
            developer_github: input.developer_github.clone(),
            developer_website: input.developer_website.clone(),
            image_url: input.image_url.clone(),
            external_url: input.external_url.clone(),
            github_url: input.github_url.clone(),
            category_id: input.category_id,
            rating: DEFAULT_SUBMISSION_RATING,
            is_featured: false,
            is_new: true,
            is_trending: false,
            tags: input.tags.clone(),
            status: ProjectStatus::SUBMITTED,
            created_at: Utc::now(),
        };
        state.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        let mut state = self.state.write().await;
        if !state.projects.contains_key(&id) {
            return Ok(None);
        }
        if let Some(category_id) = input.category_id {
            state.require_category(category_id)?;
        }
        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(None);
        };

        fn apply<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        fn apply_optional(target: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                target.clone_from(value);
            }
        }

        apply(&mut project.name, &input.name);
        apply(&mut project.description, &input.description);
        apply(&mut project.short_description, &input.short_description);
        apply(&mut project.developer, &input.developer);
        apply_optional(&mut project.developer_email, &input.developer_email);
        apply_optional(&mut project.developer_twitter, &input.developer_twitter);
        apply_optional(&mut project.developer_github, &input.developer_github);
        apply_optional(&mut project.developer_website, &input.developer_website);
        apply(&mut project.image_url, &input.image_url);
        apply_optional(&mut project.external_url, &input.external_url);
        apply_optional(&mut project.github_url, &input.github_url);
        apply(&mut project.category_id, &input.category_id);
        apply(&mut project.tags, &input.tags);

        Ok(Some(project.clone()))
    }

    async fn moderate_project(
        &self,
        id: DbId,
        input: &ModerateProject,
    ) -> StoreResult<Option<Project>> {
        let mut state = self.state.write().await;
        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(rating) = input.rating {
            project.rating = clamp_rating(rating);
        }
        if let Some(flag) = input.is_featured {
            project.is_featured = flag;
        }
        if let Some(flag) = input.is_new {
            project.is_new = flag;
        }
        if let Some(flag) = input.is_trending {
            project.is_trending = flag;
        }
        if let Some(status) = input.status {
            project.status = status;
        }

        Ok(Some(project.clone()))
    }

    async fn stats(&self) -> StoreResult<CatalogStats> {
        let state = self.state.read().await;
        let approved: Vec<&Project> = state
            .projects
            .values()
            .filter(|p| p.status == ProjectStatus::Approved)
            .collect();
        let developers: HashSet<&str> = approved.iter().map(|p| p.developer.as_str()).collect();

        Ok(CatalogStats {
            total_apps: approved.len() as i64,
            developers: developers.len() as i64,
            categories: state.categories.len() as i64,
        })
    }
}
