//! The memory and PostgreSQL backends must answer every catalog query
//! identically, ordering included.

use appdir_core::catalog::{ProjectStatus, SortOrder};
use appdir_db::models::project::{
    CreateProject, ModerateProject, ProjectFilters, ProjectWithCategory, UpdateProject,
};
use appdir_db::seed::seed_database;
use appdir_db::store::{CatalogStore, MemoryStore, PgStore, StoreError};
use assert_matches::assert_matches;
use sqlx::PgPool;

/// Everything observable about a listed project except its creation time,
/// which each backend stamps independently.
fn observable(p: &ProjectWithCategory) -> (i64, String, String, i32, bool, bool, bool, Vec<String>, ProjectStatus) {
    (
        p.project.id,
        p.project.name.clone(),
        p.category.slug.clone(),
        p.project.rating,
        p.project.is_featured,
        p.project.is_new,
        p.project.is_trending,
        p.project.tags.clone(),
        p.project.status,
    )
}

fn filter_grid() -> Vec<ProjectFilters> {
    let mut grid = Vec::new();
    for sort in [
        SortOrder::Default,
        SortOrder::Newest,
        SortOrder::Popular,
        SortOrder::Trending,
        SortOrder::Alphabetical,
    ] {
        grid.push(ProjectFilters {
            sort,
            ..Default::default()
        });
    }
    grid.extend([
        ProjectFilters {
            category_id: Some(1),
            trending: Some(true),
            ..Default::default()
        },
        ProjectFilters {
            featured: Some(false),
            sort: SortOrder::Popular,
            ..Default::default()
        },
        ProjectFilters {
            search: Some("VENICE".to_string()),
            sort: SortOrder::Alphabetical,
            ..Default::default()
        },
        ProjectFilters {
            search: Some("ai assistant".to_string()),
            ..Default::default()
        },
        // Case folding is ASCII-only in both backends.
        ProjectFilters {
            search: Some("école".to_string()),
            ..Default::default()
        },
        ProjectFilters {
            search: Some("ÉCOLE".to_string()),
            sort: SortOrder::Alphabetical,
            ..Default::default()
        },
        ProjectFilters {
            search: Some("STUDIO".to_string()),
            sort: SortOrder::Alphabetical,
            ..Default::default()
        },
        ProjectFilters {
            search: Some("docu\0mind".to_string()),
            ..Default::default()
        },
        ProjectFilters {
            status: Some(ProjectStatus::Pending),
            ..Default::default()
        },
        ProjectFilters {
            status: Some(ProjectStatus::Rejected),
            ..Default::default()
        },
        ProjectFilters {
            category_id: Some(3),
            status: Some(ProjectStatus::Pending),
            sort: SortOrder::Newest,
            ..Default::default()
        },
    ]);
    grid
}

async fn assert_same_answers(memory: &MemoryStore, pg: &PgStore) {
    assert_eq!(
        memory.list_categories().await.unwrap(),
        pg.list_categories().await.unwrap()
    );
    assert_eq!(memory.stats().await.unwrap(), pg.stats().await.unwrap());

    for filters in filter_grid() {
        let from_memory: Vec<_> = memory
            .list_projects(&filters)
            .await
            .unwrap()
            .iter()
            .map(observable)
            .collect();
        let from_pg: Vec<_> = pg
            .list_projects(&filters)
            .await
            .unwrap()
            .iter()
            .map(observable)
            .collect();
        assert_eq!(from_memory, from_pg, "diverged for {filters:?}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_backends_agree(pool: PgPool) {
    seed_database(&pool).await.unwrap();
    let pg = PgStore::new(pool);
    let memory = MemoryStore::seeded();

    assert_same_answers(&memory, &pg).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_backends_agree_after_writes(pool: PgPool) {
    seed_database(&pool).await.unwrap();
    let pg = PgStore::new(pool);
    let memory = MemoryStore::seeded();
    let stores: [&dyn CatalogStore; 2] = [&memory, &pg];

    let submissions = [
        ("Zeta Notes", "Venice Notes Co", 3, vec!["Notes"]),
        ("alpha chat", "Alpha Labs", 2, vec!["Chat", "Venice"]),
        ("Doc Sifter", "DocuMind AI", 4, vec![]),
        ("École Studio", "Atelier Étoile", 1, vec!["Studio"]),
    ];

    for store in stores {
        for (name, developer, category_id, tags) in &submissions {
            let input = CreateProject {
                name: name.to_string(),
                description: format!("{name} description"),
                short_description: format!("{name} in brief"),
                developer: developer.to_string(),
                image_url: "https://example.com/cover.png".to_string(),
                category_id: *category_id,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            };
            store.create_project(&input).await.unwrap();
        }

        // Approve three of the four and re-rate one to tie with fixtures.
        store
            .moderate_project(
                6,
                &ModerateProject {
                    status: Some(ProjectStatus::Approved),
                    rating: Some(48),
                    is_trending: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        for id in [7, 9] {
            store
                .moderate_project(
                    id,
                    &ModerateProject {
                        status: Some(ProjectStatus::Approved),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }

        // A missing project wins over a missing category.
        let bad_category = UpdateProject {
            category_id: Some(999),
            ..Default::default()
        };
        assert!(store.update_project(404, &bad_category).await.unwrap().is_none());
        assert_matches!(
            store.update_project(6, &bad_category).await,
            Err(StoreError::UnknownCategory(999))
        );
    }

    assert_same_answers(&memory, &pg).await;
}
