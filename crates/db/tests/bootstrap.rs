use appdir_db::seed::{seed_database, CATEGORIES, PROJECTS};
use sqlx::PgPool;

/// Connect, migrate, seed, verify row counts.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    appdir_db::health_check(&pool).await.unwrap();

    seed_database(&pool).await.unwrap();

    for (table, expected) in [("categories", CATEGORIES.len()), ("projects", PROJECTS.len())] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0 as usize, expected, "{table} row count");
    }
}

/// Reseeding replaces the catalog and restarts ids at 1.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reseed_is_idempotent(pool: PgPool) {
    seed_database(&pool).await.unwrap();
    seed_database(&pool).await.unwrap();

    let ids: Vec<(i64,)> = sqlx::query_as("SELECT id FROM categories ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    let ids: Vec<i64> = ids.into_iter().map(|(id,)| id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

/// Rating and status are constrained at the schema level too.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_rejects_out_of_range_values(pool: PgPool) {
    seed_database(&pool).await.unwrap();

    let rating = sqlx::query("UPDATE projects SET rating = 51 WHERE id = 1")
        .execute(&pool)
        .await;
    assert!(rating.is_err(), "rating above 50 must be rejected");

    let status = sqlx::query("UPDATE projects SET status = 'archived' WHERE id = 1")
        .execute(&pool)
        .await;
    assert!(status.is_err(), "unknown status must be rejected");
}

/// Column defaults match the submission defaults applied by the stores.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_column_defaults_match_submission_defaults(pool: PgPool) {
    seed_database(&pool).await.unwrap();

    let row: (i32, bool, bool, bool, String, Vec<String>) = sqlx::query_as(
        "INSERT INTO projects \
             (name, description, short_description, developer, image_url, category_id) \
         VALUES ('Bare', 'Bare row', 'Bare', 'Nobody', 'https://example.com/b.png', 1) \
         RETURNING rating, is_featured, is_new, is_trending, status, tags",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(row, (45, false, true, false, "pending".to_string(), vec![]));
}
