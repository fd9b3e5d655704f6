//! Integration tests for the public catalog listing at `/api/projects`.
//!
//! Fixture catalog (ids in insertion order):
//!
//! ```text
//! id  category  rating  featured  trending  age
//! 1   1         47      yes       yes       30d
//! 2   1         48      yes       no        21d
//! 3   1         49      yes       yes        3d
//! 4   2         46      no        no         7d
//! 5   4         48      no        yes       14d
//! ```

mod common;

use axum::http::StatusCode;
use common::{body_json, get, ids};

async fn list_ids(uri: &str) -> Vec<i64> {
    let response = get(common::build_test_app(), uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    ids(&body_json(response).await)
}

#[tokio::test]
async fn default_listing_returns_approved_in_id_order() {
    assert_eq!(list_ids("/api/projects").await, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn projects_embed_their_category() {
    let response = get(common::build_test_app(), "/api/projects?categoryId=4").await;
    let json = body_json(response).await;

    assert_eq!(ids(&json), vec![5]);
    let project = &json[0];
    assert_eq!(project["name"], "PDF Intelligence Tool");
    assert_eq!(project["categoryId"], 4);
    assert_eq!(project["category"]["slug"], "document-analysis");
    assert_eq!(project["rating"], 48);
    assert_eq!(project["isTrending"], true);
    assert_eq!(project["status"], "approved");
    assert!(project["createdAt"].is_string());
}

#[tokio::test]
async fn featured_flag_is_tri_state() {
    assert_eq!(list_ids("/api/projects?featured=true").await, vec![1, 2, 3]);
    assert_eq!(list_ids("/api/projects?featured=false").await, vec![4, 5]);
    assert_eq!(
        list_ids("/api/projects?featured=yes").await,
        vec![1, 2, 3, 4, 5]
    );
}

#[tokio::test]
async fn filters_are_conjunctive() {
    assert_eq!(list_ids("/api/projects?trending=true").await, vec![1, 3, 5]);
    assert_eq!(
        list_ids("/api/projects?categoryId=1&trending=true").await,
        vec![1, 3]
    );
    assert_eq!(
        list_ids("/api/projects?categoryId=1&trending=true&featured=false").await,
        Vec::<i64>::new()
    );
}

#[tokio::test]
async fn search_is_case_insensitive_across_fields() {
    // Name and tag.
    assert_eq!(list_ids("/api/projects?search=CYBERPUNK").await, vec![4]);
    // Description and developer.
    assert_eq!(list_ids("/api/projects?search=venice").await, vec![1, 2, 3, 4]);
    // Developer only.
    assert_eq!(list_ids("/api/projects?search=documind").await, vec![5]);
    // Whitespace-only search does not restrict.
    assert_eq!(
        list_ids("/api/projects?search=%20%20").await,
        vec![1, 2, 3, 4, 5]
    );
    // NUL characters are dropped from the term.
    assert_eq!(list_ids("/api/projects?search=docu%00mind").await, vec![5]);
}

#[tokio::test]
async fn sort_orders() {
    assert_eq!(
        list_ids("/api/projects?sortBy=popular").await,
        vec![3, 2, 5, 1, 4]
    );
    assert_eq!(
        list_ids("/api/projects?sortBy=trending").await,
        vec![3, 2, 5, 1, 4]
    );
    assert_eq!(
        list_ids("/api/projects?sortBy=newest").await,
        vec![3, 4, 5, 2, 1]
    );
    assert_eq!(
        list_ids("/api/projects?sortBy=alphabetical").await,
        vec![3, 2, 5, 4, 1]
    );
    assert_eq!(
        list_ids("/api/projects?sortBy=shuffle").await,
        vec![1, 2, 3, 4, 5]
    );
}

#[tokio::test]
async fn status_partitions_are_disjoint() {
    assert_eq!(
        list_ids("/api/projects?status=approved").await,
        vec![1, 2, 3, 4, 5]
    );
    assert!(list_ids("/api/projects?status=pending").await.is_empty());
    assert!(list_ids("/api/projects?status=rejected").await.is_empty());
    // Empty status falls back to approved.
    assert_eq!(list_ids("/api/projects?status=").await, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn invalid_query_values_return_400() {
    let response = get(common::build_test_app(), "/api/projects?categoryId=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get(common::build_test_app(), "/api/projects?status=archived").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn get_project_by_id() {
    let response = get(common::build_test_app(), "/api/projects/3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Advanced Image Studio");
    assert_eq!(json["category"]["name"], "Image Generation");
    assert_eq!(json["tags"][3], "Studio");
}

#[tokio::test]
async fn unknown_project_returns_404() {
    let response = get(common::build_test_app(), "/api/projects/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 999 not found");
}

#[tokio::test]
async fn non_numeric_project_id_returns_400() {
    let response = get(common::build_test_app(), "/api/projects/latest").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
