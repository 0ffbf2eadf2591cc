//! HTTP-level tests for the category and activity JSON endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_activity, create_category, create_entry, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_returns_201_with_defaults(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/categories", json!({"name": "Reading"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Reading");
    assert_eq!(json["data"]["color_hex"], "#E6E0FF");
    assert_eq!(json["data"]["sort_order"], 0);
    assert!(json["data"]["icon_key"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_category_validates_fields(pool: SqlitePool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/categories",
        json!({"name": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/categories",
        json!({"name": "Work", "color_hex": "purple"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_category_name_returns_409(pool: SqlitePool) {
    create_category(&pool, "Work").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/categories",
        json!({"name": "Work"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_padded_names_match_their_trimmed_form(pool: SqlitePool) {
    let work = create_category(&pool, "Work").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/categories",
        json!({"name": " Work "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let padded = format!("  {}  ", "a".repeat(100));
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/categories",
        json!({"name": padded}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "a".repeat(100));

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/activities",
        json!({"name": "  Coding\n", "category_id": work}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "Coding");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_and_get_categories(pool: SqlitePool) {
    let play = create_category(&pool, "Play").await;
    create_category(&pool, "Exercise").await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/categories").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Exercise", "Play"]);

    let response = get(common::build_test_app(pool.clone()), &format!("/api/v1/categories/{play}")).await;
    assert_eq!(body_json(response).await["data"]["name"], "Play");

    let response = get(common::build_test_app(pool), "/api/v1/categories/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_category_partially(pool: SqlitePool) {
    let id = create_category(&pool, "Work").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/categories/{id}"),
        json!({"color_hex": "#112233", "icon_key": "briefcase"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Work");
    assert_eq!(json["data"]["color_hex"], "#112233");
    assert_eq!(json["data"]["icon_key"], "briefcase");

    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/categories/999",
        json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_category_guarded(pool: SqlitePool) {
    let work = create_category(&pool, "Work").await;
    create_activity(&pool, work, "Coding").await;
    let spare = create_category(&pool, "Spare").await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/categories/{work}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/categories/{spare}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/categories/{spare}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), &format!("/api/v1/categories/{work}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_activity_with_unknown_category_returns_400(pool: SqlitePool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/activities",
        json!({"name": "Orphan", "category_id": 999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_activity_names_unique_per_category(pool: SqlitePool) {
    let work = create_category(&pool, "Work").await;
    let play = create_category(&pool, "Play").await;
    create_activity(&pool, work, "Writing").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/activities",
        json!({"name": "Writing", "category_id": work}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/activities",
        json!({"name": "Writing", "category_id": play}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_activities_filtered_by_category(pool: SqlitePool) {
    let work = create_category(&pool, "Work").await;
    let play = create_category(&pool, "Play").await;
    create_activity(&pool, work, "Meetings").await;
    create_activity(&pool, work, "Coding").await;
    create_activity(&pool, play, "Games").await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/activities?category_id={work}"),
    )
    .await;
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Coding", "Meetings"]);

    let response = get(common::build_test_app(pool), "/api/v1/activities").await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_activity_move_refused_with_entries(pool: SqlitePool) {
    let work = create_category(&pool, "Work").await;
    let play = create_category(&pool, "Play").await;
    let coding = create_activity(&pool, work, "Coding").await;
    create_entry(&pool, "2024-05-06", 30, work, Some(coding)).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/activities/{coding}"),
        json!({"category_id": play}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/activities/{coding}"),
        json!({"name": "Programming"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Programming");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_activity_guarded_by_entries(pool: SqlitePool) {
    let work = create_category(&pool, "Work").await;
    let coding = create_activity(&pool, work, "Coding").await;
    let idle = create_activity(&pool, work, "Idle").await;
    create_entry(&pool, "2024-05-06", 30, work, Some(coding)).await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/activities/{coding}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/activities/{idle}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool), "/api/v1/activities/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
