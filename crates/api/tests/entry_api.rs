//! HTTP-level tests for the entry JSON endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_activity, create_category, create_entry, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

/// Two categories with one activity each: (work, coding, play, games).
async fn fixture(pool: &SqlitePool) -> (i64, i64, i64, i64) {
    let work = create_category(pool, "Work").await;
    let play = create_category(pool, "Play").await;
    let coding = create_activity(pool, work, "Coding").await;
    let games = create_activity(pool, play, "Games").await;
    (work, coding, play, games)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_entry_returns_201(pool: SqlitePool) {
    let (work, coding, _, _) = fixture(&pool).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/entries",
        json!({
            "date": "2024-05-06",
            "duration_minutes": 45,
            "category_id": work,
            "activity_id": coding,
            "notes": "pairing",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["date"], "2024-05-06");
    assert_eq!(json["data"]["duration_minutes"], 45);
    assert_eq!(json["data"]["activity_id"], coding);
    assert_eq!(json["data"]["notes"], "pairing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_entry_is_not_rounded(pool: SqlitePool) {
    let (work, _, _, _) = fixture(&pool).await;
    put_json(
        common::build_test_app(pool.clone()),
        "/api/v1/settings",
        json!({
            "rounding_mode": "up",
            "rounding_increment": 15,
            "week_start": "monday",
            "primary_hex": "#7c83fd",
            "accent_hex": "#E6E0FF",
            "glass_alpha": 85,
            "glass_blur_px": 12,
        }),
    )
    .await;

    let id = create_entry(&pool, "2024-05-06", 7, work, None).await;
    let response = get(common::build_test_app(pool), &format!("/api/v1/entries/{id}")).await;
    assert_eq!(body_json(response).await["data"]["duration_minutes"], 7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_entry_with_mismatched_activity_returns_400(pool: SqlitePool) {
    let (work, _, _, games) = fixture(&pool).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/entries",
        json!({
            "date": "2024-05-06",
            "duration_minutes": 30,
            "category_id": work,
            "activity_id": games,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = get(common::build_test_app(pool), "/api/v1/entries").await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_entry_duration_out_of_range_returns_400(pool: SqlitePool) {
    let (work, _, _, _) = fixture(&pool).await;

    for minutes in [0, 1441] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/entries",
            json!({"date": "2024-05-06", "duration_minutes": minutes, "category_id": work}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_entries_filters(pool: SqlitePool) {
    let (work, coding, play, games) = fixture(&pool).await;
    let first = create_entry(&pool, "2024-05-01", 10, work, Some(coding)).await;
    let second = create_entry(&pool, "2024-05-03", 20, play, Some(games)).await;
    let third = create_entry(&pool, "2024-05-09", 30, work, None).await;

    let ids = |json: serde_json::Value| -> Vec<i64> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_i64().unwrap())
            .collect()
    };

    let response = get(common::build_test_app(pool.clone()), "/api/v1/entries").await;
    assert_eq!(ids(body_json(response).await), [third, second, first]);

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/entries?from=2024-05-02&to=2024-05-09",
    )
    .await;
    assert_eq!(ids(body_json(response).await), [third, second]);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/entries?category_id={work}"),
    )
    .await;
    assert_eq!(ids(body_json(response).await), [third, first]);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/entries?activity_id={games}"),
    )
    .await;
    assert_eq!(ids(body_json(response).await), [second]);

    let response = get(common::build_test_app(pool.clone()), "/api/v1/entries?from=May").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(
        common::build_test_app(pool),
        "/api/v1/entries?from=2024-05-09&to=2024-05-01",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_entry_category_only_is_checked(pool: SqlitePool) {
    let (work, coding, play, _) = fixture(&pool).await;
    let id = create_entry(&pool, "2024-05-06", 30, work, Some(coding)).await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/entries/{id}"),
        json!({"category_id": play}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Clearing the activity in the same update makes the move valid.
    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/entries/{id}"),
        json!({"category_id": play, "activity_id": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["category_id"], play);
    assert!(json["data"]["activity_id"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_entry_omitted_fields_are_kept(pool: SqlitePool) {
    let (work, coding, _, _) = fixture(&pool).await;
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/entries",
        json!({
            "date": "2024-05-06",
            "duration_minutes": 30,
            "category_id": work,
            "activity_id": coding,
            "notes": "keep me",
        }),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/entries/{id}"),
        json!({"duration_minutes": 50}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["duration_minutes"], 50);
    assert_eq!(json["data"]["notes"], "keep me");
    assert_eq!(json["data"]["activity_id"], coding);

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/entries/{id}"),
        json!({"notes": null}),
    )
    .await;
    assert!(body_json(response).await["data"]["notes"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_entry(pool: SqlitePool) {
    let (work, _, _, _) = fixture(&pool).await;
    let id = create_entry(&pool, "2024-05-06", 30, work, None).await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/entries/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/v1/entries/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(common::build_test_app(pool), &format!("/api/v1/entries/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
