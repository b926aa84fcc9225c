//! HTTP-level tests for the exercise catalog.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, post_json_auth, put_json_auth, status_and_json, token,
};
use serde_json::json;
use sqlx::PgPool;

async fn create_exercise(pool: &PgPool, who: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/exercises",
        body,
        &token(who),
    )
    .await;
    status_and_json(response).await
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_custom_exercise_returns_201(pool: PgPool) {
    let (status, json) = create_exercise(
        &pool,
        "alice",
        json!({"name": "  Sled Push ", "bodyPart": 4, "exerciseType": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["name"], "Sled Push");
    assert_eq!(json["bodyPart"], 4);
    assert_eq!(json["exerciseType"], 0);
    assert_eq!(json["isPreset"], false);
    assert!(json.get("deletedAt").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_exercise_type_defaults_to_strength(pool: PgPool) {
    let (status, json) = create_exercise(&pool, "alice", json!({"name": "Farmer Carry"})).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["exerciseType"], 0);
    assert!(json["bodyPart"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_input_is_validation_error(pool: PgPool) {
    let (status, json) = create_exercise(&pool, "alice", json!({"name": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (status, _) = create_exercise(&pool, "alice", json!({"name": "X", "bodyPart": 6})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let long = "a".repeat(101);
    let (status, _) = create_exercise(&pool, "alice", json!({"name": long})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_body_is_validation_error(pool: PgPool) {
    let (status, json) = create_exercise(&pool, "alice", json!({"bodyPart": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (status, json) =
        create_exercise(&pool, "alice", json!({"name": "Curl", "bodyPart": "arms"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_name_is_conflict(pool: PgPool) {
    create_exercise(&pool, "alice", json!({"name": "Sled Push"})).await;
    let (status, json) = create_exercise(&pool, "alice", json!({"name": "Sled Push"})).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");

    // Another user may reuse the name.
    let (status, _) = create_exercise(&pool, "bob", json!({"name": "Sled Push"})).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_shows_presets_and_own_customs_only(pool: PgPool) {
    create_exercise(&pool, "alice", json!({"name": "Alice Lift"})).await;
    create_exercise(&pool, "bob", json!({"name": "Bob Lift"})).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/exercises",
        &token("alice"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let list = list.as_array().unwrap();

    assert!(list.iter().any(|e| e["name"] == "Alice Lift"));
    assert!(!list.iter().any(|e| e["name"] == "Bob Lift"));
    assert_eq!(list[0]["isPreset"], true);
    assert_eq!(list.last().unwrap()["name"], "Alice Lift");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_by_name_prefix_and_body_part(pool: PgPool) {
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/exercises?name=Bench&bodyPart=0",
        &token("alice"),
    )
    .await;
    let list = body_json(response).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bench Press"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_custom_exercise_is_not_found(pool: PgPool) {
    let (_, created) = create_exercise(&pool, "bob", json!({"name": "Bob Lift"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/exercises/{id}"),
        &token("alice"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/exercises/{id}"),
        &token("bob"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_replaces_fields(pool: PgPool) {
    let (_, created) =
        create_exercise(&pool, "alice", json!({"name": "Row", "bodyPart": 1})).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/exercises/{id}"),
        json!({"name": "Erg Row", "exerciseType": 1}),
        &token("alice"),
    )
    .await;
    let (status, json) = status_and_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Erg Row");
    assert!(json["bodyPart"].is_null());
    assert_eq!(json["exerciseType"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_preset_cannot_be_updated_or_deleted(pool: PgPool) {
    let preset = common::preset_id(&pool, "Squat").await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/exercises/{preset}"),
        json!({"name": "My Squat"}),
        &token("alice"),
    )
    .await;
    let (status, json) = status_and_json(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Preset exercises cannot be edited");

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/exercises/{preset}"),
        &token("alice"),
    )
    .await;
    let (status, json) = status_and_json(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Preset exercises cannot be deleted");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_foreign_exercise_cannot_be_updated(pool: PgPool) {
    let (_, created) = create_exercise(&pool, "bob", json!({"name": "Bob Lift"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/exercises/{id}"),
        json!({"name": "Stolen"}),
        &token("alice"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_rename_onto_existing_name_is_conflict(pool: PgPool) {
    create_exercise(&pool, "alice", json!({"name": "A"})).await;
    let (_, b) = create_exercise(&pool, "alice", json!({"name": "B"})).await;
    let id = b["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/exercises/{id}"),
        json!({"name": "A"}),
        &token("alice"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_soft_delete_hides_exercise(pool: PgPool) {
    let (_, created) = create_exercise(&pool, "alice", json!({"name": "Temp"})).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/exercises/{id}"),
        &token("alice"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/exercises/{id}"),
        &token("alice"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The name is free again.
    let (status, _) = create_exercise(&pool, "alice", json!({"name": "Temp"})).await;
    assert_eq!(status, StatusCode::CREATED);
}
