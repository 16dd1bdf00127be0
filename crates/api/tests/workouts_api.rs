//! HTTP-level integration tests for the `/api/workouts` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, delete, get, post_json, put_json, workout_body,
};
use serde_json::json;
use sqlx::PgPool;

/// Create a workout through the API and return its JSON.
async fn create(pool: &PgPool, name: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/workouts",
        workout_body(name),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn list(pool: &PgPool) -> Vec<serde_json::Value> {
    let response = get(build_test_app(pool.clone()), "/api/workouts").await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

fn find<'a>(rows: &'a [serde_json::Value], id: &serde_json::Value) -> &'a serde_json::Value {
    rows.iter()
        .find(|row| &row["id"] == id)
        .expect("row should be listed")
}

// ---------------------------------------------------------------------------
// GET /api/workouts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_empty_array(pool: PgPool) {
    assert!(list(&pool).await.is_empty());
}

// ---------------------------------------------------------------------------
// POST /api/workouts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_camel_case_row(pool: PgPool) {
    let created = create(&pool, "Murph Monday").await;

    assert!(created["id"].is_i64());
    assert_eq!(created["name"], "Murph Monday");
    assert_eq!(created["mapsUrl"], "https://goo.gl/maps/UEULdFoyEpTRwLLo9");
    assert_eq!(created["eventType"], "Beatdown");
    assert_eq!(created["sortOrder"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_rows_get_max_plus_one_sort_order(pool: PgPool) {
    let first = create(&pool, "A").await;
    let second = create(&pool, "B").await;
    let third = create(&pool, "C").await;

    let rows = list(&pool).await;
    assert_eq!(rows.len(), 3);
    assert_eq!(find(&rows, &first["id"])["sortOrder"], 0);
    assert_eq!(find(&rows, &second["id"])["sortOrder"], 1);
    assert_eq!(find(&rows, &third["id"])["sortOrder"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_supplied_sort_order_is_ignored_on_create(pool: PgPool) {
    create(&pool, "A").await;

    let mut body = workout_body("B");
    body["sortOrder"] = json!(99);
    let response = post_json(build_test_app(pool.clone()), "/api/workouts", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["sortOrder"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_invalid_fields_returns_400_and_writes_nothing(pool: PgPool) {
    let body = json!({
        "name": "",
        "location": "Hampshire School",
        "mapsUrl": "http://maps.example.com/x",
        "schedule": "Saturday: 6:00 AM - 7:00 AM",
    });
    let response = post_json(build_test_app(pool.clone()), "/api/workouts", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<_> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, ["name", "mapsUrl", "eventType"]);

    assert!(list(&pool).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_returns_400_json_error(pool: PgPool) {
    let app = build_test_app(pool);
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/workouts")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// PUT /api/workouts/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_single_field_changes_only_that_field(pool: PgPool) {
    let created = create(&pool, "The Refuge").await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/workouts/{id}"),
        json!({ "location": "Chickasaw Trace Park" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["location"], "Chickasaw Trace Park");
    for key in ["name", "mapsUrl", "schedule", "eventType", "sortOrder"] {
        assert_eq!(updated[key], created[key], "{key} should be unchanged");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_unknown_id_returns_404(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/api/workouts/987654",
        json!({ "name": "Ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Workout with id 987654 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_with_insecure_maps_url_returns_400(pool: PgPool) {
    let created = create(&pool, "Outpost").await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/workouts/{id}"),
        json!({ "mapsUrl": "http://example.com/x" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let rows = list(&pool).await;
    assert_eq!(find(&rows, &created["id"])["mapsUrl"], created["mapsUrl"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_non_numeric_id_returns_json_400(pool: PgPool) {
    let response = put_json(
        build_test_app(pool),
        "/api/workouts/abc",
        json!({ "name": "Ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// DELETE /api/workouts/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_exactly_that_row(pool: PgPool) {
    let keep_a = create(&pool, "A").await;
    let doomed = create(&pool, "B").await;
    let keep_c = create(&pool, "C").await;
    let id = doomed["id"].as_i64().unwrap();

    let response = delete(build_test_app(pool.clone()), &format!("/api/workouts/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let rows = list(&pool).await;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["id"] != doomed["id"]));
    assert_eq!(find(&rows, &keep_a["id"]), &keep_a);
    assert_eq!(find(&rows, &keep_c["id"]), &keep_c);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unknown_id_returns_404(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/workouts/123456").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_non_numeric_id_returns_json_400(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/workouts/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("abc"));
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn paired_sort_order_puts_swap_two_rows(pool: PgPool) {
    let a = create(&pool, "A").await;
    let b = create(&pool, "B").await;
    let (a_id, b_id) = (a["id"].as_i64().unwrap(), b["id"].as_i64().unwrap());

    // Move B up: A takes B's position, B takes A's.
    let first = put_json(
        build_test_app(pool.clone()),
        &format!("/api/workouts/{a_id}"),
        json!({ "sortOrder": 1 }),
    )
    .await;
    let second = put_json(
        build_test_app(pool.clone()),
        &format!("/api/workouts/{b_id}"),
        json!({ "sortOrder": 0 }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let rows = list(&pool).await;
    assert_eq!(find(&rows, &a["id"])["sortOrder"], 1);
    assert_eq!(find(&rows, &b["id"])["sortOrder"], 0);
    assert_eq!(find(&rows, &a["id"])["name"], "A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_endpoint_swaps_atomically(pool: PgPool) {
    let a = create(&pool, "A").await;
    let b = create(&pool, "B").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/workouts/reorder",
        json!({ "moves": [
            { "id": b["id"], "sortOrder": 0 },
            { "id": a["id"], "sortOrder": 1 },
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    let updated = updated.as_array().unwrap();
    assert_eq!(updated[0]["id"], b["id"]);
    assert_eq!(updated[0]["sortOrder"], 0);
    assert_eq!(updated[1]["id"], a["id"]);
    assert_eq!(updated[1]["sortOrder"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_with_unknown_id_changes_nothing(pool: PgPool) {
    let a = create(&pool, "A").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/workouts/reorder",
        json!({ "moves": [
            { "id": a["id"], "sortOrder": 5 },
            { "id": 55_555, "sortOrder": 0 },
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let rows = list(&pool).await;
    assert_eq!(find(&rows, &a["id"])["sortOrder"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_rejects_duplicate_ids(pool: PgPool) {
    let a = create(&pool, "A").await;

    let response = post_json(
        build_test_app(pool),
        "/api/workouts/reorder",
        json!({ "moves": [
            { "id": a["id"], "sortOrder": 1 },
            { "id": a["id"], "sortOrder": 2 },
        ]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reorder_rejects_empty_batch(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/workouts/reorder",
        json!({ "moves": [] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
