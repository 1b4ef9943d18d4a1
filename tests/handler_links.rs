mod common;

use axum::Router;
use axum_test::TestServer;
use regex::Regex;
use serde_json::{Value, json};
use sqlx::PgPool;
use tinylink::api::routes::api_routes;

fn api_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new().nest("/api", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_create_link_generates_code(pool: PgPool) {
    let server = api_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert!(Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap().is_match(code));
    assert_eq!(body["target_url"], "https://example.com");
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::TEST_BASE_URL, code)
    );
}

#[sqlx::test]
async fn test_create_link_with_custom_code(pool: PgPool) {
    let server = api_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://example.com", "code": "promo24" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["code"], "promo24");
}

#[sqlx::test]
async fn test_create_link_conflict(pool: PgPool) {
    let server = api_server(pool.clone());
    common::create_test_link(&pool, "taken12", "https://first.example.com").await;

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://example.com", "code": "taken12" }))
        .await;

    assert_eq!(response.status_code(), 409);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
}

#[sqlx::test]
async fn test_create_link_invalid_target(pool: PgPool) {
    let server = api_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "not-a-url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(
        body["error"]["message"],
        "target_url must be a valid URL with http/https"
    );
}

#[sqlx::test]
async fn test_create_link_rejects_ftp_target(pool: PgPool) {
    let server = api_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "ftp://x.com" }))
        .await;

    assert_eq!(response.status_code(), 400);

    // Same error shape as a malformed target: one validation path owns
    // target_url errors.
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "target_url must be a valid URL with http/https"
    );
}

#[sqlx::test]
async fn test_create_link_invalid_code(pool: PgPool) {
    let server = api_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "http://x.com", "code": "ab" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_list_links(pool: PgPool) {
    let server = api_server(pool.clone());
    common::create_test_link(&pool, "lista12", "https://a.example.com").await;
    common::create_test_link(&pool, "listb12", "https://b.example.com").await;

    let response = server.get("/api/links").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["clicks"], 0);
    assert!(items[0]["last_clicked"].is_null());
}

#[sqlx::test]
async fn test_stats_does_not_count(pool: PgPool) {
    let server = api_server(pool.clone());
    common::create_test_link(&pool, "stats12", "https://example.com").await;

    let response = server.get("/api/links/stats12").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["code"], "stats12");
    assert_eq!(body["target_url"], "https://example.com");
    assert_eq!(body["clicks"], 0);
    assert!(body["last_clicked"].is_null());

    // Reading stats never increments.
    assert_eq!(common::get_clicks(&pool, "stats12").await, 0);
}

#[sqlx::test]
async fn test_stats_not_found(pool: PgPool) {
    let server = api_server(pool);

    let response = server.get("/api/links/missing1").await;

    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_delete_link(pool: PgPool) {
    let server = api_server(pool.clone());
    common::create_test_link(&pool, "gone123", "https://example.com").await;

    let response = server.delete("/api/links/gone123").await;
    assert_eq!(response.status_code(), 204);

    let response = server.get("/api/links/gone123").await;
    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_delete_link_not_found(pool: PgPool) {
    let server = api_server(pool);

    let response = server.delete("/api/links/missing1").await;
    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_deleted_code_is_reusable(pool: PgPool) {
    let server = api_server(pool.clone());
    common::create_test_link(&pool, "cycle12", "https://old.example.com").await;

    let response = server.delete("/api/links/cycle12").await;
    assert_eq!(response.status_code(), 204);

    let response = server
        .post("/api/links")
        .json(&json!({ "target_url": "https://new.example.com", "code": "cycle12" }))
        .await;
    assert_eq!(response.status_code(), 201);
}
