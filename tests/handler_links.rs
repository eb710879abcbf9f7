mod common;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_test::TestServer;
use link_analytics::api::handlers::{analytics_handler, create_link_handler};
use link_analytics::state::AppState;
use serde_json::json;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", post(create_link_handler))
        .route("/api/links/{identifier}/analytics", get(analytics_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_success() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "destination": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let id = "100680ad546ce6a577f42f52df33b4cfdca756859e664b8d7de329b150d09ce9";
    assert_eq!(body["identifier"], id);
    assert_eq!(body["destination"], "https://example.com");
    assert_eq!(body["short_url"], format!("{}/go/{id}", common::BASE_URL));
    assert_eq!(
        body["analytics_url"],
        format!("{}/analytics/{id}", common::BASE_URL)
    );
}

#[tokio::test]
async fn test_create_link_trims_destination() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "destination": "  https://example.com  " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["destination"], "https://example.com");
}

#[tokio::test]
async fn test_create_link_is_idempotent() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);
    let payload = json!({ "destination": "https://example.com/same" });

    let first = server.post("/api/links").json(&payload).await;
    let second = server.post("/api/links").json(&payload).await;

    assert_eq!(
        first.json::<serde_json::Value>()["identifier"],
        second.json::<serde_json::Value>()["identifier"]
    );
}

#[tokio::test]
async fn test_create_link_rejects_invalid_url() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "destination": "not a url" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_rejects_non_http_scheme() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "destination": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

// ─── ANALYTICS ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_analytics_new_link_has_no_hits() {
    let (_tmp, state) = common::create_test_state();
    let id = common::create_test_link(&state, "https://example.com/a").await;
    let server = make_server(state);

    let response = server.get(&format!("/api/links/{id}/analytics")).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["identifier"], id);
    assert_eq!(body["destination"], "https://example.com/a");
    assert_eq!(body["total"], 0);
    assert_eq!(body["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_analytics_lists_hits_in_order() {
    let (_tmp, state) = common::create_test_state();
    let id = common::create_test_link(&state, "https://example.com/a").await;
    for ua in ["first", "second", "third"] {
        state.link_service.visit(&id, ua).await.unwrap();
    }
    let server = make_server(state);

    let response = server.get(&format!("/api/links/{id}/analytics")).await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 3);
    let signatures: Vec<_> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["client_signature"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(signatures, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_analytics_pagination() {
    let (_tmp, state) = common::create_test_state();
    let id = common::create_test_link(&state, "https://example.com/a").await;
    for i in 0..5 {
        state
            .link_service
            .visit(&id, &format!("ua-{i}"))
            .await
            .unwrap();
    }
    let server = make_server(state);

    let response = server
        .get(&format!("/api/links/{id}/analytics"))
        .add_query_param("page", 2)
        .add_query_param("page_size", 2)
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["total"], 5);
    assert_eq!(body["items"][0]["client_signature"], "ua-2");
    assert_eq!(body["items"][1]["client_signature"], "ua-3");
}

#[tokio::test]
async fn test_analytics_invalid_page_size() {
    let (_tmp, state) = common::create_test_state();
    let id = common::create_test_link(&state, "https://example.com/a").await;
    let server = make_server(state);

    let response = server
        .get(&format!("/api/links/{id}/analytics"))
        .add_query_param("page_size", 0)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_analytics_unknown_is_not_found() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/api/links/abc123/analytics").await;

    response.assert_status_not_found();
}
