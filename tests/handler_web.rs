mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use link_analytics::state::AppState;
use link_analytics::web::routes::page_routes;

fn make_server(state: AppState) -> TestServer {
    TestServer::new(page_routes().with_state(state)).unwrap()
}

#[tokio::test]
async fn test_create_page_renders_form() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/create").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"action="/save""#));
    assert!(html.contains(r#"name="destination""#));
}

#[tokio::test]
async fn test_save_redirects_to_analytics() {
    let (tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/save")
        .form(&[("destination", "  https://example.com  ")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    let id = "100680ad546ce6a577f42f52df33b4cfdca756859e664b8d7de329b150d09ce9";
    assert_eq!(response.header("location"), format!("/analytics/{id}").as_str());
    assert_eq!(common::read_unit(tmp.path(), id), "https://example.com\n");
}

#[tokio::test]
async fn test_save_rejects_blank_destination() {
    let (tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server.post("/save").form(&[("destination", "   ")]).await;

    response.assert_status_bad_request();
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_analytics_page_shows_destination_and_hits() {
    let (_tmp, state) = common::create_test_state();
    let id = common::create_test_link(&state, "https://example.com/page").await;
    state.link_service.visit(&id, "PageBot/2.0").await.unwrap();
    let server = make_server(state);

    let response = server.get(&format!("/analytics/{id}")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("https://example.com/page"));
    assert!(html.contains(&format!("{}/go/{id}", common::BASE_URL)));
    assert!(html.contains("PageBot/2.0"));
    assert!(html.contains("hit: "));
}

#[tokio::test]
async fn test_analytics_page_escapes_signature() {
    let (_tmp, state) = common::create_test_state();
    let id = common::create_test_link(&state, "https://example.com/xss").await;
    state
        .link_service
        .visit(&id, "<script>alert(1)</script>")
        .await
        .unwrap();
    let server = make_server(state);

    let html = server.get(&format!("/analytics/{id}")).await.text();

    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn test_analytics_page_unknown_is_not_found() {
    let (_tmp, state) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/analytics/abc123").await;

    response.assert_status_not_found();
}
