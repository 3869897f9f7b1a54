mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkmap::api::handlers::url_index_handler;
use linkmap::state::AppState;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/urls", get(url_index_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_urls_lists_full_mapping() {
    let (state, _rx) = common::create_test_state(common::sample_pairs());
    let server = test_server(state);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 3);
    assert_eq!(json["urls"]["gh"], "https://github.com/example");
    assert_eq!(json["urls"]["docs"], "https://docs.example.com/");
    assert_eq!(json["urls"]["blog"], "https://blog.example.com/posts");
    assert!(json.get("buildTime").is_some());
}

#[tokio::test]
async fn test_urls_cors_and_cache_headers() {
    let (state, _rx) = common::create_test_state(common::sample_pairs());
    let server = test_server(state);

    let response = server.get("/api/urls").await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(response.header("cache-control"), "public, max-age=3600");

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("application/json"));
}

#[tokio::test]
async fn test_urls_body_keeps_mapping_order() {
    let (state, _rx) = common::create_test_state(common::sample_pairs());
    let server = test_server(state);

    // Order matters on the wire, so check the raw body rather than a
    // parsed (key-sorted) value.
    let body = server.get("/api/urls").await.text();

    let gh = body.find("\"gh\"").unwrap();
    let docs = body.find("\"docs\"").unwrap();
    let blog = body.find("\"blog\"").unwrap();
    assert!(gh < docs && docs < blog);
}

#[tokio::test]
async fn test_urls_empty_mapping() {
    let (state, _rx) = common::create_test_state(vec![]);
    let server = test_server(state);

    let response = server.get("/api/urls").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 0);
    assert_eq!(json["urls"], serde_json::json!({}));
}
