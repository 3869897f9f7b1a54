mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkmap::state::AppState;
use linkmap::web::handlers::index_handler;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(index_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_index_lists_every_entry() {
    let (state, _rx) = common::create_test_state(common::sample_pairs());
    let server = test_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.text();
    for (code, url) in common::sample_pairs() {
        assert!(body.contains(code), "missing code {code:?}");
        assert!(body.contains(url), "missing url {url:?}");
    }
    assert!(body.contains("3 links"));
}

#[tokio::test]
async fn test_index_headers() {
    let (state, _rx) = common::create_test_state(common::sample_pairs());
    let server = test_server(state);

    let response = server.get("/").await;

    assert_eq!(response.header("cache-control"), "public, max-age=3600");

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_index_with_empty_mapping() {
    let (state, _rx) = common::create_test_state(vec![]);
    let server = test_server(state);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("0 links"));
}
