mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkmap::api::handlers::health_handler;
use linkmap::state::AppState;

fn test_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _rx) = common::create_test_state(common::sample_pairs());
    let server = test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["urlCount"], 3);
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let (state, _rx) = common::create_test_state(common::sample_pairs());
    let server = test_server(state);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("urlCount").is_some());
    assert!(json.get("buildTime").is_some());
}

#[tokio::test]
async fn test_health_ok_with_empty_mapping() {
    let (state, _rx) = common::create_test_state(vec![]);
    let server = test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["urlCount"], 0);
}
