//! Keep-alive HTTP server tests
//!
//! Run with: cargo test -p integration-tests --test health_api_tests

use integration_tests::{TestBot, TestServer};
use reqwest::StatusCode;

#[tokio::test]
async fn test_root_ping() {
    let bot = TestBot::new();
    let server = TestServer::start(bot.ctx.clone()).await.unwrap();

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "tierbot is alive");
}

#[tokio::test]
async fn test_health() {
    let bot = TestBot::new();
    let server = TestServer::start(bot.ctx.clone()).await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_with_missing_ledger() {
    let bot = TestBot::new();
    let server = TestServer::start(bot.ctx.clone()).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["ledger_store"], "healthy");
}

#[tokio::test]
async fn test_not_ready_with_corrupt_ledger() {
    let bot = TestBot::new();
    std::fs::write(bot.dir.ledger_path(), "{ corrupt").unwrap();
    let server = TestServer::start(bot.ctx.clone()).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn test_unknown_route() {
    let bot = TestBot::new();
    let server = TestServer::start(bot.ctx.clone()).await.unwrap();

    let response = server.get("/api/v1/anything").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
