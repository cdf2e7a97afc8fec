mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/shorten")
        .json(&json!({ "url": "example.com" }))
        .await
        .assert_status_ok();

    let response = server.get("/yYTQaq--").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_round_trip_from_short_url() {
    let server = common::create_test_server(common::create_test_state());

    let short_url = server
        .post("/shorten")
        .json(&json!({ "url": "http://a.com/1" }))
        .await
        .json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    let path = short_url.trim_start_matches(common::BASE_URL);
    assert_eq!(path, "/h28kLZtl");

    let response = server.get(path).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "http://a.com/1");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/nonexistent").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "error": "Short URL not found" }));
}

#[tokio::test]
async fn test_redirect_without_code() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Short URL code is required" }));
}
