mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_get_on_shorten_is_method_not_allowed() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/shorten").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_post_on_metrics_is_method_not_allowed() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/metrics").json(&json!({})).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_delete_on_code_is_method_not_allowed() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.delete("/abcdefgh").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_static_routes_take_precedence_over_codes() {
    let server = common::create_test_server(common::create_test_state());

    server.get("/metrics").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();
}

#[tokio::test]
async fn test_unmatched_path_returns_json_not_found() {
    let server = common::create_test_server(common::create_test_state());

    for path in ["/a/b", "/shorten/extra/segments"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "error": "Short URL not found" }));
    }
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let server = common::create_app_server(common::create_test_state());

    server.get("/metrics/").await.assert_status_ok();
    server.get("/health/").await.assert_status_ok();
}

#[tokio::test]
async fn test_trailing_slash_on_code_redirects() {
    let server = common::create_app_server(common::create_test_state());

    server
        .post("/shorten/")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    let response = server.get("/yYTQaq--/").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com");
}
