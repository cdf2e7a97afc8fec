mod common;

use serde_json::json;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "0 links, 0 domains");
}

#[tokio::test]
async fn test_health_reports_store_size() {
    let server = common::create_test_server(common::create_test_state());

    for url in ["https://a.com/1", "https://a.com/2", "https://b.com"] {
        server
            .post("/shorten")
            .json(&json!({ "url": url }))
            .await
            .assert_status_ok();
    }

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["store"]["message"], "3 links, 2 domains");
}
