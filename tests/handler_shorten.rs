mod common;

use serde_json::json;
use trunc8::api::dto::shorten::LinkResponse;

#[tokio::test]
async fn test_shorten_success() {
    let ctx = common::create_test_context(&["AB12"]);
    let server = common::create_test_server(ctx.state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<LinkResponse>();
    assert_eq!(body.code, "AB12");
    assert_eq!(body.original_url, "https://example.com");
    assert_eq!(body.click_count, 0);
    assert_eq!(body.short_url, "http://s.test/AB12");
    assert!(body.id > 0);
}

#[tokio::test]
async fn test_shorten_returns_random_code() {
    let ctx = common::create_test_context(&[]);
    let server = common::create_test_server(ctx.state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/some/long/path?q=1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert!(common::is_valid_code(code));
    assert_eq!(json["original_url"], "https://example.com/some/long/path?q=1");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let ctx = common::create_test_context(&[]);
    let repo = ctx.repo.clone();
    let server = common::create_test_server(ctx.state);

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_shorten_invalid_json() {
    let ctx = common::create_test_context(&[]);
    let server = common::create_test_server(ctx.state);

    let response = server
        .post("/shorten")
        .content_type("application/json")
        .text("invalid json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid JSON");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let ctx = common::create_test_context(&[]);
    let server = common::create_test_server(ctx.state);

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_exhausted_is_service_unavailable() {
    let ctx = common::create_test_context(&["TAKN"; 6]);
    ctx.shortener.shorten("https://owner.com").await.unwrap();
    let server = common::create_test_server(ctx.state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://late.com" }))
        .await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "service_unavailable");
}

#[tokio::test]
async fn test_shorten_get_not_allowed() {
    let ctx = common::create_test_context(&[]);
    let server = common::create_test_server(ctx.state);

    let response = server.get("/shorten").await;

    assert_eq!(response.status_code(), 405);
}

#[tokio::test]
async fn test_shorten_rejects_url_unfit_for_location_header() {
    let ctx = common::create_test_context(&["AB12"]);
    let repo = ctx.repo.clone();
    let server = common::create_test_server(ctx.state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["field"], "url");
    assert!(repo.is_empty());

    let redirect = server.get("/AB12").await;
    redirect.assert_status_not_found();
}

#[tokio::test]
async fn test_shorten_keeps_unusual_but_valid_url_verbatim() {
    let ctx = common::create_test_context(&["AB12"]);
    let server = common::create_test_server(ctx.state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "  not a url  " }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["original_url"], "  not a url  ");

    let redirect = server.get("/AB12").await;
    assert_eq!(redirect.status_code(), 307);
}

#[tokio::test]
async fn test_shorten_storage_failure_hides_details() {
    let state = common::create_state_with_store(
        std::sync::Arc::new(common::FailingLinkRepository),
        std::time::Duration::from_secs(1),
    );
    let server = common::create_test_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert!(!response.text().contains("connection refused"));
}
