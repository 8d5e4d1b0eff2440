mod common;

use trunc8::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let ctx = common::create_test_context(&["AB12"]);
    ctx.shortener
        .shorten("https://example.com/target")
        .await
        .unwrap();
    let server = common::create_test_server(ctx.state);

    let response = server.get("/AB12").await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_each_visit() {
    let ctx = common::create_test_context(&["AB12"]);
    ctx.shortener.shorten("https://example.com").await.unwrap();
    let repo = ctx.repo.clone();
    let server = common::create_test_server(ctx.state);

    server.get("/AB12").await;
    assert_eq!(repo.find_by_code("AB12").await.unwrap().unwrap().click_count, 1);

    server.get("/AB12").await;
    assert_eq!(repo.find_by_code("AB12").await.unwrap().unwrap().click_count, 2);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let ctx = common::create_test_context(&[]);
    let server = common::create_test_server(ctx.state);

    let response = server.get("/ZZZZ").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "ZZZZ");
}

#[tokio::test]
async fn test_redirect_without_code() {
    let ctx = common::create_test_context(&[]);
    let server = common::create_test_server(ctx.state);

    let response = server.get("/").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "code cannot be empty");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let ctx = common::create_test_context(&["AB12"]);
    ctx.shortener.shorten("https://example.com").await.unwrap();
    let server = common::create_test_server(ctx.state);

    let response = server.get("/ab12").await;

    response.assert_status_not_found();
}
