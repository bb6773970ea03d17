mod common;

use axum::Router;
use axum_test::TestServer;
use chrono::Duration;
use shortlink::api::routes::public_routes;

#[tokio::test]
async fn test_stats_fresh_link() {
    let (state, _clock) = common::create_test_state_with_codes(&["ab12cd"]);
    let app: Router = public_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .post("/shorten")
        .form(&[("url", "https://example.com/long/path"), ("validity", "1")])
        .await;

    let response = server.get("/stats").add_query_param("code", "ab12cd").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "ab12cd");
    assert_eq!(json["target_url"], "https://example.com/long/path");
    assert_eq!(json["click_count"], 0);
    assert_eq!(json["expired"], false);
    assert!(json["created_at"].is_string());
    assert!(json["expires_at"].is_string());
}

#[tokio::test]
async fn test_stats_does_not_count_clicks() {
    let (state, _clock) = common::create_test_state_with_codes(&["ab12cd"]);
    let app: Router = public_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .post("/shorten")
        .form(&[("url", "https://example.com")])
        .await;

    for _ in 0..3 {
        let response = server.get("/stats").add_query_param("code", "ab12cd").await;
        assert_eq!(response.json::<serde_json::Value>()["click_count"], 0);
    }
}

#[tokio::test]
async fn test_stats_expired_link_still_visible() {
    let (state, clock) = common::create_test_state_with_codes(&["ab12cd"]);
    let app: Router = public_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    let created = server
        .post("/shorten")
        .form(&[("url", "https://example.com/long/path"), ("validity", "1")])
        .await
        .json::<serde_json::Value>();

    clock.advance(Duration::seconds(30));
    server
        .get("/redirect")
        .add_query_param("code", "ab12cd")
        .await;

    clock.advance(Duration::seconds(60));
    let expired = server
        .get("/redirect")
        .add_query_param("code", "ab12cd")
        .await;
    assert_eq!(expired.status_code(), 410);

    let response = server.get("/stats").add_query_param("code", "ab12cd").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["target_url"], "https://example.com/long/path");
    assert_eq!(json["expires_at"], created["expires_at"]);
    assert_eq!(json["click_count"], 1);
    assert_eq!(json["expired"], true);
}

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _clock) = common::create_test_state();
    let app: Router = public_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/stats").add_query_param("code", "nope00").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "nope00");
}

#[tokio::test]
async fn test_stats_missing_code() {
    let (state, _clock) = common::create_test_state();
    let app: Router = public_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/stats").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_stats_expired_flag_at_expiry_boundary() {
    let (state, clock) = common::create_test_state_with_codes(&["ab12cd"]);
    let app: Router = public_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .post("/shorten")
        .form(&[("url", "https://example.com"), ("validity", "1")])
        .await;

    clock.advance(Duration::minutes(1));
    let at_expiry = server.get("/stats").add_query_param("code", "ab12cd").await;
    assert_eq!(at_expiry.json::<serde_json::Value>()["expired"], false);

    clock.advance(Duration::milliseconds(1));
    let after_expiry = server.get("/stats").add_query_param("code", "ab12cd").await;
    assert_eq!(after_expiry.json::<serde_json::Value>()["expired"], true);
}
