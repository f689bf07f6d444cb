//! Integration tests for the auth bridge
//!
//! `check_user` is the one lookup in the system that answers an unknown id
//! with a sentinel body instead of a 404.

mod helpers;

use axum::http::StatusCode;
use helpers::TestServer;
use serde_json::json;

#[tokio::test]
async fn check_user_returns_the_record_for_a_known_uid() {
    let server = TestServer::start().await.unwrap();
    server.seed_user("Alice", "ext-1").await;

    let (status, body) = server
        .request("POST", "/auth/check_user", Some(json!({ "uid": "ext-1" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["uid"], "ext-1");
    assert_eq!(body["name"], "Alice");
    assert!(body.get("valid").is_none());
}

#[tokio::test]
async fn check_user_answers_unknown_uids_with_a_sentinel() {
    let server = TestServer::start().await.unwrap();

    let (status, body) = server
        .request("POST", "/auth/check_user", Some(json!({ "uid": "nobody" })))
        .await
        .unwrap();
    // 200 with a sentinel body, never a 404
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap(), json!({ "valid": false }));
}

#[tokio::test]
async fn check_user_requires_the_uid_field() {
    let server = TestServer::start().await.unwrap();

    let (status, body) = server
        .request("POST", "/auth/check_user", Some(json!({})))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.unwrap()["error"], "Missing required parameter: uid");
}

#[tokio::test]
async fn register_user_creates_unconditionally() {
    let server = TestServer::start().await.unwrap();

    let payload = json!({
        "name": "Alice",
        "email": "alice@example.com",
        "img": "alice.png",
        "uid": "ext-1",
    });

    let (status, body) = server
        .request("POST", "/auth/register_user", Some(payload.clone()))
        .await
        .unwrap();
    // The bridge answers 200, not 201 like the resource creates
    assert_eq!(status, StatusCode::OK);
    let first = body.unwrap();
    assert_eq!(first["uid"], "ext-1");

    // No duplicate check: registering the same uid again makes a second row
    let (status, body) = server
        .request("POST", "/auth/register_user", Some(payload))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_ne!(body.unwrap()["id"], first["id"]);

    // check_user finds the first matching row
    let (status, body) = server
        .request("POST", "/auth/check_user", Some(json!({ "uid": "ext-1" })))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["id"], first["id"]);
}
