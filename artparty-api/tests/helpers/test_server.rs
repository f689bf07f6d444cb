//! Test server wrapper for integration tests
//!
//! Runs the real router against an in-memory database and drives it with
//! in-process requests, plus seed helpers for the common entity setups.

use artparty_api::{build_router, AppState};
use artparty_common::db::init_memory_database;
use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};

/// Test server instance with the full API over an in-memory database
pub struct TestServer {
    router: Router,
}

impl TestServer {
    /// Start a new test server with an empty schema
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let pool = init_memory_database().await?;
        let router = build_router(AppState::new(pool));

        Ok(TestServer { router })
    }

    /// Make an HTTP request to the test server
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Option<Value>), Box<dyn std::error::Error>> {
        use axum::body::Body;
        use axum::http::{Method, Request};
        use http_body_util::BodyExt;
        use tower::Service;

        let method = match method {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            _ => return Err(format!("Unsupported method: {}", method).into()),
        };

        let mut request_builder = Request::builder().method(method).uri(path);

        if body.is_some() {
            request_builder = request_builder.header("content-type", "application/json");
        }

        let request = if let Some(json_body) = body {
            request_builder.body(Body::from(json_body.to_string()))?
        } else {
            request_builder.body(Body::empty())?
        };

        let response = self.router.clone().call(request).await?;

        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();

        let json_body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes)?)
        };

        Ok((status, json_body))
    }

    fn id_of(response: Option<Value>) -> i64 {
        response
            .and_then(|v| v.get("id").and_then(Value::as_i64))
            .expect("response should carry an id")
    }

    /// Create a user and return its id
    pub async fn seed_user(&self, name: &str, uid: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/users",
                Some(json!({
                    "name": name,
                    "email": format!("{}@example.com", uid),
                    "img": "",
                    "uid": uid,
                })),
            )
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        Self::id_of(body)
    }

    /// Create an artist owned by `user` and return its id
    pub async fn seed_artist(&self, name: &str, user: i64) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/artists",
                Some(json!({ "name": name, "img": "", "user": user })),
            )
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        Self::id_of(body)
    }

    /// Create an artwork and return its id
    pub async fn seed_artwork(&self, title: &str, user: i64, artist: i64, featured: bool) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/artworks",
                Some(json!({
                    "title": title,
                    "img": "",
                    "medium": "crayon",
                    "description": "",
                    "date": "2024-03-01",
                    "age": 6,
                    "featured": featured,
                    "user": user,
                    "artist": artist,
                })),
            )
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        Self::id_of(body)
    }

    /// Create a tag and return its id
    pub async fn seed_tag(&self, label: &str) -> i64 {
        let (status, body) = self
            .request("POST", "/tags", Some(json!({ "label": label })))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        Self::id_of(body)
    }

    /// Fetch one artwork's `tags` array as (join id, tag id) pairs
    pub async fn artwork_tag_pairs(&self, artwork: i64) -> Vec<(i64, i64)> {
        let (status, body) = self
            .request("GET", &format!("/artworks/{}", artwork), None)
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);

        body.unwrap()["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|join| {
                (
                    join["id"].as_i64().unwrap(),
                    join["tag"]["id"].as_i64().unwrap(),
                )
            })
            .collect()
    }
}
