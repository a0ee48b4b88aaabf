#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use cafe_server::{Config, OneshotRouter, ServerState, build_app};
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;

pub const MENU: &str = r#"[
  {"id":1,"name":"Bruschetta","description":"Toasted bread","price":6.5,"category":"starters","image":"/b.jpg"},
  {"id":2,"name":"Lasagna","description":"Layered pasta","price":14.25,"category":"mains","image":"/l.jpg"},
  {"id":3,"name":"Caprese","description":"Tomato and mozzarella","price":8,"category":"starters","image":"/c.jpg"},
  {"id":4,"name":"Espresso","description":"Short and strong","price":2.5,"category":"drinks","image":"/e.jpg"}
]"#;

pub const REVIEWS: &str = r#"[
  {"id":1,"author":"Ana","photo":"/a.jpg","comment":"Lovely pasta","rating":5}
]"#;

/// In-process server over a temporary public directory
pub struct TestApp {
    pub state: ServerState,
    pub app: Router<ServerState>,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_banner_delay(Duration::from_secs(5)).await
    }

    pub async fn with_banner_delay(delay: Duration) -> Self {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        std::fs::create_dir_all(&public).unwrap();
        std::fs::write(public.join("menu.json"), MENU).unwrap();
        std::fs::write(public.join("reviews.json"), REVIEWS).unwrap();
        std::fs::write(public.join("reservations.json"), "[]").unwrap();
        std::fs::write(
            public.join("store.json"),
            r#"{"name":"myFoodCafe","address_lines":["123 Gourmet Avenue","Culinary District, CA 90210"]}"#,
        )
        .unwrap();

        let config = Config::with_overrides(dir.path().to_string_lossy(), 0).with_banner_delay(delay);
        let state = ServerState::initialize(&config).await;
        Self {
            state,
            app: build_app(),
            dir,
        }
    }

    pub fn public_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("public")
    }

    pub async fn call(&mut self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.call_raw(method, uri, body.map(|b| b.to_string())).await
    }

    /// Like [`TestApp::call`] but the JSON body is sent as given
    pub async fn call_raw(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.oneshot(&self.state, request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&mut self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.call(Method::POST, uri, body).await
    }

    pub async fn delete(&mut self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::DELETE, uri, None).await
    }

    /// Set one field; returns the resulting form view
    pub async fn set(&mut self, session: &str, form: &str, field: &str, value: &str) -> Value {
        let uri = format!("/api/sessions/{session}/{form}/fields/{field}");
        let (status, body) = self
            .call(Method::PUT, &uri, Some(json!({ "value": value })))
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["data"].clone()
    }

    pub async fn new_session(&mut self) -> String {
        let (status, body) = self.post("/api/sessions", None).await;
        assert_eq!(status, StatusCode::OK);
        body["data"]["id"].as_str().unwrap().to_string()
    }
}
