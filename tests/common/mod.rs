//! Shared harness driving the full router in-process.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use tictactoe_back::{
    config::AppConfig, dao::game_store::InMemoryGameStore, routes, state::AppState,
};

pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: routes::app(AppState::in_memory()),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(Arc::new(InMemoryGameStore::new()), config);
        Self {
            router: routes::app(state),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.request(request).await
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            content_type,
            headers,
            body,
        }
    }

    pub async fn graphql(&self, query: &str, variables: Value) -> Value {
        let response = self
            .send(
                Method::POST,
                "/graphql",
                Some(serde_json::json!({ "query": query, "variables": variables })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()
    }
}
