#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use tutors_api::{
    app, AppConfig, AppState, Environment, MemorySubjectStore, StoreError, Subject, SubjectStore,
    TodoService,
};
use uuid::Uuid;

pub fn config(environment: Environment) -> AppConfig {
    AppConfig {
        environment,
        ..AppConfig::default()
    }
}

pub fn router_with(
    store: Arc<dyn SubjectStore>,
    todos: TodoService,
    environment: Environment,
) -> Router {
    app(AppState::new(store, todos), &config(environment))
}

/// Memory stores with an explicit config.
pub fn router_with_config(config: &AppConfig) -> Router {
    let state = AppState::new(Arc::new(MemorySubjectStore::new()), TodoService::new());
    app(state, config)
}

/// Memory subject store, empty todo list, development mode.
pub fn router() -> Router {
    router_with(
        Arc::new(MemorySubjectStore::new()),
        TodoService::new(),
        Environment::Development,
    )
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// A store whose every call fails with a driver error.
pub struct FailingStore;

fn failure() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl SubjectStore for FailingStore {
    async fn list(&self) -> Result<Vec<Subject>, StoreError> {
        Err(failure())
    }

    async fn find(&self, _id: Uuid) -> Result<Option<Subject>, StoreError> {
        Err(failure())
    }

    async fn insert(&self, _name: &str) -> Result<Subject, StoreError> {
        Err(failure())
    }

    async fn update(&self, _id: Uuid, _name: &str) -> Result<Subject, StoreError> {
        Err(failure())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), StoreError> {
        Err(failure())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(failure())
    }
}
