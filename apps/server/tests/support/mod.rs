//! Shared integration test harness.
//!
//! Tests drive the real router in-process via `tower::ServiceExt::oneshot`,
//! backed by an in-memory room store unless a test supplies its own.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use meeting_rooms::{
    api::create_router,
    config::{Config, StorageKind},
    db::{InMemoryRoomStore, RoomStore},
    models::{MeetingRoom, RoomFields},
    state::AppState,
    Error, Result,
};
use serde::Serialize;
use std::{future::Future, sync::Arc};
use tower::ServiceExt;

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn new(config: Config, store: Arc<dyn RoomStore>) -> Self {
        let state = AppState::with_store(config, store);
        let router = create_router(state.clone());
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Vec<u8>)> {
        self.request_with_extra_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Vec<u8>)> {
        let mut builder = Request::builder().method(method).uri(uri);
        let has_content_type = extra_headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
        if body.is_some() && !has_content_type {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }

        let request = builder.body(body.map(Body::from).unwrap_or_else(Body::empty))?;
        let response = self.router.clone().oneshot(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, headers, bytes.to_vec()))
    }

    /// Issue a request and parse the response body as JSON (`Null` when empty).
    pub async fn request_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<Vec<u8>>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, serde_json::Value)> {
        let (status, headers, body) = self.request(method, uri, body).await?;
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body)?
        };
        Ok((status, headers, json))
    }
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.storage.kind = StorageKind::Memory;
    config
}

/// Run `f` against an app backed by a freshly seeded in-memory store.
pub async fn with_test_app<F, Fut>(f: F) -> anyhow::Result<()>
where
    F: FnOnce(TestApp) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    with_test_app_with_config(|_| {}, f).await
}

pub async fn with_test_app_with_config<C, F, Fut>(configure: C, f: F) -> anyhow::Result<()>
where
    C: FnOnce(&mut Config),
    F: FnOnce(TestApp) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let mut config = test_config();
    configure(&mut config);
    f(TestApp::new(config, Arc::new(InMemoryRoomStore::seeded()))).await
}

pub async fn with_test_app_with_store<F, Fut>(store: Arc<dyn RoomStore>, f: F) -> anyhow::Result<()>
where
    F: FnOnce(TestApp) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    f(TestApp::new(test_config(), store)).await
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

pub fn to_json_body<T: Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

pub fn room_body(name: &str, location: &str, capacity: i64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "location": location,
        "capacity": capacity,
    })
}

/// A store whose backend is permanently unreachable.
pub struct UnavailableStore;

fn unreachable_backend() -> Error {
    Error::StorageUnavailable("connection refused (os error 111)".to_string())
}

#[async_trait]
impl RoomStore for UnavailableStore {
    async fn list_all(&self) -> Result<Vec<MeetingRoom>> {
        Err(unreachable_backend())
    }

    async fn get_by_id(&self, _id: i32) -> Result<Option<MeetingRoom>> {
        Err(unreachable_backend())
    }

    async fn create(&self, _fields: RoomFields) -> Result<MeetingRoom> {
        Err(unreachable_backend())
    }

    async fn update(&self, _id: i32, _fields: RoomFields) -> Result<Option<MeetingRoom>> {
        Err(unreachable_backend())
    }

    async fn delete(&self, _id: i32) -> Result<bool> {
        Err(unreachable_backend())
    }

    async fn exists(&self, _id: i32) -> Result<bool> {
        Err(unreachable_backend())
    }

    async fn count(&self) -> Result<i64> {
        Err(unreachable_backend())
    }

    async fn ping(&self) -> Result<()> {
        Err(unreachable_backend())
    }
}
