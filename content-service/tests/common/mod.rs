#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bson::{DateTime, Document};
use content_service::config::{ContentConfig, DatabaseConfig};
use content_service::models::Stored;
use content_service::services::{DocumentStore, FindOptions, MemoryStore, StoreHandle};
use content_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_DATABASE: &str = "site_test";

pub fn test_config(database: DatabaseConfig) -> ContentConfig {
    ContentConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            ..CoreConfig::default()
        },
        database,
    }
}

pub fn configured() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some(TEST_DATABASE.to_string()),
    }
}

/// Millisecond timestamps make ordering in fixtures explicit.
pub fn at(millis: i64) -> DateTime {
    DateTime::from_millis(1_700_000_000_000 + millis)
}

pub async fn insert<T: Stored>(store: &MemoryStore, record: &T, created: DateTime) {
    let document = record.to_stored(created).expect("Failed to encode fixture");
    store.insert(T::COLLECTION, document).await;
}

/// Wraps a store and counts every read that reaches it.
pub struct CountingStore {
    inner: MemoryStore,
    reads: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> (Self, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                reads: reads.clone(),
            },
            reads,
        )
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        options: FindOptions,
    ) -> Result<Vec<Document>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.find(collection, filter, options).await
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.list_collection_names().await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.inner.ping().await
    }
}

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new(store: StoreHandle, database: DatabaseConfig) -> Self {
        let router = build_router(AppState::new(test_config(database), store));
        Self { router }
    }

    pub fn with_store(store: MemoryStore) -> Self {
        Self::new(StoreHandle::ready(store), configured())
    }

    pub fn without_store() -> Self {
        Self::new(StoreHandle::Disabled, DatabaseConfig::default())
    }

    pub async fn request(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .request(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await;

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }
}

pub fn titles(body: &serde_json::Value) -> Vec<String> {
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|item| item["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
