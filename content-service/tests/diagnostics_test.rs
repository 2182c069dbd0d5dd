mod common;

use axum::http::StatusCode;
use bson::doc;
use common::TestApp;
use content_service::config::DatabaseConfig;
use content_service::dtos::diagnostics::{
    BACKEND_RUNNING, CONNECTED, DATABASE_MODULE_MISSING, DATABASE_UNINITIALIZED,
    DATABASE_WORKING, ENV_NOT_SET, ENV_SET, NOT_CONNECTED,
};
use content_service::dtos::DiagnosticsReport;
use content_service::services::{MemoryStore, StoreHandle};

async fn report(app: &TestApp) -> DiagnosticsReport {
    let (status, body) = app.get("/test").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body).expect("Unexpected diagnostics shape")
}

#[tokio::test]
async fn nothing_configured_reports_missing_module() {
    let report = report(&TestApp::without_store()).await;

    assert_eq!(report.backend, BACKEND_RUNNING);
    assert_eq!(report.database, DATABASE_MODULE_MISSING);
    assert_eq!(report.database_url, ENV_NOT_SET);
    assert_eq!(report.database_name, ENV_NOT_SET);
    assert_eq!(report.connection_status, NOT_CONNECTED);
    assert!(report.collections.is_empty());
}

#[tokio::test]
async fn url_without_name_reports_uninitialized() {
    let config = DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: None,
    };
    let report = report(&TestApp::new(StoreHandle::Uninitialized, config)).await;

    assert_eq!(report.database, DATABASE_UNINITIALIZED);
    assert_eq!(report.database_url, ENV_SET);
    assert_eq!(report.database_name, ENV_NOT_SET);
    assert_eq!(report.connection_status, NOT_CONNECTED);
}

#[tokio::test]
async fn client_construction_failure_is_reported_truncated() {
    let reason = "x".repeat(120);
    let app = TestApp::new(StoreHandle::Failed(reason), common::configured());
    let report = report(&app).await;

    assert_eq!(report.database, format!("❌ Error: {}", "x".repeat(50)));
    assert_eq!(report.connection_status, NOT_CONNECTED);
}

#[tokio::test]
async fn working_store_lists_at_most_ten_collections() {
    let store = MemoryStore::new(common::TEST_DATABASE);
    for i in 0..12 {
        store
            .insert(&format!("collection_{:02}", i), doc! { "n": i })
            .await;
    }
    let report = report(&TestApp::with_store(store)).await;

    assert_eq!(report.database, DATABASE_WORKING);
    assert_eq!(report.connection_status, CONNECTED);
    assert_eq!(report.database_url, ENV_SET);
    assert_eq!(report.database_name, ENV_SET);
    assert_eq!(report.collections.len(), 10);
    assert_eq!(report.collections[0], "collection_00");
}

#[tokio::test]
async fn query_failure_is_reported_as_connected_with_error() {
    let store = MemoryStore::new(common::TEST_DATABASE);
    store.insert("book", doc! { "title": "x" }).await;
    store.fail_with("server selection timeout").await;
    let report = report(&TestApp::with_store(store)).await;

    assert!(
        report.database.starts_with("⚠️  Connected but Error: "),
        "{}",
        report.database
    );
    assert!(report.database.chars().count() <= "⚠️  Connected but Error: ".chars().count() + 50);
    assert_eq!(report.connection_status, CONNECTED);
    assert!(report.collections.is_empty());
}
