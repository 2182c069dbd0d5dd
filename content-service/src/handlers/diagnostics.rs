use crate::config::DatabaseConfig;
use crate::dtos::diagnostics::{
    CONNECTED, DATABASE_MODULE_MISSING, DATABASE_UNINITIALIZED, DATABASE_WORKING,
    MAX_LISTED_COLLECTIONS,
};
use crate::dtos::DiagnosticsReport;
use crate::services::StoreHandle;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Describes what the service can see of its database.
///
/// The `database_url` / `database_name` indicators reflect configuration
/// only; they say nothing about whether the store answers. They come from
/// the `DatabaseConfig` resolved at startup, so a variable changed in the
/// running process is not picked up until restart.
pub async fn probe(store: &StoreHandle, config: &DatabaseConfig) -> DiagnosticsReport {
    let mut report = DiagnosticsReport::default();

    match store {
        StoreHandle::Disabled => report.database = DATABASE_MODULE_MISSING.to_string(),
        StoreHandle::Uninitialized => report.database = DATABASE_UNINITIALIZED.to_string(),
        StoreHandle::Failed(reason) => report.database = DiagnosticsReport::failed(reason),
        StoreHandle::Ready(db) => {
            report.connection_status = CONNECTED.to_string();
            match db.list_collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_LISTED_COLLECTIONS);
                    report.collections = names;
                    report.database = DATABASE_WORKING.to_string();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Listing collections failed");
                    report.database = DiagnosticsReport::connected_with_error(&e.to_string());
                }
            }
        }
    }

    report.database_url = DiagnosticsReport::env_indicator(config.url_is_set());
    report.database_name = DiagnosticsReport::env_indicator(config.name_is_set());
    report
}

pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(probe(&state.store, &state.config.database).await)
}
