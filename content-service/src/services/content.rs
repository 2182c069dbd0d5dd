//! Recency listings over a content collection.

use super::database::{SortDirection, StoreHandle};
use super::transform::project;
use crate::models::CREATED_AT;
use bson::Document;
use serde::de::DeserializeOwned;

/// Outcome of reading a listing. Both variants are successful answers:
/// `Unavailable` carries why the list is empty so it can be logged.
#[derive(Debug)]
pub enum Fetched<T> {
    Records(Vec<T>),
    Unavailable(String),
}

impl<T> Fetched<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Fetched::Unavailable(_))
    }

    pub fn into_records(self) -> Vec<T> {
        match self {
            Fetched::Records(records) => records,
            Fetched::Unavailable(_) => Vec::new(),
        }
    }
}

/// Reads at most `limit` records of `collection` matching `filter`, newest
/// first, projected onto `T`. Never fails: a missing store, a failed query
/// or a record that does not fit `T` all yield `Fetched::Unavailable`.
pub async fn fetch_recent<T: DeserializeOwned>(
    store: &StoreHandle,
    collection: &str,
    filter: Document,
    limit: i64,
) -> Fetched<T> {
    let Some(handle) = store.collection(collection) else {
        return Fetched::Unavailable("document store not initialized".to_string());
    };

    let records = match handle
        .find(filter)
        .sort(CREATED_AT, SortDirection::Descending)
        .limit(limit)
        .fetch()
        .await
    {
        Ok(records) => records,
        Err(e) => return Fetched::Unavailable(e.to_string()),
    };

    match project::<T>(records) {
        Ok(records) => Fetched::Records(records),
        Err(e) => Fetched::Unavailable(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::LoreResponse;
    use crate::services::MemoryStore;
    use bson::doc;
    use std::sync::Arc;

    #[tokio::test]
    async fn disabled_store_is_unavailable() {
        let fetched: Fetched<LoreResponse> =
            fetch_recent(&StoreHandle::Disabled, "lore", doc! {}, 6).await;
        assert!(fetched.is_unavailable());
        assert!(fetched.into_records().is_empty());
    }

    #[tokio::test]
    async fn failing_store_is_unavailable() {
        let store = Arc::new(MemoryStore::new("site"));
        store.fail_with("connection reset by peer").await;
        let handle = StoreHandle::Ready(store);

        let fetched: Fetched<LoreResponse> = fetch_recent(&handle, "lore", doc! {}, 6).await;
        match fetched {
            Fetched::Unavailable(reason) => assert!(reason.contains("connection reset")),
            Fetched::Records(_) => panic!("expected an unavailable listing"),
        }
    }

    #[tokio::test]
    async fn malformed_record_degrades_the_whole_listing() {
        let store = MemoryStore::new("site");
        store
            .insert("lore", doc! { "title": "ok", "content": "fine" })
            .await;
        store.insert("lore", doc! { "title": "no content" }).await;
        let handle = StoreHandle::ready(store);

        let fetched: Fetched<LoreResponse> = fetch_recent(&handle, "lore", doc! {}, 6).await;
        assert!(fetched.is_unavailable());
    }
}
