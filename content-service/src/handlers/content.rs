//! Listing endpoints.
//!
//! These always answer `200`: when the store cannot serve a listing the
//! body is `[]` and the reason only reaches the logs.

use crate::dtos::{
    BookListParams, BookResponse, LoreListParams, LoreResponse, PostListParams, PostResponse,
};
use crate::middleware::ValidatedQuery;
use crate::models::{Book, Lore, Post, Stored};
use crate::services::{fetch_recent, record_degraded, Fetched};
use crate::startup::AppState;
use axum::{extract::State, Json};
use bson::Document;

fn respond<T>(collection: &'static str, fetched: Fetched<T>) -> Json<Vec<T>> {
    if let Fetched::Unavailable(reason) = &fetched {
        tracing::warn!(collection = collection, reason = %reason, "Answering with an empty listing");
        record_degraded(collection);
    }
    Json(fetched.into_records())
}

pub async fn list_books(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<BookListParams>,
) -> Json<Vec<BookResponse>> {
    let fetched = fetch_recent(&state.store, Book::COLLECTION, params.filter(), params.limit).await;
    respond(Book::COLLECTION, fetched)
}

pub async fn list_lore(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<LoreListParams>,
) -> Json<Vec<LoreResponse>> {
    let fetched = fetch_recent(&state.store, Lore::COLLECTION, Document::new(), params.limit).await;
    respond(Lore::COLLECTION, fetched)
}

pub async fn list_posts(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PostListParams>,
) -> Json<Vec<PostResponse>> {
    let fetched = fetch_recent(&state.store, Post::COLLECTION, params.filter(), params.limit).await;
    respond(Post::COLLECTION, fetched)
}
