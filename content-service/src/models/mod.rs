//! Write-side shapes of the stored collections.
//!
//! Records are authored outside this service; these types are the source of
//! truth for what a stored document holds and which collection it lives in.
pub mod book;
pub mod lore;
pub mod post;

pub use book::Book;
pub use lore::Lore;
pub use post::Post;

use bson::{DateTime, Document};
use serde::Serialize;
use service_core::error::AppError;

pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";

/// A shape persisted in its own collection, named after the lowercased model.
pub trait Stored: Serialize {
    const COLLECTION: &'static str;

    /// Builds the document as the authoring tool persists it, bookkeeping
    /// timestamps included.
    fn to_stored(&self, at: DateTime) -> Result<Document, AppError> {
        let mut document = bson::to_document(self).map_err(|e| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Failed to encode {} record: {}",
                Self::COLLECTION,
                e
            ))
        })?;
        document.insert(CREATED_AT, at);
        document.insert(UPDATED_AT, at);
        Ok(document)
    }
}
