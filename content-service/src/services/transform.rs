//! Stored record to public shape.

use crate::models::{CREATED_AT, UPDATED_AT};
use bson::{Bson, Document};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

pub const ID_FIELD: &str = "_id";
pub const PUBLIC_ID_FIELD: &str = "id";

/// Renders a stored identifier as text. Absent or null identifiers become
/// the empty string.
pub fn stringify_id(id: Option<Bson>) -> String {
    match id {
        None | Some(Bson::Null) | Some(Bson::Undefined) => String::new(),
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// Moves `_id` to a string `id`, drops the bookkeeping timestamps and keeps
/// every other field as stored. An absent or empty record maps to an empty
/// document.
pub fn to_public(record: Option<Document>) -> Document {
    let Some(mut record) = record.filter(|r| !r.is_empty()) else {
        return Document::new();
    };

    let id = record.remove(ID_FIELD);
    record.insert(PUBLIC_ID_FIELD, stringify_id(id));
    record.remove(CREATED_AT);
    record.remove(UPDATED_AT);
    record
}

/// Projects transformed records onto a response shape. Fails on the first
/// record that does not fit.
pub fn project<T: DeserializeOwned>(records: Vec<Document>) -> Result<Vec<T>, AppError> {
    records
        .into_iter()
        .map(|record| bson::from_document(to_public(Some(record))).map_err(AppError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::BookResponse;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn object_id_becomes_hex_string() {
        let oid = ObjectId::new();
        let public = to_public(Some(doc! {
            "_id": oid,
            "title": "The Ember Crown",
            "created_at": bson::DateTime::now(),
            "updated_at": bson::DateTime::now(),
        }));

        assert_eq!(public.get_str("id").unwrap(), oid.to_hex());
        assert!(!public.contains_key("_id"));
        assert!(!public.contains_key("created_at"));
        assert!(!public.contains_key("updated_at"));
    }

    #[test]
    fn other_fields_pass_through_unchanged() {
        let stored = doc! {
            "_id": "custom-id",
            "title": "The Drowned Coast",
            "tags": ["sea", "ruin"],
            "rating": 4.5,
            "extra": { "nested": true },
        };
        let public = to_public(Some(stored.clone()));

        assert_eq!(public.get_str("id").unwrap(), "custom-id");
        for key in ["title", "tags", "rating", "extra"] {
            assert_eq!(public.get(key), stored.get(key), "{}", key);
        }
        assert_eq!(public.len(), 5);
    }

    #[test]
    fn empty_or_absent_record_maps_to_empty_document() {
        assert!(to_public(None).is_empty());
        assert!(to_public(Some(Document::new())).is_empty());
    }

    #[test]
    fn missing_or_odd_identifiers_degrade_to_text() {
        assert_eq!(stringify_id(None), "");
        assert_eq!(stringify_id(Some(Bson::Null)), "");
        assert_eq!(stringify_id(Some(Bson::Int32(42))), "42");

        let public = to_public(Some(doc! { "title": "no id" }));
        assert_eq!(public.get_str("id").unwrap(), "");
    }

    #[test]
    fn project_applies_shape_defaults() {
        let books: Vec<BookResponse> = project(vec![doc! {
            "_id": "b1",
            "title": "The Ember Crown",
            "description": "A queen without a throne",
            "created_at": bson::DateTime::now(),
        }])
        .unwrap();

        assert_eq!(books[0].id, "b1");
        assert!(books[0].tags.is_empty());
        assert!(!books[0].featured);
    }

    #[test]
    fn project_rejects_records_missing_required_fields() {
        let result = project::<BookResponse>(vec![doc! { "_id": "b1" }]);
        assert!(result.is_err());
    }
}
