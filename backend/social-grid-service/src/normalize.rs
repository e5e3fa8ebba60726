//! Rendering of stored records as API JSON
//!
//! Store-native identifier and timestamp types never reach a response body:
//! `ObjectId`s become hex strings and datetimes become RFC 3339 strings, at
//! any nesting depth.

use bson::{Bson, Document};
use chrono::SecondsFormat;
use serde_json::{Map, Value};

pub fn normalize_document(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(field, value)| (field, normalize_bson(value)))
            .collect::<Map<String, Value>>(),
    )
}

pub fn normalize_documents(documents: Vec<Document>) -> Vec<Value> {
    documents.into_iter().map(normalize_document).collect()
}

pub fn normalize_bson(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(
            dt.to_chrono()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
        Bson::Document(document) => normalize_document(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(normalize_bson).collect()),
        other => other.into_relaxed_extjson(),
    }
}
