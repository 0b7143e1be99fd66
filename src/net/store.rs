//! Document store seam: get-by-id and update-by-id with array mutations.
//!
//! DESIGN
//! ======
//! The page only needs two primitives from the backing database, so the
//! trait stays that small. Documents cross the seam as `serde_json::Value`
//! and callers decode them into typed records; this keeps implementations
//! (HTTP in the browser, in-memory for tests and SSR) schema-agnostic.
//!
//! Futures are `?Send` because browser fetches are bound to the JS event
//! loop. Implementations themselves must be `Send + Sync` so they can be
//! shared through Leptos context.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("store responded with status {0}")]
    Status(u16),
    #[error("malformed store response: {0}")]
    Decode(String),
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },
    #[error("document store not available in this environment")]
    Unavailable,
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "E_STORE_REQUEST",
            Self::Status(_) => "E_STORE_STATUS",
            Self::Decode(_) => "E_STORE_DECODE",
            Self::NotFound { .. } => "E_STORE_NOT_FOUND",
            Self::Unavailable => "E_STORE_UNAVAILABLE",
        }
    }
}

/// A mutation applied to one field of a stored document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", content = "values", rename_all = "snake_case")]
pub enum FieldMutation {
    /// Remove every occurrence of each value from an array field.
    ArrayRemove(Vec<Value>),
    /// Append each value not already present in an array field.
    ArrayUnion(Vec<Value>),
}

/// A single field update: `{"field": ..., "op": ..., "values": [...]}` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldUpdate {
    pub field: String,
    #[serde(flatten)]
    pub mutation: FieldMutation,
}

impl FieldUpdate {
    pub fn array_remove(field: &str, value: impl Into<Value>) -> Self {
        Self { field: field.to_owned(), mutation: FieldMutation::ArrayRemove(vec![value.into()]) }
    }

    pub fn array_union(field: &str, value: impl Into<Value>) -> Self {
        Self { field: field.to_owned(), mutation: FieldMutation::ArrayUnion(vec![value.into()]) }
    }

    /// Apply this update to a document in place. A missing field is treated
    /// as an empty array; a non-array field is replaced.
    pub fn apply(&self, document: &mut Value) -> Result<(), StoreError> {
        let Value::Object(map) = document else {
            return Err(StoreError::Decode("document is not an object".to_owned()));
        };
        let slot = map
            .entry(self.field.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        if !slot.is_array() {
            *slot = Value::Array(Vec::new());
        }
        let Value::Array(items) = slot else {
            return Ok(());
        };
        match &self.mutation {
            FieldMutation::ArrayRemove(values) => items.retain(|item| !values.contains(item)),
            FieldMutation::ArrayUnion(values) => {
                for value in values {
                    if !items.contains(value) {
                        items.push(value.clone());
                    }
                }
            }
        }
        Ok(())
    }
}

/// Remote document database consumed by the group page.
#[async_trait::async_trait(?Send)]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document by key. Returns `Ok(None)` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store cannot be reached or replies
    /// with something other than a document or "absent".
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Apply field updates to an existing document.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the document is missing or the write is
    /// rejected.
    async fn update_document(&self, collection: &str, id: &str, updates: &[FieldUpdate]) -> Result<(), StoreError>;
}

/// Store handle shared through Leptos context.
pub type SharedStore = Arc<dyn DocumentStore>;
