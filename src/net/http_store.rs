//! Browser document store over the REST document API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`StoreError::Unavailable`];
//! server rendering uses [`super::memory_store::MemoryStore`] instead.
//!
//! `GET {base}/{collection}/{id}` returns the document (404 when absent).
//! `PATCH {base}/{collection}/{id}` takes `{"updates": [FieldUpdate, ...]}`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_store_test.rs"]
mod http_store_test;

use serde_json::Value;

use super::store::{DocumentStore, FieldUpdate, StoreError};

#[derive(Clone, Debug)]
pub struct HttpStore {
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.base_url)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn update_body(updates: &[FieldUpdate]) -> Value {
    serde_json::json!({ "updates": updates })
}

#[async_trait::async_trait(?Send)]
impl DocumentStore for HttpStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.document_url(collection, id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if resp.status() == 404 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            let doc = resp
                .json::<Value>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            Ok(Some(doc))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, id);
            Err(StoreError::Unavailable)
        }
    }

    async fn update_document(&self, collection: &str, id: &str, updates: &[FieldUpdate]) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.document_url(collection, id);
            let resp = gloo_net::http::Request::patch(&url)
                .json(&update_body(updates))
                .map_err(|e| StoreError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            if resp.status() == 404 {
                return Err(StoreError::NotFound { collection: collection.to_owned(), id: id.to_owned() });
            }
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, id, updates);
            Err(StoreError::Unavailable)
        }
    }
}
