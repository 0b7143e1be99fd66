//! In-process document store.
//!
//! Backs server-side rendering (where no browser fetch exists) and the unit
//! tests. Every update call is recorded so tests can assert on exactly what
//! was written.

#[cfg(test)]
#[path = "memory_store_test.rs"]
mod memory_store_test;

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use super::store::{DocumentStore, FieldUpdate, StoreError};

type DocKey = (String, String);

/// An update call as received by the store, whether or not it succeeded.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedUpdate {
    pub collection: String,
    pub id: String,
    pub updates: Vec<FieldUpdate>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<DocKey, Value>>,
    updates: Mutex<Vec<RecordedUpdate>>,
    failing: Mutex<HashSet<DocKey>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(collection: &str, id: &str) -> DocKey {
    (collection.to_owned(), id.to_owned())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub fn insert(&self, collection: &str, id: &str, document: Value) {
        lock(&self.documents).insert(key(collection, id), document);
    }

    /// Current contents of a document, if present.
    pub fn document(&self, collection: &str, id: &str) -> Option<Value> {
        lock(&self.documents).get(&key(collection, id)).cloned()
    }

    /// Make every read and write of one document fail with a 503.
    pub fn fail_document(&self, collection: &str, id: &str) {
        lock(&self.failing).insert(key(collection, id));
    }

    /// Update calls received so far, in order.
    pub fn recorded_updates(&self) -> Vec<RecordedUpdate> {
        lock(&self.updates).clone()
    }

    fn check_failing(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if lock(&self.failing).contains(&key(collection, id)) {
            return Err(StoreError::Status(503));
        }
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        self.check_failing(collection, id)?;
        Ok(self.document(collection, id))
    }

    async fn update_document(&self, collection: &str, id: &str, updates: &[FieldUpdate]) -> Result<(), StoreError> {
        lock(&self.updates).push(RecordedUpdate {
            collection: collection.to_owned(),
            id: id.to_owned(),
            updates: updates.to_vec(),
        });
        self.check_failing(collection, id)?;

        let mut documents = lock(&self.documents);
        let Some(document) = documents.get_mut(&key(collection, id)) else {
            return Err(StoreError::NotFound { collection: collection.to_owned(), id: id.to_owned() });
        };
        // Apply to a scratch copy so a failed update leaves the document untouched.
        let mut next = document.clone();
        for update in updates {
            update.apply(&mut next)?;
        }
        *document = next;
        Ok(())
    }
}
