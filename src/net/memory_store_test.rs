use super::*;
use futures::executor::block_on;
use serde_json::json;

#[test]
fn get_missing_document_returns_none() {
    let store = MemoryStore::new();
    let doc = block_on(store.get_document("groups", "nope")).unwrap();
    assert!(doc.is_none());
}

#[test]
fn update_applies_mutation_and_records_call() {
    let store = MemoryStore::new();
    store.insert("groups", "g1", json!({ "members": ["u1", "u2"] }));

    block_on(store.update_document("groups", "g1", &[FieldUpdate::array_remove("members", "u2")])).unwrap();

    assert_eq!(store.document("groups", "g1").unwrap()["members"], json!(["u1"]));
    let calls = store.recorded_updates();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].collection, "groups");
    assert_eq!(calls[0].id, "g1");
    assert_eq!(calls[0].updates, vec![FieldUpdate::array_remove("members", "u2")]);
}

#[test]
fn update_of_missing_document_is_not_found() {
    let store = MemoryStore::new();
    let err = block_on(store.update_document("groups", "g1", &[FieldUpdate::array_union("members", "u1")]))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn failing_document_errors_on_read_and_write() {
    let store = MemoryStore::new();
    store.insert("users", "u1", json!({ "name": "Alice" }));
    store.fail_document("users", "u1");

    assert!(matches!(block_on(store.get_document("users", "u1")), Err(StoreError::Status(503))));
    assert!(matches!(
        block_on(store.update_document("users", "u1", &[FieldUpdate::array_union("tags", "x")])),
        Err(StoreError::Status(503))
    ));
    assert_eq!(store.document("users", "u1").unwrap(), json!({ "name": "Alice" }));
}
