use super::*;
use crate::net::memory_store::MemoryStore;
use crate::net::store::StoreError;
use crate::net::types::{Group, Rating};
use futures::executor::block_on;
use serde_json::json;

fn loaded_group(id: &str, member_ids: &[&str]) -> LoadedGroup {
    LoadedGroup {
        group: Group {
            id: id.to_owned(),
            name: "Weekly grinders".to_owned(),
            description: String::new(),
            created_by: "owner".to_owned(),
            member_ids: member_ids.iter().map(|m| (*m).to_owned()).collect(),
        },
        members: member_ids
            .iter()
            .map(|m| Member {
                id: (*m).to_owned(),
                name: (*m).to_owned(),
                avatar: String::new(),
                rating: Rating::Unavailable,
            })
            .collect(),
    }
}

#[test]
fn apply_load_result_reports_member_count() {
    let mut page = GroupPageState::default();
    let seq = page.begin_load(Some("g1".to_owned()));
    let outcome = apply_load_result(&mut page, seq, Ok(Some(loaded_group("g1", &["a", "b"]))));
    assert_eq!(outcome, LoadOutcome::Loaded { members: 2 });
    assert_eq!(page.members.len(), 2);
}

#[test]
fn apply_load_result_absent_group_is_not_found() {
    let mut page = GroupPageState::default();
    let seq = page.begin_load(Some("g1".to_owned()));
    assert_eq!(apply_load_result(&mut page, seq, Ok(None)), LoadOutcome::NotFound);
    assert!(page.not_found);
}

#[test]
fn apply_load_result_failure_carries_error_code() {
    let mut page = GroupPageState::default();
    let seq = page.begin_load(Some("g1".to_owned()));
    let outcome = apply_load_result(&mut page, seq, Err(GroupError::Store(StoreError::Status(500))));
    assert_eq!(
        outcome,
        LoadOutcome::Failed {
            code: "E_STORE_STATUS",
            message: "store responded with status 500".to_owned(),
        }
    );
    assert!(page.group.is_none());
    assert!(!page.loading);
}

#[test]
fn apply_load_result_for_superseded_route_is_stale() {
    let mut page = GroupPageState::default();
    let old_seq = page.begin_load(Some("g-old".to_owned()));
    page.begin_load(Some("g-new".to_owned()));

    let outcome = apply_load_result(&mut page, old_seq, Ok(Some(loaded_group("g-old", &["a"]))));
    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(page.group.is_none());

    let outcome = apply_load_result(&mut page, old_seq, Err(GroupError::MemberNotFound("a".to_owned())));
    assert_eq!(outcome, LoadOutcome::Stale);
    assert!(page.loading);
}

#[test]
fn shows_group_matches_loaded_group_id() {
    let mut page = GroupPageState::default();
    assert!(!shows_group(&page, "g1"));
    let seq = page.begin_load(Some("g1".to_owned()));
    page.finish_load(seq, Some(loaded_group("g1", &[])));
    assert!(shows_group(&page, "g1"));
    assert!(!shows_group(&page, "g2"));
}

// =============================================================
// Membership edits against the store
// =============================================================

fn store_with_group() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(
        "groups",
        "g1",
        json!({ "name": "Weekly grinders", "createdBy": "a", "members": ["a", "b", "c"] }),
    );
    for id in ["a", "b", "c", "d"] {
        store.insert("users", id, json!({ "name": id.to_uppercase() }));
    }
    store
}

fn page_showing_g1(store: &MemoryStore) -> GroupPageState {
    let mut page = GroupPageState::default();
    let seq = page.begin_load(Some("g1".to_owned()));
    let result = block_on(group::load_group(store, &StoreConfig::default(), "g1"));
    assert_eq!(apply_load_result(&mut page, seq, result), LoadOutcome::Loaded { members: 3 });
    page
}

#[test]
fn remove_success_drops_member_locally() {
    let store = store_with_group();
    let mut page = page_showing_g1(&store);
    let result = block_on(group::remove_member(&store, &StoreConfig::default(), "g1", "b"));

    assert_eq!(apply_remove_result(&mut page, "g1", "b", result), EditOutcome::Applied);
    assert_eq!(page.members.len(), 2);
    assert!(page.members.iter().all(|m| m.id != "b"));
}

#[test]
fn remove_failure_keeps_every_member() {
    let store = store_with_group();
    let mut page = page_showing_g1(&store);
    store.fail_document("groups", "g1");
    let result = block_on(group::remove_member(&store, &StoreConfig::default(), "g1", "b"));

    let outcome = apply_remove_result(&mut page, "g1", "b", result);
    assert!(matches!(outcome, EditOutcome::Failed { code: "E_STORE_STATUS", .. }));
    assert_eq!(page.members.len(), 3);
    assert_eq!(page.group.as_ref().unwrap().member_ids, vec!["a", "b", "c"]);
}

#[test]
fn remove_result_for_other_group_is_ignored() {
    let store = store_with_group();
    let mut page = page_showing_g1(&store);

    let outcome = apply_remove_result(&mut page, "g-previous", "b", Ok(()));
    assert_eq!(outcome, EditOutcome::Stale);
    assert_eq!(page.members.len(), 3);
}

#[test]
fn member_fetch_success_appends_and_closes_dialog() {
    let store = store_with_group();
    let mut page = page_showing_g1(&store);
    page.open_add_dialog();
    let result = block_on(group::fetch_member(&store, &StoreConfig::default(), "d"));

    assert_eq!(apply_member_fetch_result(&mut page, "g1", result), EditOutcome::Applied);
    assert_eq!(page.members.len(), 4);
    assert_eq!(page.members[3].name, "D");
    assert!(!page.add_dialog_open);
}

#[test]
fn member_fetch_failure_leaves_dialog_open() {
    let store = store_with_group();
    let mut page = page_showing_g1(&store);
    page.open_add_dialog();
    store.fail_document("users", "d");
    let result = block_on(group::fetch_member(&store, &StoreConfig::default(), "d"));

    let outcome = apply_member_fetch_result(&mut page, "g1", result);
    assert!(matches!(outcome, EditOutcome::Failed { code: "E_STORE_STATUS", .. }));
    assert_eq!(page.members.len(), 3);
    assert!(page.add_dialog_open);
}

#[test]
fn member_fetch_for_other_group_is_ignored() {
    let store = store_with_group();
    let mut page = page_showing_g1(&store);
    page.open_add_dialog();
    let result = block_on(group::fetch_member(&store, &StoreConfig::default(), "d"));

    assert_eq!(apply_member_fetch_result(&mut page, "g-previous", result), EditOutcome::Stale);
    assert_eq!(page.members.len(), 3);
    assert!(page.add_dialog_open);
}
