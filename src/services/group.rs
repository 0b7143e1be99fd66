//! Group service: load a group with its members, and edit membership.
//!
//! DESIGN
//! ======
//! Every operation is a short sequence of document-store calls with no local
//! caching. Member records for one load are fetched concurrently and joined
//! all-or-nothing: one missing or failing member fails the whole load, so a
//! caller never sees a partially resolved member list.
//!
//! ERROR HANDLING
//! ==============
//! Errors are returned, never logged here. Callers sit at the UI boundary and
//! decide how to report them.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::ErrorCode;
use crate::net::store::{DocumentStore, FieldUpdate, StoreError};
use crate::net::types::{Group, GroupRecord, Member, UserRecord};

/// Array field on group documents holding member user ids.
pub const MEMBERS_FIELD: &str = "members";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed {collection} document {id}: {source}")]
    Decode {
        collection: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("member not found: {0}")]
    MemberNotFound(String),
}

impl ErrorCode for GroupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(err) => err.error_code(),
            Self::Decode { .. } => "E_GROUP_DECODE",
            Self::MemberNotFound(_) => "E_MEMBER_NOT_FOUND",
        }
    }
}

/// A group together with its resolved member projections.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedGroup {
    pub group: Group,
    /// One entry per member id, in member-id order.
    pub members: Vec<Member>,
}

fn decode<T: DeserializeOwned>(collection: &str, id: &str, document: Value) -> Result<T, GroupError> {
    serde_json::from_value(document).map_err(|source| GroupError::Decode {
        collection: collection.to_owned(),
        id: id.to_owned(),
        source,
    })
}

// =============================================================================
// READS
// =============================================================================

/// Load a group and resolve all of its members.
///
/// Returns `Ok(None)` when the group document does not exist.
///
/// # Errors
///
/// Returns an error if any store call fails, any document is malformed, or
/// any member id has no user record.
pub async fn load_group(
    store: &dyn DocumentStore,
    config: &StoreConfig,
    group_id: &str,
) -> Result<Option<LoadedGroup>, GroupError> {
    let collection = &config.groups_collection;
    let Some(document) = store.get_document(collection, group_id).await? else {
        return Ok(None);
    };
    let record: GroupRecord = decode(collection, group_id, document)?;
    let group = Group::from_record(group_id, record);

    let members = try_join_all(
        group
            .member_ids
            .iter()
            .map(|member_id| fetch_member(store, config, member_id)),
    )
    .await?;

    Ok(Some(LoadedGroup { group, members }))
}

/// Fetch one user record and project it for display.
///
/// # Errors
///
/// Returns [`GroupError::MemberNotFound`] if the user record does not exist,
/// or a store/decode error.
pub async fn fetch_member(store: &dyn DocumentStore, config: &StoreConfig, member_id: &str) -> Result<Member, GroupError> {
    let collection = &config.users_collection;
    let document = store
        .get_document(collection, member_id)
        .await?
        .ok_or_else(|| GroupError::MemberNotFound(member_id.to_owned()))?;
    let record: UserRecord = decode(collection, member_id, document)?;
    Ok(Member::project(member_id, record))
}

// =============================================================================
// WRITES
// =============================================================================

/// Remove a member id from the group's member list with one array-remove write.
///
/// # Errors
///
/// Returns a store error if the write fails.
pub async fn remove_member(
    store: &dyn DocumentStore,
    config: &StoreConfig,
    group_id: &str,
    member_id: &str,
) -> Result<(), GroupError> {
    let update = FieldUpdate::array_remove(MEMBERS_FIELD, member_id);
    store
        .update_document(&config.groups_collection, group_id, &[update])
        .await?;
    Ok(())
}

/// Add an existing user to the group's member list with one array-union write.
///
/// # Errors
///
/// Returns [`GroupError::MemberNotFound`] if no user record exists for
/// `member_id`, or a store error if the lookup or write fails.
pub async fn add_member(
    store: &dyn DocumentStore,
    config: &StoreConfig,
    group_id: &str,
    member_id: &str,
) -> Result<(), GroupError> {
    if store
        .get_document(&config.users_collection, member_id)
        .await?
        .is_none()
    {
        return Err(GroupError::MemberNotFound(member_id.to_owned()));
    }
    let update = FieldUpdate::array_union(MEMBERS_FIELD, member_id);
    store
        .update_document(&config.groups_collection, group_id, &[update])
        .await?;
    Ok(())
}
