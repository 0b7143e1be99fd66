//! Display-only access gating for group administration controls.
//!
//! These checks decide what the page renders. They are not enforcement; the
//! store applies its own rules to writes.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::{Group, User};

/// True when the current user created the group. An unresolved user never
/// administers anything.
pub fn is_group_admin(group: &Group, user: Option<&User>) -> bool {
    user.is_some_and(|u| u.uid == group.created_by)
}

/// True when `member_id` is the group's creator (shown with an admin badge).
pub fn is_creator(group: &Group, member_id: &str) -> bool {
    group.created_by == member_id
}

/// Remove controls are shown to the admin for every member except themselves.
pub fn can_remove_member(group: &Group, user: Option<&User>, member_id: &str) -> bool {
    is_group_admin(group, user) && !is_creator(group, member_id)
}
