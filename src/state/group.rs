//! Group-page state: the loaded group, its members, and dialog visibility.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `GroupPage` as a single `RwSignal`. Loads are asynchronous and
//! unguarded against route changes on the fetch side, so each load carries a
//! sequence number and results for a superseded load are dropped here.
//!
//! DESIGN
//! ======
//! Mutations are plain methods so the page's event handlers stay thin and
//! the state transitions are testable without a reactive runtime.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use crate::net::types::{Group, Member};
use crate::services::group::LoadedGroup;
use crate::util::leaderboard::{LeaderboardEntry, rank_members};

#[derive(Clone, Debug, Default)]
pub struct GroupPageState {
    /// Group id from the route.
    pub group_id: Option<String>,
    /// Loaded group; `None` while loading, after a failure, or when absent.
    pub group: Option<Group>,
    /// Resolved member projections.
    pub members: Vec<Member>,
    pub add_dialog_open: bool,
    pub loading: bool,
    /// Set when the last load found no group document.
    pub not_found: bool,
    /// Incremented on every load; results carrying an older value are stale.
    pub load_seq: u64,
}

impl GroupPageState {
    /// Reset for a new group id and return the sequence number for its load.
    pub fn begin_load(&mut self, group_id: Option<String>) -> u64 {
        self.load_seq += 1;
        self.group_id = group_id;
        self.group = None;
        self.members.clear();
        self.add_dialog_open = false;
        self.not_found = false;
        self.loading = self.group_id.is_some();
        self.load_seq
    }

    /// Whether `seq` still names the most recent load.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.load_seq
    }

    /// Apply a finished load. `None` means the group does not exist.
    /// Returns `false` if the result was stale and ignored.
    pub fn finish_load(&mut self, seq: u64, loaded: Option<LoadedGroup>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        match loaded {
            Some(LoadedGroup { group, members }) => {
                self.group = Some(group);
                self.members = members;
            }
            None => {
                self.group = None;
                self.members.clear();
                self.not_found = true;
            }
        }
        true
    }

    /// Record a failed load: state stays unset. Returns `false` if stale.
    pub fn fail_load(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Drop a member after the store accepted the removal.
    /// Returns `false` if no such member was shown.
    pub fn remove_member(&mut self, member_id: &str) -> bool {
        if let Some(group) = self.group.as_mut() {
            group.member_ids.retain(|id| id != member_id);
        }
        let before = self.members.len();
        self.members.retain(|m| m.id != member_id);
        self.members.len() != before
    }

    /// Append a newly added member and close the add dialog. No duplicate check.
    pub fn append_member(&mut self, member: Member) {
        if let Some(group) = self.group.as_mut() {
            group.member_ids.push(member.id.clone());
        }
        self.members.push(member);
        self.add_dialog_open = false;
    }

    pub fn open_add_dialog(&mut self) {
        self.add_dialog_open = true;
    }

    pub fn close_add_dialog(&mut self) {
        self.add_dialog_open = false;
    }

    /// Members ranked for the leaderboard.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        rank_members(&self.members)
    }
}
