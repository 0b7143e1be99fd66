//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render parts of the group page from signals handed down by
//! `pages::group` and report user actions back through callbacks.

pub mod add_member_dialog;
pub mod avatar;
pub mod leaderboard_panel;
pub mod member_list;
