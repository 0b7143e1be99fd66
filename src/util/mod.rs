//! Pure helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ranking and access rules live here, free of signals and browser APIs, so
//! they can be unit tested directly.

pub mod access;
pub mod leaderboard;
