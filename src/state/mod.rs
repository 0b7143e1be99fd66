//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `group`) so components depend on small
//! focused models.

pub mod auth;
pub mod group;
