//! Networking modules for the document store and identity endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` defines the document-store seam, `http_store` and `memory_store`
//! implement it, `api` talks to the auth endpoints, and `types` defines the
//! stored document schemas and their view projections.

pub mod api;
pub mod http_store;
pub mod memory_store;
pub mod store;
pub mod types;
