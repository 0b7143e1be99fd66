//! Async operations over the document store.
//!
//! ARCHITECTURE
//! ============
//! Service functions own store access and record decoding so pages and
//! components only deal with view types and error reporting.

pub mod group;
