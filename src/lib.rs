//! # groupboard
//!
//! Leptos + WASM frontend for a group's contest leaderboard: group details,
//! member management for the group's creator, and members ranked by contest
//! rating.
//!
//! This crate contains the page, its components, view state, the
//! document-store seam with browser and in-memory implementations, and the
//! services that load and edit group membership.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(|| view! { <App/> });
}
