//! # studyportal
//!
//! Leptos + WASM single-page client for the course-management backend:
//! streams, topics, and topic submissions, with role-based views for
//! students and teachers.
//!
//! The session store (`state::auth`) owns the persisted token/profile
//! pair; the navigation guard (`guard`) gates every route transition
//! against the static route table (`routes`); `net` wraps the REST
//! backend.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: mounts the app over the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
