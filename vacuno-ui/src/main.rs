//! Vacuno Web
//!
//! Livestock management app built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and self-registration
//! - Herd dashboard with counts, average weight and recent records
//! - Searchable, status-filtered cattle list with create and delete
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Screen logic lives in `vacuno::views`; the pages here bind those view
//! models to signals and talk to the API through a gloo-net transport.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
