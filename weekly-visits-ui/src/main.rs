//! Weekly Visits Dashboard
//!
//! Browser frontend for the weekly visits panel, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. The panel logic
//! lives in the `weekly-visits` core crate; this crate supplies the DOM theme
//! watcher, the `gloo-net` fetcher and the canvas renderer.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
