//! QuickLink - Contact Us page
//!
//! The storefront's contact page: a form with client-side validation, a
//! static store map, and a scroll-triggered reveal animation, built with
//! Leptos and WebAssembly. Submissions never leave the page; there is no
//! backend behind the form.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
