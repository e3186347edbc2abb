//! Roster Dashboard
//!
//! Student records front end built with Leptos (WASM).
//!
//! # Pages
//!
//! - `/` student table with view/edit/delete per row
//! - `/addstudent` new student form
//! - `/editstudent/:id` edit form for one student
//! - `/viewstudent/:id` read-only student card
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the student records API over HTTP; the base URL
//! can be overridden with the `roster_api_url` local storage key.

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
