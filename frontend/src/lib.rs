//! AI Resume Scorer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend where candidates apply for open positions and
//! follow up on their applications.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /       Hero, Features, CallToAction                        │
//! │  /apply  ApplicationForm (draft form or success card)        │
//! │  /track  TrackApplication                                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser résumé handle and notices
//! - [`components`] - UI components (Header, ApplicationForm, etc.)
//! - [`services`] - Intake service communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{BrowserResume, Notice, NoticeLevel};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=Home/>
                    <Route path="/apply" view=ApplyPage/>
                    <Route path="/track" view=TrackPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <Hero/>
        <Features/>
        <CallToAction/>
    }
}

#[component]
fn ApplyPage() -> impl IntoView {
    view! {
        <Title text=format!("Apply - {}", APP_NAME)/>
        <A href="/" class="back-link">"← Back to Home"</A>
        <ApplicationForm/>
    }
}

#[component]
fn TrackPage() -> impl IntoView {
    view! {
        <Title text=format!("Track Application - {}", APP_NAME)/>
        <TrackApplication/>
    }
}
