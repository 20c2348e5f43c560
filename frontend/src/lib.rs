//! PO Wizard - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for sending film production PDFs (invoices, purchase
//! orders, ...) to the PO Wizard document-processing backend, tagged with a
//! project name and job number, and showing what the backend did with each
//! file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadForm ──── UploadStore (signals)                       │
//! │  ├── context fields, file picker, FilePreviewList            │
//! │  └── LogPanel                                                │
//! │        │                                                     │
//! │        └─ submit_batch ── DocumentBackend (GlooBackend)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend URL and UI constants
//! - [`types`] - Form, log and API types, errors
//! - [`state`] - Observable form state
//! - [`components`] - UI components
//! - [`services`] - Backend transport and batch submission

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    FormContext,
    // Logs
    LogEntry, ProcessingLog,
    // API
    ProcessResponse, FileResult, ExtractedData,
    // Errors
    AppError, AppResult, ValidationError,
};

// State
pub use state::{PickedFile, UploadStore};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic/console logging and mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::default();
    log::info!("🦀 PO Wizard - Starting Leptos App (backend: {})", config.backend_url);

    mount_to_body(move || view! { <App config=config/> });
}

#[component]
pub fn App(
    /// Backend configuration shared with every component
    #[prop(optional)]
    config: Option<AppConfig>,
) -> impl IntoView {
    provide_meta_context();
    provide_context(config.unwrap_or_default());

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="App">
            <Header/>
            <main class="App-main">
                <UploadForm/>
            </main>
            <Footer/>
        </div>
    }
}
