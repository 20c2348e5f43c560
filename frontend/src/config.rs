//! Application configuration.
//!
//! The backend base URL is the only setting. It defaults to a local
//! development server and can be overridden at build time, e.g.
//! `POWIZARD_BACKEND_URL=https://po.example.com trunk build --release`.

/// Backend base URL used when no override is compiled in.
///
/// The document-processing server started locally during development.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Path of the batch processing endpoint, relative to the backend base URL.
pub const PROCESS_DOCUMENTS_PATH: &str = "/api/v1/process-documents/";

/// Page title.
pub const APP_TITLE: &str = "PO Wizard - Film Edition (Web UI)";

/// Initial value of the project name field.
pub const DEFAULT_PROJECT_NAME: &str = "_MyFilmProject_YYYYMMDD";

/// Initial value of the job number field.
pub const DEFAULT_JOB_NUMBER: &str = "Job123";

/// File types offered by the file picker.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf";

/// Runtime configuration shared with the component tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the document-processing backend.
    pub backend_url: String,
}

impl AppConfig {
    /// Configuration pointing at an explicit backend.
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// Full URL of the batch processing endpoint.
    pub fn process_documents_url(&self) -> String {
        format!(
            "{}{}",
            self.backend_url.trim_end_matches('/'),
            PROCESS_DOCUMENTS_PATH
        )
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let backend_url = match option_env!("POWIZARD_BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => url.trim(),
            _ => DEFAULT_BACKEND_URL,
        };
        Self::with_backend_url(backend_url)
    }
}
