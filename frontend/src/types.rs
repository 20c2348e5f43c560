//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Form Types** - context fields typed by the user
//! - **Log Types** - the on-screen processing log
//! - **API Types** - backend response structures
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::config::{DEFAULT_JOB_NUMBER, DEFAULT_PROJECT_NAME};

// =============================================================================
// Form Types
// =============================================================================

/// Free-text context sent along with every batch.
///
/// Both fields are forwarded verbatim; only non-emptiness is checked, and
/// only at submit time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormContext {
    /// Project the documents belong to
    pub project_name: String,
    /// Job number the documents are booked against
    pub job_number: String,
}

impl FormContext {
    pub fn new(project_name: impl Into<String>, job_number: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            job_number: job_number.into(),
        }
    }
}

impl Default for FormContext {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_NAME, DEFAULT_JOB_NUMBER)
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// A single line of the processing log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time (HH:MM:SS)
    pub timestamp: String,
    /// Human-readable message
    pub message: String,
    /// Set for failure lines. Carried for styling; rendering ignores it for now.
    pub is_error: bool,
}

impl LogEntry {
    /// Entry stamped with the current local time.
    pub fn now(message: impl Into<String>, is_error: bool) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
            is_error,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.timestamp, self.message)
    }
}

/// Ordered, append-only buffer of log lines for the current batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessingLog {
    entries: Vec<LogEntry>,
}

impl ProcessingLog {
    /// Append a line stamped with the current local time.
    pub fn append(&mut self, message: impl Into<String>, is_error: bool) {
        self.entries.push(LogEntry::now(message, is_error));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Messages without timestamps, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.message.as_str())
    }

    /// The whole log as displayed: one `<time>: <message>` line per entry.
    pub fn text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry))
            .collect()
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Success body of `POST /api/v1/process-documents/`.
///
/// Read leniently: an odd field in one result entry must not cost the
/// whole batch its report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Batch-level summary
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    /// One outcome per submitted file
    #[serde(default, deserialize_with = "lenient_results")]
    pub results: Option<Vec<FileResult>>,
}

/// Backend outcome for a single submitted file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    /// Name of the file as uploaded
    #[serde(default, deserialize_with = "lenient_name")]
    pub original_filename: String,
    /// Processing status (e.g. "saved")
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    /// Error kind, present when this file failed
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
    /// Free-text error details
    #[serde(default, deserialize_with = "lenient_string")]
    pub details: Option<String>,
    /// Where the backend stored the processed document
    #[serde(default, deserialize_with = "lenient_string")]
    pub saved_path: Option<String>,
    /// Fields extracted from the document
    #[serde(default, deserialize_with = "lenient_extracted")]
    pub extracted_data: Option<ExtractedData>,
}

impl FileResult {
    /// Result entry from arbitrary JSON; a non-object entry becomes the
    /// filename of an otherwise empty result.
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value(value.clone()) {
            Ok(result) => result,
            Err(_) => Self {
                original_filename: value_text(value).unwrap_or_default(),
                ..Self::default()
            },
        }
    }

    /// Error kind, if the backend flagged this file as failed.
    ///
    /// An empty error string counts as no error.
    pub fn failure(&self) -> Option<&str> {
        non_empty(&self.error)
    }

    pub fn doc_type(&self) -> Option<&str> {
        self.extracted_data
            .as_ref()
            .and_then(|data| non_empty(&data.doc_type))
    }
}

/// Subset of the extracted document data shown in the log.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    /// Detected document type (invoice, PO, ...)
    #[serde(default, deserialize_with = "lenient_string")]
    pub doc_type: Option<String>,
}

/// Null becomes `None`; numbers, objects and arrays keep their JSON text.
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_extracted<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ExtractedData>, D::Error> {
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

fn lenient_results<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<FileResult>>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(Some(entries.into_iter().map(FileResult::from_value).collect())),
        _ => Ok(None),
    }
}

/// `Some` only for present, non-empty strings.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// =============================================================================
// Error Types
// =============================================================================

/// Input problems caught before anything is sent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The file selection is empty.
    #[error("No files selected. Please select PDF files to process.")]
    NoFiles,
    /// Project name or job number is blank.
    #[error("Project Name and Job Number are required.")]
    MissingContext,
}

impl ValidationError {
    /// Text of the blocking alert shown to the user.
    pub fn alert_message(&self) -> &'static str {
        match self {
            ValidationError::NoFiles => "Please select files to process.",
            ValidationError::MissingContext => "Project Name and Job Number are required.",
        }
    }
}

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Invalid form input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request could not be built, sent, or read.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status.
    #[error("Network response was not ok: {status} {status_text}. {detail}")]
    Http {
        status: u16,
        status_text: String,
        detail: String,
    },

    /// Response body is not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
