//! Batch submission: validate, upload, report.
//!
//! [`submit_batch`] drives one submission against any [`DocumentBackend`]
//! and writes its progress into the [`UploadStore`]. Everything it decides
//! (validation, payload layout, how a reply turns into log lines) lives in
//! plain functions so it can be checked without a browser.

use serde_json::Value;

use super::backend::{
    DocumentBackend, HttpReply, MultipartPayload, FILES_FIELD, JOB_NUMBER_FIELD,
    PROJECT_NAME_FIELD,
};
use crate::config::AppConfig;
use crate::state::{PickedFile, UploadStore};
use crate::types::{
    non_empty, AppError, AppResult, FileResult, FormContext, ProcessResponse, ValidationError,
};

/// Last line of every batch that reached the network stage.
pub const BATCH_FINISHED: &str = "--- Processing batch finished ---";

/// Detail used when an error response has no JSON body.
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error structure";

/// Placeholder for optional per-file fields the backend left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// A batch is already in flight; nothing was done.
    Busy,
    /// Input was rejected before any request was made.
    Rejected(ValidationError),
    /// The request failed or the reply could not be used.
    Failed(AppError),
    /// The backend accepted the batch.
    Completed(BatchReport),
}

/// Backend reply reduced to what the log shows.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchReport {
    /// Batch-level message, or the raw body when the backend sent none
    pub headline: String,
    /// Per-file outcomes, in backend order
    pub results: Vec<FileResult>,
}

impl BatchReport {
    /// Log lines for this report as `(message, is_error)` pairs.
    pub fn log_lines(&self) -> Vec<(String, bool)> {
        let mut lines = vec![(format!("Backend response: {}", self.headline), false)];

        for result in &self.results {
            lines.push((format!("File: {}", result.original_filename), false));
            match result.failure() {
                Some(error) => lines.push((
                    format!(
                        "  Error: {} - {}",
                        error,
                        result.details.as_deref().unwrap_or_default()
                    ),
                    true,
                )),
                None => {
                    lines.push((
                        format!(
                            "  Status: {}",
                            non_empty(&result.status).unwrap_or(NOT_AVAILABLE)
                        ),
                        false,
                    ));
                    lines.push((
                        format!("  Doc Type: {}", result.doc_type().unwrap_or(NOT_AVAILABLE)),
                        false,
                    ));
                    lines.push((
                        format!(
                            "  Saved to: {}",
                            non_empty(&result.saved_path).unwrap_or(NOT_AVAILABLE)
                        ),
                        false,
                    ));
                }
            }
        }

        lines
    }
}

/// Check that there is something to send and both context fields are filled.
pub fn validate<F>(context: &FormContext, files: &[F]) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::NoFiles);
    }
    if context.project_name.trim().is_empty() || context.job_number.trim().is_empty() {
        return Err(ValidationError::MissingContext);
    }
    Ok(())
}

/// Every file under the repeated `files` field, then the two context fields.
pub fn build_payload<F: PickedFile>(context: &FormContext, files: Vec<F>) -> MultipartPayload<F> {
    files
        .into_iter()
        .fold(MultipartPayload::new(), |payload, file| {
            payload.file(FILES_FIELD, file)
        })
        .text(PROJECT_NAME_FIELD, context.project_name.as_str())
        .text(JOB_NUMBER_FIELD, context.job_number.as_str())
}

/// Turn a raw reply into a report, or into the error to show.
pub fn interpret_reply(reply: &HttpReply) -> AppResult<BatchReport> {
    if !reply.is_success() {
        return Err(AppError::Http {
            status: reply.status,
            status_text: reply.status_text.clone(),
            detail: error_detail(&reply.body),
        });
    }

    let value: Value =
        serde_json::from_str(&reply.body).map_err(|e| AppError::Decode(e.to_string()))?;
    let response: ProcessResponse =
        serde_json::from_value(value.clone()).map_err(|e| AppError::Decode(e.to_string()))?;

    let headline = match non_empty(&response.message) {
        Some(message) => message.to_string(),
        None => value.to_string(),
    };

    Ok(BatchReport {
        headline,
        results: response.results.unwrap_or_default(),
    })
}

/// `detail` of an error body; empty when absent, placeholder when not JSON.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(Value::Null) | None => String::new(),
            // FastAPI validation errors carry a list here.
            Some(other) => other.to_string(),
        },
        Err(_) => UNKNOWN_ERROR_DETAIL.to_string(),
    }
}

/// Run one submission of the current selection.
///
/// Once validation passes, the batch always ends with [`BATCH_FINISHED`]
/// in the log and the processing flag cleared, whatever happened in between.
/// The selection is only cleared when the backend accepted the batch.
pub async fn submit_batch<B: DocumentBackend>(
    store: UploadStore<B::File>,
    backend: &B,
    config: &AppConfig,
) -> SubmitOutcome {
    if store.is_processing() {
        log::debug!("Submit ignored: a batch is already in flight");
        return SubmitOutcome::Busy;
    }

    let context = store.context();
    let files = store.files();

    if let Err(err) = validate(&context, &files) {
        log::warn!("Submit rejected: {}", err);
        store.append_log(err.to_string(), true);
        return SubmitOutcome::Rejected(err);
    }

    store.set_processing(true);
    store.clear_log();
    store.append_log(
        format!(
            "Starting processing for Project: {}, Job: {}",
            context.project_name, context.job_number
        ),
        false,
    );
    log::info!(
        "📤 Uploading {} file(s) for {} / {}",
        files.len(),
        context.project_name,
        context.job_number
    );

    let payload = build_payload(&context, files);
    let url = config.process_documents_url();

    let outcome = match send(backend, &url, &payload).await {
        Ok(report) => {
            for (message, is_error) in report.log_lines() {
                store.append_log(message, is_error);
            }
            store.reset_selection();
            SubmitOutcome::Completed(report)
        }
        Err(err) => {
            store.append_log(format!("Error submitting files: {}", err), true);
            log::error!("There was an error! {}", err);
            SubmitOutcome::Failed(err)
        }
    };

    store.append_log(BATCH_FINISHED, false);
    store.set_processing(false);
    log::debug!("Batch finished");

    outcome
}

async fn send<B: DocumentBackend>(
    backend: &B,
    url: &str,
    payload: &MultipartPayload<B::File>,
) -> AppResult<BatchReport> {
    let reply = backend.post_multipart(url, payload).await?;
    interpret_reply(&reply)
}
