//! HTTP transport to the document-processing backend.
//!
//! The submission controller only sees [`DocumentBackend`]: it hands over a
//! [`MultipartPayload`] and gets back the raw [`HttpReply`]. Interpreting the
//! status and body is the controller's job, so the browser transport stays
//! a thin wrapper around `FormData` and `gloo-net`.

use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::state::PickedFile;
use crate::types::{AppError, AppResult};

/// Multipart field carrying each uploaded file.
pub const FILES_FIELD: &str = "files";
/// Multipart field carrying the project name.
pub const PROJECT_NAME_FIELD: &str = "project_name_context";
/// Multipart field carrying the job number.
pub const JOB_NUMBER_FIELD: &str = "job_number_context";

/// One part of a multipart/form-data body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart<F> {
    /// A file, sent with its own name as the filename.
    File { field: &'static str, file: F },
    /// A plain string field.
    Text { field: &'static str, value: String },
}

/// Ordered multipart/form-data body, independent of the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<FormPart<F>>,
}

impl<F> Default for MultipartPayload<F> {
    fn default() -> Self {
        Self { parts: Vec::new() }
    }
}

impl<F: PickedFile> MultipartPayload<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, field: &'static str, file: F) -> Self {
        self.parts.push(FormPart::File { field, file });
        self
    }

    pub fn text(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            field,
            value: value.into(),
        });
        self
    }

    pub fn parts(&self) -> &[FormPart<F>] {
        &self.parts
    }

    /// Value of the first text field named `field`.
    pub fn text_value(&self, field: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { field: name, value } if *name == field => Some(value.as_str()),
            _ => None,
        })
    }

    /// Files sent under `field`, in order.
    pub fn files(&self, field: &str) -> Vec<&F> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                FormPart::File { field: name, file } if *name == field => Some(file),
                _ => None,
            })
            .collect()
    }
}

/// Status line and body of a backend response, not yet interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a multipart body and return the reply.
///
/// Errors are reserved for transport failures (request not sent, body not
/// readable); any HTTP status is a successful reply.
#[allow(async_fn_in_trait)]
pub trait DocumentBackend {
    /// File handle type the transport knows how to upload.
    type File: PickedFile;

    async fn post_multipart(
        &self,
        url: &str,
        payload: &MultipartPayload<Self::File>,
    ) -> AppResult<HttpReply>;
}

/// Browser transport: `FormData` body sent with `gloo-net` (fetch).
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooBackend;

impl GlooBackend {
    fn form_data(payload: &MultipartPayload<File>) -> AppResult<FormData> {
        let form_data = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;

        for part in payload.parts() {
            match part {
                FormPart::File { field, file } => form_data
                    .append_with_blob_and_filename(field, file, &file.name())
                    .map_err(|e| js_error("Failed to append file", e))?,
                FormPart::Text { field, value } => form_data
                    .append_with_str(field, value)
                    .map_err(|e| js_error("Failed to append field", e))?,
            }
        }

        Ok(form_data)
    }
}

impl DocumentBackend for GlooBackend {
    type File = File;

    async fn post_multipart(&self, url: &str, payload: &MultipartPayload<File>) -> AppResult<HttpReply> {
        let form_data = Self::form_data(payload)?;

        // The browser sets the multipart boundary header itself.
        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        Ok(HttpReply::new(status, status_text, body))
    }
}

fn js_error(context: &str, err: JsValue) -> AppError {
    AppError::Network(format!("{}: {:?}", context, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::MemoryFile;

    #[test]
    fn test_payload_order_and_lookup() {
        let payload = MultipartPayload::new()
            .file(FILES_FIELD, MemoryFile::pdf("a.pdf"))
            .file(FILES_FIELD, MemoryFile::pdf("b.pdf"))
            .text(PROJECT_NAME_FIELD, "Proj")
            .text(JOB_NUMBER_FIELD, "J1");

        assert_eq!(payload.parts().len(), 4);
        let names: Vec<String> = payload
            .files(FILES_FIELD)
            .into_iter()
            .map(PickedFile::file_name)
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
        assert_eq!(payload.text_value(PROJECT_NAME_FIELD), Some("Proj"));
        assert_eq!(payload.text_value(JOB_NUMBER_FIELD), Some("J1"));
        assert_eq!(payload.text_value("missing"), None);
    }

    #[test]
    fn test_reply_status_classes() {
        assert!(HttpReply::new(200, "OK", "{}").is_success());
        assert!(HttpReply::new(204, "No Content", "").is_success());
        assert!(!HttpReply::new(302, "Found", "").is_success());
        assert!(!HttpReply::new(422, "Unprocessable Entity", "{}").is_success());
        assert!(!HttpReply::new(500, "Internal Server Error", "").is_success());
    }
}
