//! UI Components for the PO Wizard upload page.
//!
//! # Layout Components
//! - [`Header`] - Page title
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - Context fields, PDF picker and submit button
//! - [`FilePreviewList`] - Names of the selected files
//! - [`LogPanel`] - Processing log of the current batch

mod header;
mod footer;
mod upload_form;
mod preview;
mod logs;

pub use header::*;
pub use footer::*;
pub use upload_form::*;
pub use preview::*;
pub use logs::*;
