//! Backend communication.
//!
//! # Services
//!
//! - [`backend`] - multipart transport to the document-processing backend
//! - [`submission`] - validation, upload and log reporting for one batch

pub mod backend;
pub mod submission;

pub use backend::*;
pub use submission::*;
