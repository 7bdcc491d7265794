//! CV module - turns a resume record into a Word (`.docx`) document.
//!
//! The pipeline is strictly sequential:
//! - `validation` checks the decoded [`models::CvRequest`]
//! - `sections` appends the fixed section sequence to a [`document::DocumentBuilder`]
//! - `generator` packs the result and names the attachment
//! - `handlers` exposes it over HTTP

pub mod document;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod sections;
pub mod traits;
pub mod validation;

pub use document::{DocumentBuilder, DocxBuilder, OutlineBuilder};
pub use generator::{attachment_filename, CvGenerator};
pub use models::CvRequest;
pub use traits::{Generator, Validator};

use thiserror::Error;

use self::validation::ValidationErrors;

/// MIME type of the generated Word document.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Errors that can occur during CV generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid CV data: {0}")]
    Validation(ValidationErrors),
    #[error("failed to render document: {0}")]
    Render(String),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}
