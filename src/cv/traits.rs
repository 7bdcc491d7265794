//! Traits for the validate-then-generate pipeline.

use super::validation::ValidationErrors;
use super::{GeneratedDocument, GeneratorError};

/// Trait for validating request objects.
pub trait Validator {
    /// Check every constraint and report all violations at once.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Trait for document generators.
pub trait Generator<Req> {
    /// Generate a document from the request.
    fn generate(&self, request: Req) -> Result<GeneratedDocument, GeneratorError>;
}
