//! Input validation for CV requests.
//!
//! Serde already enforces presence, types and the closed enumerations; the
//! checks here cover what a type cannot express (blank text, email syntax,
//! numeric ranges). All violations are collected so the caller can fix the
//! whole record in one round trip.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"
    )
    .unwrap();
}

pub const MIN_AGE: i64 = 0;
pub const MIN_HEIGHT_CM: i64 = 30;
pub const MIN_WEIGHT_KG: i64 = 2;
pub const MIN_RATING: i64 = 2;
pub const MAX_RATING: i64 = 5;

/// Validation error for a single field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ValidationError {
    /// Path of the offending field, e.g. `language_proficiency[0].writing`
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must not be empty", label))
            .with_suggestion(format!("Provide a value for {}", label.to_lowercase()))
    }

    pub fn invalid_email(field: &str, value: &str) -> Self {
        Self::new(field, format!("'{}' is not a valid email address", value))
            .with_suggestion("Use the form name@example.com")
    }

    pub fn below_minimum(field: &str, min: i64, actual: i64) -> Self {
        Self::new(
            field,
            format!("must be greater than or equal to {}, got {}", min, actual),
        )
    }

    pub fn out_of_range(field: &str, min: i64, max: i64, actual: i64) -> Self {
        Self::new(
            field,
            format!("must be between {} and {}, got {}", min, max, actual),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// True if any error was reported for exactly `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Ok if no errors were collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate email address syntax
pub fn validate_email(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "Email"));
        return;
    }

    if !EMAIL_RE.is_match(trimmed) {
        errors.add(ValidationError::invalid_email(field, trimmed));
    }
}

/// Validate an optional integer against an inclusive lower bound
pub fn validate_min(value: Option<i64>, min: i64, field: &str, errors: &mut ValidationErrors) {
    if let Some(actual) = value {
        if actual < min {
            errors.add(ValidationError::below_minimum(field, min, actual));
        }
    }
}

/// Validate an integer against an inclusive range
pub fn validate_range(value: i64, min: i64, max: i64, field: &str, errors: &mut ValidationErrors) {
    if !(min..=max).contains(&value) {
        errors.add(ValidationError::out_of_range(field, min, max, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_common_forms() {
        for email in ["jane@example.com", "j.doe+cv@mail.example.co.uk", "a_b@x-y.org"] {
            let mut errors = ValidationErrors::new();
            validate_email(email, "email", &mut errors);
            assert!(errors.is_empty(), "{} should be valid", email);
        }
    }

    #[test]
    fn test_email_rejects_malformed() {
        for email in ["plainaddress", "@example.com", "jane@", "jane@example", "jane doe@example.com"] {
            let mut errors = ValidationErrors::new();
            validate_email(email, "email", &mut errors);
            assert_eq!(errors.len(), 1, "{} should be invalid", email);
        }
    }

    #[test]
    fn test_range_boundaries_inclusive() {
        let mut errors = ValidationErrors::new();
        validate_range(2, MIN_RATING, MAX_RATING, "w", &mut errors);
        validate_range(5, MIN_RATING, MAX_RATING, "w", &mut errors);
        assert!(errors.is_empty());

        validate_range(1, MIN_RATING, MAX_RATING, "w", &mut errors);
        validate_range(6, MIN_RATING, MAX_RATING, "w", &mut errors);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_min_skips_absent_value() {
        let mut errors = ValidationErrors::new();
        validate_min(None, MIN_HEIGHT_CM, "height", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display_lists_every_error() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::empty_field("full_name", "Full name"));
        errors.add(ValidationError::below_minimum("age", 0, -1));

        let msg = errors.to_string();
        assert!(msg.starts_with("2 validation error(s)"));
        assert!(msg.contains("[full_name] Full name must not be empty"));
        assert!(msg.contains("[age] must be greater than or equal to 0, got -1"));
    }
}
