//! Generator for CV Word documents.

use super::document::{DocumentBuilder, DocxBuilder};
use super::models::CvRequest;
use super::sections::render_document;
use super::traits::{Generator, Validator};
use super::validation::{
    validate_email, validate_min, validate_range, validate_required, ValidationErrors, MAX_RATING,
    MIN_AGE, MIN_HEIGHT_CM, MIN_RATING, MIN_WEIGHT_KG,
};
use super::{GeneratedDocument, GeneratorError};

impl Validator for CvRequest {
    /// Validate all input data and return every violation found.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validate_required(&self.full_name, "full_name", "Full name", &mut errors);
        validate_required(&self.phone_number, "phone_number", "Phone number", &mut errors);
        validate_email(&self.email, "email", &mut errors);

        validate_min(self.age, MIN_AGE, "age", &mut errors);
        validate_min(self.height, MIN_HEIGHT_CM, "height", &mut errors);
        validate_min(self.weight, MIN_WEIGHT_KG, "weight", &mut errors);

        for (i, lang) in self.language_proficiency.iter().flatten().enumerate() {
            for (name, value) in [
                ("writing", lang.writing),
                ("speaking", lang.speaking),
                ("understanding", lang.understanding),
            ] {
                validate_range(
                    value,
                    MIN_RATING,
                    MAX_RATING,
                    &format!("language_proficiency[{}].{}", i, name),
                    &mut errors,
                );
            }
        }

        errors.into_result()
    }
}

/// Attachment name: spaces in the full name become underscores.
pub fn attachment_filename(full_name: &str) -> String {
    format!("{}_CV.docx", full_name.replace(' ', "_"))
}

/// Validates a CV and renders it as a `.docx` package.
#[derive(Debug, Default, Clone, Copy)]
pub struct CvGenerator;

impl CvGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render an already validated CV into `builder` and serialize it.
    pub fn render_with(
        &self,
        request: &CvRequest,
        builder: &mut dyn DocumentBuilder,
    ) -> Result<Vec<u8>, GeneratorError> {
        render_document(request, builder);
        builder.finish()
    }
}

impl Generator<CvRequest> for CvGenerator {
    fn generate(&self, request: CvRequest) -> Result<GeneratedDocument, GeneratorError> {
        request.validate().map_err(GeneratorError::Validation)?;

        let bytes = self.render_with(&request, &mut DocxBuilder::new())?;
        log::info!(
            "Generated CV for '{}' ({} bytes)",
            request.full_name,
            bytes.len()
        );

        Ok(GeneratedDocument {
            filename: attachment_filename(&request.full_name),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::models::LanguageProficiency;

    #[test]
    fn test_attachment_filename() {
        assert_eq!(attachment_filename("Jane Doe"), "Jane_Doe_CV.docx");
        assert_eq!(attachment_filename("Mary  Ann Lee"), "Mary__Ann_Lee_CV.docx");
        assert_eq!(attachment_filename("Prince"), "Prince_CV.docx");
    }

    #[test]
    fn test_validate_minimal_ok() {
        let request = CvRequest::new("Jane Doe", "123", "jane@example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut request = CvRequest::new(" ", "", "not-an-email");
        request.age = Some(-1);
        request.language_proficiency = Some(vec![LanguageProficiency {
            language: "German".to_string(),
            writing: 1,
            speaking: 6,
            understanding: 3,
        }]);

        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.has_field("full_name"));
        assert!(errors.has_field("phone_number"));
        assert!(errors.has_field("email"));
        assert!(errors.has_field("age"));
        assert!(errors.has_field("language_proficiency[0].writing"));
        assert!(errors.has_field("language_proficiency[0].speaking"));
        assert!(!errors.has_field("language_proficiency[0].understanding"));
    }

    #[test]
    fn test_generate_rejects_invalid_before_rendering() {
        let request = CvRequest::new("Jane Doe", "123", "broken");
        let result = CvGenerator::new().generate(request);
        assert!(matches!(result, Err(GeneratorError::Validation(_))));
    }

    #[test]
    fn test_generate_names_attachment() {
        let request = CvRequest::new("Jane Doe", "123", "jane@example.com");
        let document = CvGenerator::new().generate(request).unwrap();
        assert_eq!(document.filename, "Jane_Doe_CV.docx");
        assert!(!document.bytes.is_empty());
    }
}
