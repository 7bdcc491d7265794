use cv_generator_server::cv::models::{CvRequest, LanguageProficiency};
use cv_generator_server::cv::validation::{
    validate_email, validate_required, ValidationError, ValidationErrors,
};
use cv_generator_server::cv::Validator;

#[test]
fn test_validate_required_empty() {
    let mut errors = ValidationErrors::new();
    validate_required("   ", "full_name", "Full name", &mut errors);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].message, "Full name must not be empty");
}

#[test]
fn test_validate_email_reports_value() {
    let mut errors = ValidationErrors::new();
    validate_email("jane.example.com", "email", &mut errors);
    assert_eq!(errors.len(), 1);
    assert!(errors.to_string().contains("'jane.example.com' is not a valid email address"));
}

#[test]
fn test_errors_serialize_as_list() {
    let mut errors = ValidationErrors::new();
    errors.add(ValidationError::below_minimum("height", 30, 12));

    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "field": "height",
            "message": "must be greater than or equal to 30, got 12"
        }])
    );
}

#[test]
fn test_every_language_entry_checked() {
    let mut cv = CvRequest::new("Jane Doe", "1", "jane@example.com");
    let entry = |language: &str, rating: i64| LanguageProficiency {
        language: language.to_string(),
        writing: rating,
        speaking: rating,
        understanding: rating,
    };
    cv.language_proficiency = Some(vec![entry("English", 5), entry("French", 7)]);

    let errors = cv.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.errors().iter().all(|e| e.field.starts_with("language_proficiency[1].")));
}

#[test]
fn test_weight_and_height_boundaries() {
    let mut cv = CvRequest::new("Jane Doe", "1", "jane@example.com");
    cv.height = Some(30);
    cv.weight = Some(2);
    assert!(cv.validate().is_ok());

    cv.height = Some(29);
    cv.weight = Some(1);
    let errors = cv.validate().unwrap_err();
    assert!(errors.has_field("height"));
    assert!(errors.has_field("weight"));
}
