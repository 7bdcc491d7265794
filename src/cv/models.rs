//! Request types for CV generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of the work history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WorkExperience {
    pub position: String,
    pub company_name: String,
    pub location: String,
    /// Free text, may contain line breaks.
    pub responsibilities: String,
    /// Free-text range such as "2020-2023".
    pub period: String,
}

/// One entry of the education history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Education {
    pub institution: String,
    pub period_from: i64,
    pub period_to: i64,
    pub specialization: String,
    pub location: String,
    pub location_of_graduation: String,
}

/// Language skill ratings, each on a 2..=5 scale.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LanguageProficiency {
    pub language: String,
    #[schema(minimum = 2, maximum = 5)]
    pub writing: i64,
    #[schema(minimum = 2, maximum = 5)]
    pub speaking: i64,
    #[schema(minimum = 2, maximum = 5)]
    pub understanding: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Residency {
    pub city: String,
    pub country: String,
}

/// Current employment status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Employment {
    Looking,
    Employed,
    Freelance,
}

impl Employment {
    /// Wire value, e.g. `looking`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Employment::Looking => "looking",
            Employment::Employed => "employed",
            Employment::Freelance => "freelance",
        }
    }

    /// Display value with the first letter capitalized, e.g. `Looking`.
    pub fn label(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum HaveChildren {
    Yes,
    No,
}

impl HaveChildren {
    pub fn as_str(&self) -> &'static str {
        match self {
            HaveChildren::Yes => "Yes",
            HaveChildren::No => "No",
        }
    }
}

/// The resume record posted to `/generate-cv`.
///
/// Only `full_name`, `phone_number` and `email` are required; every other
/// field is independently optional.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CvRequest {
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub phone_number_2: Option<String>,
    #[schema(format = "email")]
    pub email: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub employment: Option<Employment>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub language_proficiency: Option<Vec<LanguageProficiency>>,
    #[serde(default)]
    pub marriage_status: Option<String>,
    #[serde(default)]
    pub have_children: Option<HaveChildren>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = "date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub residency: Option<Residency>,
    #[serde(default)]
    #[schema(minimum = 0)]
    pub age: Option<i64>,
    /// Height in centimeters.
    #[serde(default)]
    #[schema(minimum = 30)]
    pub height: Option<i64>,
    /// Weight in kilograms.
    #[serde(default)]
    #[schema(minimum = 2)]
    pub weight: Option<i64>,
}

impl CvRequest {
    /// A record carrying only the required fields.
    pub fn new(
        full_name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            phone_number: phone_number.into(),
            phone_number_2: None,
            email: email.into(),
            nationality: None,
            position: None,
            employment: None,
            location: None,
            skills: None,
            work_experience: None,
            education: None,
            language_proficiency: None,
            marriage_status: None,
            have_children: None,
            date_of_birth: None,
            place_of_birth: None,
            residency: None,
            age: None,
            height: None,
            weight: None,
        }
    }
}
