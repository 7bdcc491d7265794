#![allow(dead_code)]

use cv_generator_server::cv::models::{
    CvRequest, Education, Employment, HaveChildren, LanguageProficiency, Residency, WorkExperience,
};
use serde_json::{json, Value};

/// Minimal valid JSON body.
pub fn minimal_json() -> Value {
    json!({
        "full_name": "Jane Doe",
        "phone_number": "+1 555 0100",
        "email": "jane@example.com"
    })
}

/// Minimal JSON body with one extra field set.
pub fn minimal_json_with(key: &str, value: Value) -> Value {
    let mut body = minimal_json();
    body[key] = value;
    body
}

pub fn engineer_job() -> WorkExperience {
    WorkExperience {
        position: "Engineer".to_string(),
        company_name: "Acme".to_string(),
        location: "Remote".to_string(),
        responsibilities: "Built things".to_string(),
        period: "2020-2023".to_string(),
    }
}

/// A record with every optional field populated.
pub fn full_request() -> CvRequest {
    let mut cv = CvRequest::new("Jane Doe", "+1 555 0100", "jane@example.com");
    cv.phone_number_2 = Some("+1 555 0101".to_string());
    cv.nationality = Some("Canadian".to_string());
    cv.position = Some("Software Engineer".to_string());
    cv.employment = Some(Employment::Employed);
    cv.location = Some("Toronto".to_string());
    cv.skills = Some(vec!["Rust".to_string(), "PostgreSQL".to_string()]);
    cv.work_experience = Some(vec![engineer_job()]);
    cv.education = Some(vec![Education {
        institution: "University of Waterloo".to_string(),
        period_from: 2012,
        period_to: 2016,
        specialization: "Computer Science".to_string(),
        location: "Waterloo".to_string(),
        location_of_graduation: "Waterloo".to_string(),
    }]);
    cv.language_proficiency = Some(vec![LanguageProficiency {
        language: "English".to_string(),
        writing: 5,
        speaking: 5,
        understanding: 5,
    }]);
    cv.marriage_status = Some("Married".to_string());
    cv.have_children = Some(HaveChildren::Yes);
    cv.date_of_birth = chrono::NaiveDate::from_ymd_opt(1994, 7, 2);
    cv.place_of_birth = Some("Ottawa".to_string());
    cv.residency = Some(Residency {
        city: "Toronto".to_string(),
        country: "Canada".to_string(),
    });
    cv.age = Some(30);
    cv.height = Some(172);
    cv.weight = Some(65);
    cv
}

/// Paragraph text of a `.docx` package, one line per paragraph.
pub fn docx_text(bytes: &[u8]) -> String {
    let docx = docx_rs::read_docx(bytes).expect("generated document should be readable");
    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = child {
            for child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in run.children {
                        match run_child {
                            docx_rs::RunChild::Text(t) => text.push_str(&t.text),
                            docx_rs::RunChild::Break(_) => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    text
}
