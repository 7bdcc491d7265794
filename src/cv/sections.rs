//! CV section layout.
//!
//! A document is the fixed, ordered [`SECTIONS`] table walked top to bottom.
//! Each entry pairs a presence predicate with a render function, so every
//! section can be exercised on its own.

use super::document::{Alignment, DocumentBuilder, HeadingLevel, Paragraph, Table, TableStyle, TextRun};
use super::models::CvRequest;

pub const BASE_FONT: &str = "Calibri";
pub const BASE_FONT_SIZE_PT: u32 = 11;
pub const SKILL_BULLET: &str = "\u{2022} ";
pub const PHOTO_PLACEHOLDER: &str = "Photo Placeholder";
pub const CONTACT_COLUMN_WIDTHS_IN: [f32; 2] = [4.5, 1.5];

/// One independently gated block of the document.
pub struct Section {
    pub name: &'static str,
    pub is_present: fn(&CvRequest) -> bool,
    pub render: fn(&CvRequest, &mut dyn DocumentBuilder),
}

pub const SECTIONS: &[Section] = &[
    Section {
        name: "Title",
        is_present: always,
        render: render_title,
    },
    Section {
        name: "Contact Information",
        is_present: always,
        render: render_contact,
    },
    Section {
        name: "Personal Information",
        is_present: has_personal_info,
        render: render_personal,
    },
    Section {
        name: "Professional Summary",
        is_present: has_position,
        render: render_professional,
    },
    Section {
        name: "Skills",
        is_present: has_skills,
        render: render_skills,
    },
    Section {
        name: "Education",
        is_present: has_education,
        render: render_education,
    },
    Section {
        name: "Language Proficiency",
        is_present: has_languages,
        render: render_languages,
    },
    Section {
        name: "Work Experience",
        is_present: has_work_experience,
        render: render_work_experience,
    },
];

/// Apply the base font and append every present section, in order.
pub fn render_document(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    builder.set_default_font(BASE_FONT, BASE_FONT_SIZE_PT);
    for section in SECTIONS {
        if (section.is_present)(cv) {
            log::debug!("rendering section {}", section.name);
            (section.render)(cv, builder);
        }
    }
}

fn non_empty<T>(items: &Option<Vec<T>>) -> bool {
    items.as_ref().is_some_and(|v| !v.is_empty())
}

fn always(_: &CvRequest) -> bool {
    true
}

/// Optional text that is absent, empty or blank yields `None`.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

pub fn has_personal_info(cv: &CvRequest) -> bool {
    filled(&cv.nationality).is_some()
        || cv.date_of_birth.is_some()
        || filled(&cv.place_of_birth).is_some()
        || cv.age.is_some()
        || filled(&cv.marriage_status).is_some()
        || cv.have_children.is_some()
        || cv.height.is_some()
        || cv.weight.is_some()
        || cv.residency.is_some()
}

pub fn has_position(cv: &CvRequest) -> bool {
    filled(&cv.position).is_some()
}

pub fn has_skills(cv: &CvRequest) -> bool {
    non_empty(&cv.skills)
}

pub fn has_education(cv: &CvRequest) -> bool {
    non_empty(&cv.education)
}

pub fn has_languages(cv: &CvRequest) -> bool {
    non_empty(&cv.language_proficiency)
}

pub fn has_work_experience(cv: &CvRequest) -> bool {
    non_empty(&cv.work_experience)
}

/// Bold lines separated by plain line breaks, no trailing break.
fn bold_lines(lines: Vec<String>) -> Paragraph {
    let mut runs = Vec::with_capacity(lines.len() * 2);
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            runs.push(TextRun::plain("\n"));
        }
        runs.push(TextRun::bold(line));
    }
    Paragraph::new(runs)
}

/// `(label, value)` pairs rendered as bold label then plain value, one per line.
fn labeled_lines(pairs: &[(&str, String)]) -> Vec<TextRun> {
    let mut runs = Vec::with_capacity(pairs.len() * 2);
    for (i, (label, value)) in pairs.iter().enumerate() {
        runs.push(TextRun::bold(format!("{}: ", label)));
        if i + 1 < pairs.len() {
            runs.push(TextRun::plain(format!("{}\n", value)));
        } else {
            runs.push(TextRun::plain(value.clone()));
        }
    }
    runs
}

pub fn render_title(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    builder.add_heading(&cv.full_name, HeadingLevel::Title, Alignment::Center);
}

pub fn render_contact(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    builder.add_heading("Contact Information", HeadingLevel::Section, Alignment::Left);

    let mut lines = vec![format!("Phone: {}", cv.phone_number)];
    if let Some(phone) = filled(&cv.phone_number_2) {
        lines.push(format!("Secondary Phone: {}", phone));
    }
    lines.push(format!("Email: {}", cv.email));
    if let Some(location) = filled(&cv.location) {
        lines.push(format!("Location: {}", location));
    }

    let photo = Paragraph::new(vec![TextRun::italic(PHOTO_PLACEHOLDER)]).centered();
    builder.add_table(Table {
        rows: vec![vec![bold_lines(lines), photo]],
        style: TableStyle::Layout {
            column_widths_in: CONTACT_COLUMN_WIDTHS_IN.to_vec(),
        },
    });
    builder.add_paragraph(Paragraph::empty());
}

/// Personal information lines in display order; absent fields are skipped.
pub fn personal_lines(cv: &CvRequest) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(nationality) = filled(&cv.nationality) {
        lines.push(format!("Nationality: {}", nationality));
    }
    if let Some(dob) = &cv.date_of_birth {
        lines.push(format!("Date of Birth: {}", dob));
    }
    if let Some(place) = filled(&cv.place_of_birth) {
        lines.push(format!("Place of Birth: {}", place));
    }
    if let Some(age) = cv.age {
        lines.push(format!("Age: {}", age));
    }
    if let Some(status) = filled(&cv.marriage_status) {
        lines.push(format!("Marriage Status: {}", status));
    }
    if let Some(children) = cv.have_children {
        lines.push(format!("Have Children: {}", children.as_str()));
    }
    if let Some(height) = cv.height {
        lines.push(format!("Height: {} cm", height));
    }
    if let Some(weight) = cv.weight {
        lines.push(format!("Weight: {} kg", weight));
    }
    if let Some(residency) = &cv.residency {
        lines.push(format!("Residency: {}, {}", residency.city, residency.country));
    }
    lines
}

pub fn render_personal(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    builder.add_heading("Personal Information", HeadingLevel::Section, Alignment::Left);
    builder.add_paragraph(bold_lines(personal_lines(cv)));
}

pub fn render_professional(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    let Some(position) = filled(&cv.position) else {
        return;
    };
    builder.add_heading("Professional Summary", HeadingLevel::Section, Alignment::Left);

    let mut lines = vec![format!("Position: {}", position)];
    if let Some(employment) = cv.employment {
        lines.push(format!("Employment Status: {}", employment.label()));
    }
    builder.add_paragraph(bold_lines(lines));
}

pub fn render_skills(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    let Some(skills) = cv.skills.as_ref().filter(|s| !s.is_empty()) else {
        return;
    };
    builder.add_heading("Skills", HeadingLevel::Section, Alignment::Left);

    let runs = skills
        .iter()
        .map(|skill| TextRun::plain(format!("{}{}\n", SKILL_BULLET, skill)))
        .collect();
    builder.add_paragraph(Paragraph::new(runs));
}

pub fn render_education(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    let Some(education) = cv.education.as_ref().filter(|e| !e.is_empty()) else {
        return;
    };
    builder.add_heading("Education", HeadingLevel::Section, Alignment::Left);

    for entry in education {
        builder.add_heading(&entry.institution, HeadingLevel::Entry, Alignment::Left);
        builder.add_paragraph(Paragraph::new(labeled_lines(&[
            ("Specialization", entry.specialization.clone()),
            ("Period", format!("{} - {}", entry.period_from, entry.period_to)),
            ("Location", entry.location.clone()),
            ("Location of Graduation", entry.location_of_graduation.clone()),
        ])));
        builder.add_paragraph(Paragraph::empty());
    }
}

pub fn render_languages(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    let Some(languages) = cv.language_proficiency.as_ref().filter(|l| !l.is_empty()) else {
        return;
    };
    builder.add_heading("Language Proficiency", HeadingLevel::Section, Alignment::Left);

    let header = ["Language", "Writing", "Speaking", "Understanding"]
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    let rows = std::iter::once(header).chain(languages.iter().map(|lang| {
        vec![
            lang.language.clone(),
            lang.writing.to_string(),
            lang.speaking.to_string(),
            lang.understanding.to_string(),
        ]
    }));
    builder.add_table(Table::grid(rows));
}

pub fn render_work_experience(cv: &CvRequest, builder: &mut dyn DocumentBuilder) {
    let Some(jobs) = cv.work_experience.as_ref().filter(|w| !w.is_empty()) else {
        return;
    };
    builder.add_heading("Work Experience", HeadingLevel::Section, Alignment::Left);

    for job in jobs {
        builder.add_heading(
            &format!("{} at {}", job.position, job.company_name),
            HeadingLevel::Entry,
            Alignment::Left,
        );
        let mut runs = labeled_lines(&[
            ("Location", job.location.clone()),
            ("Period", format!("{}\n", job.period)),
        ]);
        runs.push(TextRun::bold("Responsibilities:\n"));
        runs.push(TextRun::plain(job.responsibilities.clone()));
        builder.add_paragraph(Paragraph::new(runs));
        builder.add_paragraph(Paragraph::empty());
    }
}
