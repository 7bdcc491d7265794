//! Word (`.docx`) backend built on `docx-rs`.
//!
//! Blocks are collected as `docx-rs` elements and assembled into a package
//! only in `finish`, so the base font is always applied document-wide.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph as DocxParagraph, Run, RunFonts, Style, StyleType,
    Table as DocxTable, TableCell, TableRow, WidthType,
};

use super::{Alignment, DocumentBuilder, HeadingLevel, Paragraph, Table, TableStyle, TextRun};
use crate::cv::GeneratorError;

const TWIPS_PER_INCH: f32 = 1440.0;

enum BodyElement {
    Paragraph(DocxParagraph),
    Table(DocxTable),
}

/// Builds a Word document in memory.
#[derive(Default)]
pub struct DocxBuilder {
    default_font: Option<(String, u32)>,
    body: Vec<BodyElement>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

fn style_id(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::Title => "Title",
        HeadingLevel::Section => "Heading1",
        HeadingLevel::Entry => "Heading2",
    }
}

/// Paragraph styles referenced by headings. Sizes are in half-points.
fn heading_styles() -> Vec<Style> {
    vec![
        Style::new("Title", StyleType::Paragraph)
            .name("Title")
            .size(52)
            .color("17365D"),
        Style::new("Heading1", StyleType::Paragraph)
            .name("Heading 1")
            .size(28)
            .bold()
            .color("365F91"),
        Style::new("Heading2", StyleType::Paragraph)
            .name("Heading 2")
            .size(26)
            .bold()
            .color("4F81BD"),
    ]
}

fn to_twips(inches: f32) -> usize {
    (inches * TWIPS_PER_INCH).round() as usize
}

fn convert_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
    }
}

/// Split on `'\n'` so embedded newlines become real line breaks.
fn convert_run(run: &TextRun) -> Run {
    let mut out = Run::new();
    for (i, segment) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        if !segment.is_empty() {
            out = out.add_text(segment);
        }
    }
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    out
}

fn convert_paragraph(paragraph: &Paragraph) -> DocxParagraph {
    let mut out = DocxParagraph::new();
    for run in &paragraph.runs {
        out = out.add_run(convert_run(run));
    }
    if paragraph.alignment != Alignment::Left {
        out = out.align(convert_alignment(paragraph.alignment));
    }
    out
}

fn convert_table(table: &Table) -> DocxTable {
    let widths: Vec<usize> = match &table.style {
        TableStyle::Grid => Vec::new(),
        TableStyle::Layout { column_widths_in } => {
            column_widths_in.iter().copied().map(to_twips).collect()
        }
    };

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .enumerate()
                .map(|(i, paragraph)| {
                    let cell = TableCell::new().add_paragraph(convert_paragraph(paragraph));
                    match widths.get(i) {
                        Some(width) => cell.width(*width, WidthType::Dxa),
                        None => cell,
                    }
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    match &table.style {
        TableStyle::Grid => DocxTable::new(rows),
        TableStyle::Layout { .. } => DocxTable::new(rows).set_grid(widths).clear_all_border(),
    }
}

impl DocumentBuilder for DocxBuilder {
    fn set_default_font(&mut self, family: &str, size_pt: u32) {
        self.default_font = Some((family.to_string(), size_pt));
    }

    fn add_heading(&mut self, text: &str, level: HeadingLevel, alignment: Alignment) {
        let mut paragraph = DocxParagraph::new()
            .add_run(Run::new().add_text(text))
            .style(style_id(level));
        if alignment != Alignment::Left {
            paragraph = paragraph.align(convert_alignment(alignment));
        }
        self.body.push(BodyElement::Paragraph(paragraph));
    }

    fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body
            .push(BodyElement::Paragraph(convert_paragraph(&paragraph)));
    }

    fn add_table(&mut self, table: Table) {
        self.body.push(BodyElement::Table(convert_table(&table)));
    }

    fn finish(&mut self) -> Result<Vec<u8>, GeneratorError> {
        let mut docx = Docx::new();
        if let Some((family, size_pt)) = &self.default_font {
            docx = docx
                .default_fonts(
                    RunFonts::new()
                        .ascii(family.as_str())
                        .hi_ansi(family.as_str())
                        .east_asia(family.as_str())
                        .cs(family.as_str()),
                )
                .default_size(*size_pt as usize * 2);
        }
        for style in heading_styles() {
            docx = docx.add_style(style);
        }
        for element in self.body.drain(..) {
            docx = match element {
                BodyElement::Paragraph(p) => docx.add_paragraph(p),
                BodyElement::Table(t) => docx.add_table(t),
            };
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| GeneratorError::Render(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}
