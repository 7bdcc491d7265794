//! Document builder capability.
//!
//! Section rendering only talks to [`DocumentBuilder`]; the Word backend
//! ([`DocxBuilder`]) and the in-memory recorder ([`OutlineBuilder`]) both
//! implement it.

pub mod docx;
pub mod outline;

pub use docx::DocxBuilder;
pub use outline::{Block, OutlineBuilder};

use super::GeneratorError;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Heading level. `Title` is the document title, the others map to
/// "Heading 1" and "Heading 2".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Title,
    Section,
    Entry,
}

/// A span of text with uniform formatting.
///
/// A `'\n'` inside `text` is rendered as a line break within the paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }
}

/// A paragraph: runs plus alignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub alignment: Alignment,
}

impl Paragraph {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            alignment: Alignment::Left,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Concatenated run text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Visual style of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableStyle {
    /// Single-line borders around every cell.
    Grid,
    /// No borders, fixed column widths in inches.
    Layout { column_widths_in: Vec<f32> },
}

/// A table: rows of cells, each cell holding one paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<Paragraph>>,
    pub style: TableStyle,
}

impl Table {
    /// A grid table where every cell is plain text.
    pub fn grid<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| Paragraph::new(vec![TextRun::plain(cell)]))
                        .collect()
                })
                .collect(),
            style: TableStyle::Grid,
        }
    }
}

/// Minimal set of operations needed to assemble a CV document.
pub trait DocumentBuilder {
    /// Set the document-wide base font. Called once, before any content.
    fn set_default_font(&mut self, family: &str, size_pt: u32);

    fn add_heading(&mut self, text: &str, level: HeadingLevel, alignment: Alignment);

    fn add_paragraph(&mut self, paragraph: Paragraph);

    fn add_table(&mut self, table: Table);

    /// Serialize the accumulated document.
    fn finish(&mut self) -> Result<Vec<u8>, GeneratorError>;
}
