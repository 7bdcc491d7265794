//! In-memory document recorder.
//!
//! Keeps the exact block sequence a renderer produced, so layout can be
//! asserted without unpacking a `.docx` archive. `finish` serializes the
//! outline as plain UTF-8 text.

use super::{Alignment, DocumentBuilder, HeadingLevel, Paragraph, Table};
use crate::cv::GeneratorError;

/// One recorded document element.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading {
        text: String,
        level: HeadingLevel,
        alignment: Alignment,
    },
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OutlineBuilder {
    default_font: Option<(String, u32)>,
    blocks: Vec<Block>,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_font(&self) -> Option<(&str, u32)> {
        self.default_font
            .as_ref()
            .map(|(family, size)| (family.as_str(), *size))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Text of every heading, in document order.
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Headings of the given level only.
    pub fn headings_at(&self, wanted: HeadingLevel) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { text, level, .. } if *level == wanted => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every visible text line: headings, paragraph lines split on line
    /// breaks, and table rows joined with `" | "`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Heading { text, .. } => lines.push(text.clone()),
                Block::Paragraph(p) => lines.extend(p.text().lines().map(str::to_string)),
                Block::Table(t) => {
                    for row in &t.rows {
                        let cells: Vec<String> = row.iter().map(Paragraph::text).collect();
                        lines.push(cells.join(" | "));
                    }
                }
            }
        }
        lines
    }
}

impl DocumentBuilder for OutlineBuilder {
    fn set_default_font(&mut self, family: &str, size_pt: u32) {
        self.default_font = Some((family.to_string(), size_pt));
    }

    fn add_heading(&mut self, text: &str, level: HeadingLevel, alignment: Alignment) {
        self.blocks.push(Block::Heading {
            text: text.to_string(),
            level,
            alignment,
        });
    }

    fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    fn finish(&mut self) -> Result<Vec<u8>, GeneratorError> {
        let mut text = self.lines().join("\n");
        text.push('\n');
        Ok(text.into_bytes())
    }
}
