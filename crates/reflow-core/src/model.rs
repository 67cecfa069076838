use serde::{Deserialize, Serialize};

/// 12pt text, expressed in DOCX half-points.
pub const DEFAULT_FONT_SIZE_HALF_POINTS: u32 = 24;

/// One positioned run of decoded text extracted from a page.
///
/// Coordinates are kept in whatever space the decoder reports; nothing here
/// renormalizes them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub page_index: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl TextFragment {
    pub fn new(page_index: usize, x: f64, y: f64, text: impl Into<String>) -> Self {
        TextFragment {
            page_index,
            x,
            y,
            text: text.into(),
        }
    }
}

/// Fragments sharing a quantized vertical position, joined left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub key: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputBlock {
    Paragraph {
        text: String,
        font_size_half_points: u32,
    },
    PageBreak,
}

impl OutputBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        OutputBlock::Paragraph {
            text: text.into(),
            font_size_half_points: DEFAULT_FONT_SIZE_HALF_POINTS,
        }
    }

    pub fn is_page_break(&self) -> bool {
        matches!(self, OutputBlock::PageBreak)
    }

    /// Paragraph text, or `None` for a page break.
    pub fn text(&self) -> Option<&str> {
        match self {
            OutputBlock::Paragraph { text, .. } => Some(text),
            OutputBlock::PageBreak => None,
        }
    }
}
