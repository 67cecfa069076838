use crate::layout::lines::reconstruct;
use crate::model::{OutputBlock, TextFragment, DEFAULT_FONT_SIZE_HALF_POINTS};

/// Flatten pages of fragments into paragraphs separated by page breaks,
/// using the default 12pt font size.
pub fn assemble(pages: &[Vec<TextFragment>]) -> Vec<OutputBlock> {
    assemble_with_font_size(pages, DEFAULT_FONT_SIZE_HALF_POINTS)
}

/// Same as [`assemble`], with every paragraph carrying `font_size_half_points`.
///
/// One paragraph is emitted per reconstructed line. A page break follows every
/// page except the last, even when the page produced no paragraphs.
pub fn assemble_with_font_size(
    pages: &[Vec<TextFragment>],
    font_size_half_points: u32,
) -> Vec<OutputBlock> {
    let mut blocks = Vec::new();

    for (page_idx, page) in pages.iter().enumerate() {
        let lines = reconstruct(page);
        tracing::debug!(
            "page {}: {} fragment(s) -> {} line(s)",
            page_idx + 1,
            page.len(),
            lines.len()
        );

        blocks.extend(lines.into_iter().map(|line| OutputBlock::Paragraph {
            text: line.text,
            font_size_half_points,
        }));

        if page_idx + 1 < pages.len() {
            blocks.push(OutputBlock::PageBreak);
        }
    }

    blocks
}
