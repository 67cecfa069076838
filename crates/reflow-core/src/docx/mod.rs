//! WordprocessingML (.docx) output.
//!
//! A DOCX file is a ZIP archive of XML parts. Only the body varies between
//! documents; the content types, relationships, styles and property parts are
//! fixed.

mod document;
mod package;

use crate::config::DocxOptions;
use crate::error::ReflowError;
use crate::model::OutputBlock;

pub use package::DOCUMENT_PART;

/// Serialize blocks into a complete .docx archive.
///
/// Each paragraph becomes one single-run `w:p`; each page break becomes an
/// empty paragraph flagged `w:pageBreakBefore`, so the following paragraph
/// starts on a new page.
pub fn write_docx(blocks: &[OutputBlock], options: &DocxOptions) -> Result<Vec<u8>, ReflowError> {
    let document_xml = document::render(blocks, options)?;
    let bytes = package::build_package(&document_xml)?;
    tracing::debug!(
        "wrote docx: {} block(s), {} byte(s)",
        blocks.len(),
        bytes.len()
    );
    Ok(bytes)
}
