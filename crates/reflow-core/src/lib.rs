pub mod config;
pub mod decode;
pub mod docx;
pub mod error;
pub mod layout;
pub mod model;

use config::ConvertOptions;
use decode::FragmentDecoder;
use error::ReflowError;
use model::OutputBlock;
use std::path::{Path, PathBuf};

/// Decode a document and rebuild its paragraph/page-break sequence.
pub fn extract_blocks(
    bytes: &[u8],
    decoder: &dyn FragmentDecoder,
    options: &ConvertOptions,
) -> Result<Vec<OutputBlock>, ReflowError> {
    let pages = decoder.decode_pages(bytes)?;
    tracing::info!(
        "{} decoded {} page(s) from {} byte(s)",
        decoder.backend_name(),
        pages.len(),
        bytes.len()
    );

    let blocks = layout::assemble_with_font_size(&pages, options.font_size_half_points);
    tracing::info!(
        "assembled {} paragraph(s) across {} page(s)",
        blocks.iter().filter(|b| !b.is_page_break()).count(),
        pages.len()
    );

    Ok(blocks)
}

/// Main API entry point: convert a PDF (or decoder-specific input) to DOCX bytes.
pub fn convert_pdf(
    bytes: &[u8],
    decoder: &dyn FragmentDecoder,
    options: &ConvertOptions,
) -> Result<Vec<u8>, ReflowError> {
    let blocks = extract_blocks(bytes, decoder, options)?;
    let docx = docx::write_docx(&blocks, &options.docx)?;
    tracing::info!("DOCX created: {} byte(s)", docx.len());
    Ok(docx)
}

/// Name of the DOCX produced for `input`: same path, `.docx` extension.
pub fn output_file_name(input: &Path) -> PathBuf {
    input.with_extension("docx")
}
