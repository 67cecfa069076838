pub mod blocks;
pub mod config;
pub mod convert;

use reflow_core::config::{load_options, ConvertOptions};
use reflow_core::decode::pdf2json::Pdf2JsonDecoder;
use reflow_core::decode::pdftotext::PdftotextDecoder;
use reflow_core::decode::FragmentDecoder;
use reflow_core::error::ReflowError;
use std::path::{Path, PathBuf};

/// Pick a decoder by extension: pdf2json output for `.json`, pdftotext otherwise.
///
/// Fails with `PdftotextNotFound` before any input is read when pdftotext is
/// needed but not installed.
pub fn decoder_for(input_file: &Path) -> Result<Box<dyn FragmentDecoder>, ReflowError> {
    let is_json = input_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Ok(Box::new(Pdf2JsonDecoder::new()))
    } else if PdftotextDecoder::is_available() {
        Ok(Box::new(PdftotextDecoder::new()))
    } else {
        Err(ReflowError::PdftotextNotFound)
    }
}

pub fn resolve_options(config: Option<PathBuf>) -> Result<ConvertOptions, ReflowError> {
    match config {
        Some(path) => load_options(&path),
        None => Ok(ConvertOptions::default()),
    }
}
