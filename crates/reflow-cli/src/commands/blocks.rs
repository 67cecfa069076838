use reflow_core::error::ReflowError;
use std::path::PathBuf;

use super::{decoder_for, resolve_options};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    config: Option<PathBuf>,
) -> Result<(), ReflowError> {
    let options = resolve_options(config)?;
    let decoder = decoder_for(&input_file)?;
    let bytes = std::fs::read(&input_file)?;
    tracing::debug!(
        "decoding {} with {}",
        input_file.display(),
        decoder.backend_name()
    );

    let blocks = reflow_core::extract_blocks(&bytes, decoder.as_ref(), &options)?;

    match output_format {
        "json" => output::json::print(&blocks)?,
        _ => output::text::print(&blocks),
    }

    Ok(())
}
