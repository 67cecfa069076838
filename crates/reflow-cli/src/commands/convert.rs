use reflow_core::error::ReflowError;
use std::path::PathBuf;

use super::{decoder_for, resolve_options};

pub fn run(
    input_file: PathBuf,
    output_file: Option<PathBuf>,
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

    let docx = reflow_core::convert_pdf(&bytes, decoder.as_ref(), &options)?;

    let out_path =
        output_file.unwrap_or_else(|| reflow_core::output_file_name(&input_file));
    std::fs::write(&out_path, &docx)?;
    eprintln!(
        "Converted {} -> {} ({} bytes)",
        input_file.display(),
        out_path.display(),
        docx.len()
    );

    Ok(())
}
