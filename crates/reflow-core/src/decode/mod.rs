pub mod pdf2json;
pub mod pdftotext;

use crate::error::ReflowError;
use crate::model::TextFragment;

/// Trait for backends that turn a document into positioned text fragments.
pub trait FragmentDecoder: Send + Sync {
    /// Decode document bytes into one fragment list per page, in page order.
    ///
    /// Fragment text must already be fully decoded (no percent or entity
    /// escapes left). Pages without text are returned as empty lists.
    fn decode_pages(&self, bytes: &[u8]) -> Result<Vec<Vec<TextFragment>>, ReflowError>;

    /// Name of this decoding backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Check that `bytes` start with a `%PDF-` header, after optional leading
/// whitespace.
pub fn ensure_pdf(bytes: &[u8]) -> Result<(), ReflowError> {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    if bytes[start..].starts_with(b"%PDF-") {
        Ok(())
    } else {
        Err(ReflowError::UnsupportedInput(
            "missing %PDF- header".into(),
        ))
    }
}
