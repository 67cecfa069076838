use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReflowError {
    #[error("PDF decoding failed: {0}")]
    Decode(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("invalid percent-encoded text '{text}': {reason}")]
    PercentDecode { text: String, reason: String },

    #[error("unsupported input: {0}. Please provide a PDF file")]
    UnsupportedInput(String),

    #[error("failed to write DOCX: {0}")]
    Serialize(String),

    #[error("failed to load options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("invalid options: {0}")]
    OptionsInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
