use crate::decode::FragmentDecoder;
use crate::error::ReflowError;
use crate::model::TextFragment;
use serde::Deserialize;

/// Decoding backend for JSON documents produced by the pdf2json tool.
///
/// pdf2json reports each text item with `x`/`y` in its own page units and the
/// glyph run percent-encoded in `R[0].T`. Only the first run of an item is
/// used; items whose first run is missing or empty are skipped.
pub struct Pdf2JsonDecoder;

impl Pdf2JsonDecoder {
    pub fn new() -> Self {
        Pdf2JsonDecoder
    }
}

impl Default for Pdf2JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct Pdf2JsonRoot {
    #[serde(rename = "Pages")]
    pages: Option<Vec<Pdf2JsonPage>>,
    /// Older pdf2json releases nest everything under `formImage`.
    #[serde(rename = "formImage")]
    form_image: Option<Pdf2JsonFormImage>,
}

#[derive(Debug, Deserialize)]
struct Pdf2JsonFormImage {
    #[serde(rename = "Pages")]
    pages: Vec<Pdf2JsonPage>,
}

#[derive(Debug, Deserialize)]
struct Pdf2JsonPage {
    #[serde(rename = "Texts", default)]
    texts: Vec<Pdf2JsonText>,
}

#[derive(Debug, Deserialize)]
struct Pdf2JsonText {
    x: f64,
    y: f64,
    #[serde(rename = "R", default)]
    runs: Vec<Pdf2JsonRun>,
}

#[derive(Debug, Deserialize)]
struct Pdf2JsonRun {
    #[serde(rename = "T")]
    text: Option<String>,
}

impl FragmentDecoder for Pdf2JsonDecoder {
    fn decode_pages(&self, bytes: &[u8]) -> Result<Vec<Vec<TextFragment>>, ReflowError> {
        let root: Pdf2JsonRoot = serde_json::from_slice(bytes)?;

        let pages = match (root.pages, root.form_image) {
            (Some(pages), _) => pages,
            (None, Some(form_image)) => form_image.pages,
            (None, None) => {
                return Err(ReflowError::UnsupportedInput(
                    "JSON document has no pdf2json Pages array".into(),
                ))
            }
        };

        let mut out = Vec::with_capacity(pages.len());
        for (page_index, page) in pages.into_iter().enumerate() {
            let mut fragments = Vec::with_capacity(page.texts.len());
            for item in page.texts {
                let encoded = match item.runs.first().and_then(|r| r.text.as_deref()) {
                    Some(t) if !t.is_empty() => t,
                    _ => continue,
                };
                fragments.push(TextFragment {
                    page_index,
                    x: item.x,
                    y: item.y,
                    text: percent_decode(encoded)?,
                });
            }
            out.push(fragments);
        }

        tracing::debug!("pdf2json decoded {} page(s)", out.len());
        Ok(out)
    }

    fn backend_name(&self) -> &str {
        "pdf2json"
    }
}

/// Decode a percent-encoded glyph run. `+` is left as is.
///
/// Every `%` must start a two-digit hex escape; a stray `%` is an error rather
/// than literal text.
pub fn percent_decode(encoded: &str) -> Result<String, ReflowError> {
    let bytes = encoded.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|e| e.iter().all(u8::is_ascii_hexdigit)) {
                return Err(ReflowError::PercentDecode {
                    text: encoded.to_string(),
                    reason: format!("malformed escape at byte {i}"),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    urlencoding::decode(encoded)
        .map(|s| s.into_owned())
        .map_err(|e| ReflowError::PercentDecode {
            text: encoded.to_string(),
            reason: e.to_string(),
        })
}
