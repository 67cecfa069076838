use crate::decode::{ensure_pdf, FragmentDecoder};
use crate::error::ReflowError;
use crate::model::TextFragment;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::process::Command;

/// Decoding backend using pdftotext (from poppler-utils).
///
/// Runs `pdftotext -bbox`, which reports every word with its bounding box in
/// PDF points, origin at the top-left of the page.
pub struct PdftotextDecoder;

impl PdftotextDecoder {
    pub fn new() -> Self {
        PdftotextDecoder
    }

    /// Whether a `pdftotext` binary can be spawned. Poppler prints its version
    /// to stderr and some builds exit non-zero for `-v`.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentDecoder for PdftotextDecoder {
    fn decode_pages(&self, bytes: &[u8]) -> Result<Vec<Vec<TextFragment>>, ReflowError> {
        ensure_pdf(bytes)?;

        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| ReflowError::Decode(e.to_string()))?;
        tmpfile
            .write_all(bytes)
            .map_err(|e| ReflowError::Decode(e.to_string()))?;

        let output = Command::new("pdftotext")
            .arg("-bbox")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ReflowError::PdftotextNotFound
                } else {
                    ReflowError::Decode(format!("pdftotext -bbox failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ReflowError::PdftotextFailed { code, stderr });
        }

        let xhtml = String::from_utf8_lossy(&output.stdout);
        let pages = parse_bbox_xhtml(&xhtml)?;
        tracing::debug!(
            "pdftotext decoded {} page(s), {} word(s)",
            pages.len(),
            pages.iter().map(Vec::len).sum::<usize>()
        );
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Parse `pdftotext -bbox` output into per-page word fragments.
///
/// Each `<word>` becomes one fragment positioned at its left edge and
/// baseline-side edge (`xMin`, `yMax`). Pages keep their document order even
/// when they hold no words.
fn parse_bbox_xhtml(xhtml: &str) -> Result<Vec<Vec<TextFragment>>, ReflowError> {
    let mut reader = Reader::from_str(xhtml);
    let mut pages: Vec<Vec<TextFragment>> = Vec::new();
    let mut word_pos: Option<(f64, f64)> = None;
    let mut word_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"page" => pages.push(Vec::new()),
                b"word" => {
                    word_pos = Some(word_position(e)?);
                    word_text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) if e.local_name().as_ref() == b"page" => {
                pages.push(Vec::new());
            }
            Ok(Event::Text(ref t)) if word_pos.is_some() => {
                let text = t
                    .unescape()
                    .map_err(|e| ReflowError::Decode(format!("bad word text: {e}")))?;
                word_text.push_str(&text);
            }
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"word" => {
                if let Some((x, y)) = word_pos.take() {
                    if pages.is_empty() {
                        pages.push(Vec::new());
                    }
                    let page_index = pages.len() - 1;
                    let text = std::mem::take(&mut word_text);
                    pages[page_index].push(TextFragment {
                        page_index,
                        x,
                        y,
                        text,
                    });
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ReflowError::Decode(format!(
                    "malformed pdftotext output at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            Ok(_) => {}
        }
    }

    Ok(pages)
}

fn word_position(tag: &BytesStart<'_>) -> Result<(f64, f64), ReflowError> {
    let mut x_min = None;
    let mut y_max = None;

    for attr in tag.attributes() {
        let attr = attr.map_err(|e| ReflowError::Decode(format!("bad word attribute: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| ReflowError::Decode(format!("bad word attribute: {e}")))?;
        match attr.key.as_ref() {
            b"xMin" => x_min = value.trim().parse::<f64>().ok(),
            b"yMax" => y_max = value.trim().parse::<f64>().ok(),
            _ => {}
        }
    }

    match (x_min, y_max) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(ReflowError::Decode(
            "word element without numeric xMin/yMax".into(),
        )),
    }
}
