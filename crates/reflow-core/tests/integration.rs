//! Integration tests for the decode -> layout -> docx pipeline.
//!
//! Uses a MockDecoder that returns pre-built fragments without invoking
//! pdftotext, so these tests run without poppler-utils.

use reflow_core::config::ConvertOptions;
use reflow_core::decode::pdf2json::Pdf2JsonDecoder;
use reflow_core::decode::FragmentDecoder;
use reflow_core::docx::DOCUMENT_PART;
use reflow_core::error::ReflowError;
use reflow_core::model::{OutputBlock, TextFragment};
use reflow_core::{convert_pdf, extract_blocks};
use std::io::{Cursor, Read};

struct MockDecoder {
    pages: Vec<Vec<TextFragment>>,
}

impl FragmentDecoder for MockDecoder {
    fn decode_pages(&self, _bytes: &[u8]) -> Result<Vec<Vec<TextFragment>>, ReflowError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingDecoder;

impl FragmentDecoder for FailingDecoder {
    fn decode_pages(&self, _bytes: &[u8]) -> Result<Vec<Vec<TextFragment>>, ReflowError> {
        Err(ReflowError::PdftotextFailed {
            code: 1,
            stderr: "Syntax Error: Couldn't find trailer dictionary".into(),
        })
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn frag(page: usize, x: f64, y: f64, text: &str) -> TextFragment {
    TextFragment::new(page, x, y, text)
}

fn document_xml(docx: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
    let mut part = archive.by_name(DOCUMENT_PART).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

// ---------------------------------------------------------------------------
// Test 1: Fragments on one line are joined left to right
// ---------------------------------------------------------------------------
#[test]
fn same_line_fragments_join_by_x() {
    let decoder = MockDecoder {
        pages: vec![vec![frag(0, 5.0, 1.000, "Hello"), frag(0, 1.0, 1.000, "World")]],
    };

    let blocks = extract_blocks(&[], &decoder, &ConvertOptions::default()).unwrap();

    assert_eq!(blocks, vec![OutputBlock::paragraph("World Hello")]);
}

// ---------------------------------------------------------------------------
// Test 2: Quantization boundary splits 1.0049 and 1.0050
// ---------------------------------------------------------------------------
#[test]
fn quantization_boundary_makes_two_lines() {
    let decoder = MockDecoder {
        pages: vec![vec![frag(0, 0.0, 1.0050, "lower"), frag(0, 0.0, 1.0049, "upper")]],
    };

    let blocks = extract_blocks(&[], &decoder, &ConvertOptions::default()).unwrap();

    assert_eq!(
        blocks,
        vec![OutputBlock::paragraph("upper"), OutputBlock::paragraph("lower")]
    );
}

// ---------------------------------------------------------------------------
// Test 3: Empty last page still gets the break before it, nothing after
// ---------------------------------------------------------------------------
#[test]
fn empty_last_page_keeps_preceding_break() {
    let decoder = MockDecoder {
        pages: vec![vec![frag(0, 0.0, 3.0, "Page one")], vec![]],
    };

    let blocks = extract_blocks(&[], &decoder, &ConvertOptions::default()).unwrap();

    assert_eq!(
        blocks,
        vec![OutputBlock::paragraph("Page one"), OutputBlock::PageBreak]
    );
}

// ---------------------------------------------------------------------------
// Test 4: Percent-encoded run is decoded by the decoder, then trimmed
// ---------------------------------------------------------------------------
#[test]
fn percent_encoded_leading_space_trimmed() {
    let json = br#"{"Pages": [{"Texts": [{"x": 1.2, "y": 4.5, "R": [{"T": "%20Hi"}]}]}]}"#;

    let blocks = extract_blocks(json, &Pdf2JsonDecoder::new(), &ConvertOptions::default()).unwrap();

    assert_eq!(blocks, vec![OutputBlock::paragraph("Hi")]);
}

// ---------------------------------------------------------------------------
// Test 5: Multi-page pdf2json document through to DOCX
// ---------------------------------------------------------------------------
#[test]
fn pdf2json_document_converts_to_docx() {
    let json = br#"{
        "Pages": [
            {"Texts": [
                {"x": 10.1, "y": 2.3, "R": [{"T": "Quarterly"}]},
                {"x": 14.7, "y": 2.3, "R": [{"T": "Report"}]},
                {"x": 3.0, "y": 5.15, "R": [{"T": "Revenue%20%26%20costs"}]}
            ]},
            {"Texts": [
                {"x": 3.0, "y": 1.0, "R": [{"T": "Appendix%20A"}]}
            ]}
        ]
    }"#;

    let docx = convert_pdf(json, &Pdf2JsonDecoder::new(), &ConvertOptions::default()).unwrap();
    let xml = document_xml(&docx);

    let quarterly = xml.find(">Quarterly Report</w:t>").unwrap();
    let revenue = xml.find(">Revenue &amp; costs</w:t>").unwrap();
    let page_break = xml.find("<w:pageBreakBefore/>").unwrap();
    let appendix = xml.find(">Appendix A</w:t>").unwrap();
    assert!(quarterly < revenue && revenue < page_break && page_break < appendix);
    assert_eq!(xml.matches("<w:pageBreakBefore/>").count(), 1);
    assert_eq!(xml.matches(r#"<w:sz w:val="24"/>"#).count(), 3);
}

// ---------------------------------------------------------------------------
// Test 6: Configured font size flows into every paragraph
// ---------------------------------------------------------------------------
#[test]
fn configured_font_size_applies_everywhere() {
    let decoder = MockDecoder {
        pages: vec![
            vec![frag(0, 0.0, 1.0, "a"), frag(0, 0.0, 2.0, "b")],
            vec![frag(1, 0.0, 1.0, "c")],
        ],
    };
    let options = reflow_core::config::parse_options_str(r#"{"font_size_half_points": 20}"#).unwrap();

    let blocks = extract_blocks(&[], &decoder, &options).unwrap();

    for block in blocks.iter().filter(|b| !b.is_page_break()) {
        match block {
            OutputBlock::Paragraph {
                font_size_half_points,
                ..
            } => assert_eq!(*font_size_half_points, 20),
            OutputBlock::PageBreak => unreachable!(),
        }
    }

    let docx = convert_pdf(&[], &decoder, &options).unwrap();
    assert_eq!(document_xml(&docx).matches(r#"<w:sz w:val="20"/>"#).count(), 3);
}

// ---------------------------------------------------------------------------
// Test 7: Decoder failure is surfaced with its diagnostic detail
// ---------------------------------------------------------------------------
#[test]
fn decoder_failure_is_propagated() {
    let result = convert_pdf(b"%PDF-1.4", &FailingDecoder, &ConvertOptions::default());

    let err = result.unwrap_err();
    assert!(matches!(err, ReflowError::PdftotextFailed { code: 1, .. }));
    assert!(err.to_string().contains("trailer dictionary"));
}

// ---------------------------------------------------------------------------
// Test 8: No pages is an empty, valid document
// ---------------------------------------------------------------------------
#[test]
fn zero_pages_yield_empty_document() {
    let decoder = MockDecoder { pages: vec![] };

    let blocks = extract_blocks(&[], &decoder, &ConvertOptions::default()).unwrap();
    assert!(blocks.is_empty());

    let docx = convert_pdf(&[], &decoder, &ConvertOptions::default()).unwrap();
    let xml = document_xml(&docx);
    assert!(!xml.contains("<w:p>"));
}

// ---------------------------------------------------------------------------
// Test 9: Lines on a page follow vertical order regardless of arrival
// ---------------------------------------------------------------------------
#[test]
fn lines_follow_vertical_order() {
    let decoder = MockDecoder {
        pages: vec![vec![
            frag(0, 0.0, 30.0, "third"),
            frag(0, 0.0, 4.0, "first"),
            frag(0, 2.0, 12.5, "second, right"),
            frag(0, 0.0, 12.5, "second, left"),
        ]],
    };

    let blocks = extract_blocks(&[], &decoder, &ConvertOptions::default()).unwrap();
    let texts: Vec<&str> = blocks.iter().filter_map(|b| b.text()).collect();

    assert_eq!(texts, vec!["first", "second, left second, right", "third"]);
}
