use crate::config::DocxOptions;
use crate::error::ReflowError;
use crate::model::OutputBlock;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const W_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Render `word/document.xml` for a block sequence.
pub fn render(blocks: &[OutputBlock], options: &DocxOptions) -> Result<Vec<u8>, ReflowError> {
    let mut w = Writer::new(Vec::new());

    emit(
        &mut w,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )?;
    start(
        &mut w,
        "w:document",
        &[("xmlns:w", W_NAMESPACE), ("xmlns:r", R_NAMESPACE)],
    )?;
    start(&mut w, "w:body", &[])?;

    let spacing_after = options.spacing_after.to_string();
    for block in blocks {
        match block {
            OutputBlock::Paragraph {
                text,
                font_size_half_points,
            } => write_paragraph(&mut w, text, *font_size_half_points, &spacing_after)?,
            OutputBlock::PageBreak => write_page_break(&mut w)?,
        }
    }

    write_section(&mut w, options)?;
    end(&mut w, "w:body")?;
    end(&mut w, "w:document")?;

    Ok(w.into_inner())
}

fn write_paragraph(
    w: &mut Writer<Vec<u8>>,
    text: &str,
    font_size_half_points: u32,
    spacing_after: &str,
) -> Result<(), ReflowError> {
    let size = font_size_half_points.to_string();

    start(w, "w:p", &[])?;
    start(w, "w:pPr", &[])?;
    empty(w, "w:spacing", &[("w:after", spacing_after)])?;
    end(w, "w:pPr")?;

    start(w, "w:r", &[])?;
    start(w, "w:rPr", &[])?;
    empty(w, "w:sz", &[("w:val", size.as_str())])?;
    empty(w, "w:szCs", &[("w:val", size.as_str())])?;
    end(w, "w:rPr")?;
    start(w, "w:t", &[("xml:space", "preserve")])?;
    emit(w, Event::Text(BytesText::new(&sanitize_xml_text(text))))?;
    end(w, "w:t")?;
    end(w, "w:r")?;

    end(w, "w:p")
}

/// An empty paragraph that starts a new page.
fn write_page_break(w: &mut Writer<Vec<u8>>) -> Result<(), ReflowError> {
    start(w, "w:p", &[])?;
    start(w, "w:pPr", &[])?;
    empty(w, "w:pageBreakBefore", &[])?;
    end(w, "w:pPr")?;
    end(w, "w:p")
}

fn write_section(w: &mut Writer<Vec<u8>>, options: &DocxOptions) -> Result<(), ReflowError> {
    let width = options.page_width.to_string();
    let height = options.page_height.to_string();
    let top = options.margin_top.to_string();
    let right = options.margin_right.to_string();
    let bottom = options.margin_bottom.to_string();
    let left = options.margin_left.to_string();

    start(w, "w:sectPr", &[])?;
    empty(w, "w:pgSz", &[("w:w", width.as_str()), ("w:h", height.as_str())])?;
    empty(
        w,
        "w:pgMar",
        &[
            ("w:top", top.as_str()),
            ("w:right", right.as_str()),
            ("w:bottom", bottom.as_str()),
            ("w:left", left.as_str()),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ],
    )?;
    end(w, "w:sectPr")
}

/// Drop characters XML 1.0 cannot carry. PDF text runs regularly contain
/// stray control codes, and Word refuses the whole file if one slips through.
fn sanitize_xml_text(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r')
                || (c >= '\u{20}' && c != '\u{fffe}' && c != '\u{ffff}')
        })
        .collect()
}

fn emit(w: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), ReflowError> {
    w.write_event(event)
        .map_err(|e| ReflowError::Serialize(e.to_string()))
}

fn start(w: &mut Writer<Vec<u8>>, name: &str, attrs: &[(&str, &str)]) -> Result<(), ReflowError> {
    emit(w, Event::Start(element(name, attrs)))
}

fn empty(w: &mut Writer<Vec<u8>>, name: &str, attrs: &[(&str, &str)]) -> Result<(), ReflowError> {
    emit(w, Event::Empty(element(name, attrs)))
}

fn end(w: &mut Writer<Vec<u8>>, name: &str) -> Result<(), ReflowError> {
    emit(w, Event::End(BytesEnd::new(name)))
}

fn element<'a>(name: &'a str, attrs: &[(&'a str, &'a str)]) -> BytesStart<'a> {
    let mut tag = BytesStart::new(name);
    for &attr in attrs {
        tag.push_attribute(attr);
    }
    tag
}
