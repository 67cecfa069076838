use reflow_core::model::OutputBlock;

pub fn print(blocks: &[OutputBlock]) {
    print!("{}", format_blocks(blocks));
}

/// One line per paragraph, under an `=== Page N ===` header per page.
fn format_blocks(blocks: &[OutputBlock]) -> String {
    let mut out = String::new();
    let mut page = 1;

    if !blocks.is_empty() {
        out.push_str("=== Page 1 ===\n");
    }

    for block in blocks {
        match block {
            OutputBlock::Paragraph { text, .. } => {
                out.push_str("  ");
                out.push_str(text);
                out.push('\n');
            }
            OutputBlock::PageBreak => {
                page += 1;
                out.push_str(&format!("\n=== Page {page} ===\n"));
            }
        }
    }

    out
}
