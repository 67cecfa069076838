use crate::model::{Line, TextFragment};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Quantize a vertical position into the integer key used to bucket lines.
///
/// Computes `round(y * 100)` with half-up rounding on the decimal value of `y`,
/// so `1.005` maps to `101` even though `1.005 * 100.0` is `100.49999999999999`
/// in binary floating point. Coordinates that have no decimal form fall back to
/// plain `f64` arithmetic.
pub fn line_key(y: f64) -> i64 {
    y_to_decimal(y)
        .and_then(quantize)
        .unwrap_or_else(|| (y * 100.0 + 0.5).floor() as i64)
}

/// Convert a coordinate to Decimal via its shortest round-trip string.
///
/// Going through the string form keeps `1.005_f64` as `1.005` instead of
/// `1.00499999999999989341858963598497211933135986328125`.
fn y_to_decimal(y: f64) -> Option<Decimal> {
    if !y.is_finite() {
        return None;
    }
    Decimal::from_str(&format!("{y}")).ok()
}

fn quantize(y: Decimal) -> Option<i64> {
    let scaled = y.checked_mul(Decimal::ONE_HUNDRED)?;
    scaled.checked_add(Decimal::new(5, 1))?.floor().to_i64()
}

/// Rebuild the ordered text lines of one page.
///
/// Fragments are bucketed by [`line_key`], each bucket is ordered left to
/// right and joined with single spaces, and buckets are emitted top to bottom
/// by ascending key. Empty fragments and lines that trim to nothing are
/// dropped. Fragments with equal `x` keep their arrival order.
pub fn reconstruct(page: &[TextFragment]) -> Vec<Line> {
    let mut buckets: BTreeMap<i64, Vec<&TextFragment>> = BTreeMap::new();

    for fragment in page {
        if fragment.text.is_empty() {
            continue;
        }
        buckets
            .entry(line_key(fragment.y))
            .or_default()
            .push(fragment);
    }

    buckets
        .into_iter()
        .filter_map(|(key, mut fragments)| {
            // sort_by is stable: x ties stay in arrival order
            fragments.sort_by(|a, b| a.x.total_cmp(&b.x));

            let joined = fragments
                .iter()
                .map(|f| f.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            let text = trim_line(&joined);
            if text.is_empty() {
                None
            } else {
                Some(Line {
                    key,
                    text: text.to_string(),
                })
            }
        })
        .collect()
}

/// Trim whitespace plus the byte-order mark, which some PDF producers emit as
/// a leading glyph. NEL (U+0085) is kept: it is a control character, not
/// trimmable space.
fn trim_line(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
