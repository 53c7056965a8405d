// File: crates/scatter-core/src/text.rs
// Summary: Font-free text metrics used for layout (legend width, y-label clearance).

/// Average advance of a proportional sans-serif glyph, as a fraction of font size.
const AVG_ADVANCE_EM: f64 = 0.6;
/// Narrow glyphs (i, l, punctuation) advance roughly half as far.
const NARROW_ADVANCE_EM: f64 = 0.3;

/// Approximate rendered width of `text` at `size` px.
pub fn estimate_width(text: &str, size: f64) -> f64 {
    text.chars()
        .map(|c| if is_narrow(c) { NARROW_ADVANCE_EM } else { AVG_ADVANCE_EM })
        .sum::<f64>()
        * size
}

fn is_narrow(c: char) -> bool {
    matches!(c, 'i' | 'l' | 'j' | 't' | 'f' | 'I' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | ' ')
}
