// File: crates/scatter-render-skia/src/text.rs
// Summary: Paints SVG `<text>` runs through Skia textlayout with start/middle/end anchoring.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Wide enough that no label wraps.
const LAYOUT_WIDTH: f32 = 10_000.0;
/// The font stack the SVG scene names as `sans-serif`.
const SANS_FAMILIES: [&str; 5] = ["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Horizontal anchor of a text run relative to its x coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

impl Anchor {
    /// `text-anchor` attribute value; unknown values fall back to `start`.
    pub fn parse(v: &str) -> Self {
        match v {
            "middle" => Anchor::Middle,
            "end" => Anchor::End,
            _ => Anchor::Start,
        }
    }

    fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            Anchor::Start => x,
            Anchor::Middle => x - width * 0.5,
            Anchor::End => x - width,
        }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    /// Single-line paragraph for `text`.
    fn shape(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut run = TextStyle::new();
        run.set_font_size(size.max(1.0));
        run.set_color(color);
        run.set_font_families(&SANS_FAMILIES);

        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&run);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(LAYOUT_WIDTH);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, anchored at `x`.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        anchor: Anchor,
    ) {
        if text.is_empty() {
            return;
        }
        let paragraph = self.shape(text, size, color);
        let left = anchor.left_edge(x, paragraph.longest_line());
        // Paragraphs paint from their top edge; the alphabetic baseline sits one ascent below.
        paragraph.paint(canvas, (left, y - paragraph.alphabetic_baseline()));
    }
}

#[cfg(test)]
mod tests {
    use super::Anchor;

    #[test]
    fn anchors_shift_by_width() {
        assert_eq!(Anchor::parse("middle").left_edge(100.0, 40.0), 80.0);
        assert_eq!(Anchor::parse("end").left_edge(100.0, 40.0), 60.0);
        assert_eq!(Anchor::parse("bogus").left_edge(100.0, 40.0), 100.0);
    }
}
