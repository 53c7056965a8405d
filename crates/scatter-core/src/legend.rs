// File: crates/scatter-core/src/legend.rs
// Summary: Category legend (swatch + label per category present in the data).

use crate::dom::Element;
use crate::marks::Mark;
use crate::record::{ColorCategory, Record};
use crate::text::estimate_width;
use crate::theme::Theme;
use crate::types::fmt_px;

const SWATCH: f64 = 15.0;
const GAP: f64 = 2.0;
const FONT_SIZE: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: ColorCategory,
    pub label: &'static str,
}

/// Entries for the categories that occur in `records`, flagged first.
pub fn legend_entries(records: &[Record]) -> Vec<LegendEntry> {
    ColorCategory::ALL
        .iter()
        .copied()
        .filter(|c| records.iter().any(|r| r.category() == *c))
        .map(|category| LegendEntry { category, label: category.label() })
        .collect()
}

/// Estimated (width, height) of the legend block.
pub fn legend_size(entries: &[LegendEntry]) -> (f64, f64) {
    let text = entries
        .iter()
        .map(|e| estimate_width(e.label, FONT_SIZE))
        .fold(0.0, f64::max);
    let rows = entries.len() as f64;
    (SWATCH + GAP + text, rows * (SWATCH + 2.0 * GAP))
}

fn overlaps(mark: &Mark, (x, y): (f64, f64), (w, h): (f64, f64)) -> bool {
    let dx = mark.cx - mark.cx.clamp(x, x + w);
    let dy = mark.cy - mark.cy.clamp(y, y + h);
    dx * dx + dy * dy <= mark.r * mark.r
}

/// Top-left corner of the legend in plot coordinates.
///
/// Prefers top-centre, then the plot corners, then bottom-centre; takes the
/// first spot clear of every mark, or the one covering the fewest marks.
pub fn legend_origin(entries: &[LegendEntry], marks: &[Mark], plot_width: f64, plot_height: f64) -> (f64, f64) {
    let size @ (w, h) = legend_size(entries);
    let centre = ((plot_width - w) / 2.0).max(0.0);
    let right = (plot_width - w - GAP).max(0.0);
    let bottom = (plot_height - h - GAP).max(GAP);
    let candidates = [
        (centre, GAP),
        (right, GAP),
        (GAP, GAP),
        (right, bottom),
        (GAP, bottom),
        (centre, bottom),
    ];
    let covered = |origin| marks.iter().filter(|m| overlaps(m, origin, size)).count();
    candidates
        .iter()
        .copied()
        .min_by_key(|&origin| covered(origin))
        .unwrap_or((centre, GAP))
}

/// Legend group placed at `origin` in plot coordinates.
pub fn legend_element(entries: &[LegendEntry], theme: &Theme, origin: (f64, f64)) -> Element {
    let (x, y) = origin;
    let mut g = Element::new("g")
        .attr("id", "legend")
        .attr("transform", format!("translate({},{})", fmt_px(x), fmt_px(y)))
        .attr("font-size", fmt_px(FONT_SIZE))
        .attr("font-family", "sans-serif");
    for (i, entry) in entries.iter().enumerate() {
        let y = (GAP + SWATCH + GAP) * i as f64;
        g.append(
            Element::new("g")
                .attr("class", "legend-item")
                .attr("transform", format!("translate(0,{})", fmt_px(y)))
                .child(
                    Element::new("rect")
                        .attr("width", fmt_px(SWATCH))
                        .attr("height", fmt_px(SWATCH))
                        .attr("fill", theme.category_color(entry.category).to_hex())
                        .attr("stroke", theme.mark_stroke.to_hex()),
                )
                .child(
                    Element::new("text")
                        .attr("x", fmt_px(SWATCH + GAP))
                        .attr("y", fmt_px(SWATCH - 3.0))
                        .attr("fill", theme.axis_label.to_hex())
                        .text(entry.label),
                ),
        );
    }
    g
}
