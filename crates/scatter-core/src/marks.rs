// File: crates/scatter-core/src/marks.rs
// Summary: Per-record dot marks bound to the shared chart scales.

use crate::dom::Element;
use crate::error::RenderError;
use crate::record::{ColorCategory, Record};
use crate::scale::{race_time_attr, ChartScales};
use crate::theme::Theme;
use crate::types::{fmt_px, Point};

/// Class shared by every dot.
pub const DOT_CLASS: &str = "dot";

/// Radii per category; the two must differ so the legend has something to key on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkRadii {
    pub clean: f64,
    pub flagged: f64,
}

impl Default for MarkRadii {
    fn default() -> Self { Self { clean: 8.0, flagged: 4.0 } }
}

impl MarkRadii {
    pub fn for_category(&self, category: ColorCategory) -> f64 {
        match category {
            ColorCategory::Clean => self.clean,
            ColorCategory::Flagged => self.flagged,
        }
    }
}

/// A placed mark: its record, the attribute values it carries, and where it sits.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub index: usize,
    pub record: Record,
    pub category: ColorCategory,
    /// `data-xvalue`: the year as an integer.
    pub x_value: String,
    /// `data-yvalue`: the race time as an RFC 3339 timestamp.
    pub y_value: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Mark {
    /// True when `p` (plot-area coordinates) lies inside the dot.
    pub fn contains(&self, p: Point) -> bool {
        let (dx, dy) = (p.x - self.cx, p.y - self.cy);
        dx * dx + dy * dy <= self.r * self.r
    }

    pub fn to_element(&self, theme: &Theme) -> Element {
        Element::new("circle")
            .attr("class", DOT_CLASS)
            .attr("data-xvalue", &self.x_value)
            .attr("data-yvalue", &self.y_value)
            .attr("cx", fmt_px(self.cx))
            .attr("cy", fmt_px(self.cy))
            .attr("r", fmt_px(self.r))
            .attr("fill", theme.category_color(self.category).to_hex())
            .attr("stroke", theme.mark_stroke.to_hex())
    }
}

/// Place one mark per record using the given scales.
pub fn bind_marks(records: &[Record], scales: &ChartScales, radii: MarkRadii) -> Result<Vec<Mark>, RenderError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let cx = scales.x_px(record.year).ok_or_else(|| {
                RenderError::InvalidInput(format!("record {index}: year {} is out of range", record.year))
            })?;
            let category = record.category();
            Ok(Mark {
                index,
                record: record.clone(),
                category,
                x_value: record.year.to_string(),
                y_value: race_time_attr(record.time_seconds),
                cx,
                cy: scales.y_px(record.time_seconds),
                r: radii.for_category(category),
            })
        })
        .collect()
}
