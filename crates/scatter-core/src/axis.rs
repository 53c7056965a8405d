// File: crates/scatter-core/src/axis.rs
// Summary: Axis model (orientation, ticks) and its SVG group emission.

use crate::dom::Element;
use crate::scale::TimeScale;
use crate::ticks::Tick;
use crate::types::fmt_px;

/// Length of the tick marks, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Tick label font size.
pub const TICK_FONT_SIZE: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub id: String,
    pub orient: Orient,
    /// Pixel extent along the axis (the scale's range).
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(id: impl Into<String>, orient: Orient, scale: &TimeScale, ticks: Vec<Tick>) -> Self {
        Self { id: id.into(), orient, range: scale.range(), ticks }
    }

    pub fn bottom(scale: &TimeScale, ticks: Vec<Tick>) -> Self {
        Self::new("x-axis", Orient::Bottom, scale, ticks)
    }

    pub fn left(scale: &TimeScale, ticks: Vec<Tick>) -> Self {
        Self::new("y-axis", Orient::Left, scale, ticks)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// Emit the axis group. `offset` is the translation of the axis line
    /// (plot height for a bottom axis, zero for a left axis).
    pub fn to_element(&self, offset: f64) -> Element {
        let (r0, r1) = (fmt_px(self.range.0), fmt_px(self.range.1));
        let k = fmt_px(TICK_SIZE);
        let (transform, anchor, domain) = match self.orient {
            Orient::Bottom => (
                format!("translate(0,{})", fmt_px(offset)),
                "middle",
                format!("M{r0},{k}V0H{r1}V{k}"),
            ),
            Orient::Left => (
                format!("translate({},0)", fmt_px(offset)),
                "end",
                format!("M-{k},{r0}H0V{r1}H-{k}"),
            ),
        };

        let mut g = Element::new("g")
            .attr("id", &self.id)
            .attr("class", "axis")
            .attr("transform", transform)
            .attr("fill", "none")
            .attr("font-size", fmt_px(TICK_FONT_SIZE))
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", domain),
            );
        for tick in &self.ticks {
            g.append(self.tick_element(tick));
        }
        g
    }

    fn tick_element(&self, tick: &Tick) -> Element {
        let pos = fmt_px(tick.offset);
        let label_gap = fmt_px(TICK_SIZE + TICK_PADDING);
        let (transform, line, text) = match self.orient {
            Orient::Bottom => (
                format!("translate({pos},0)"),
                Element::new("line").attr("stroke", "currentColor").attr("y2", fmt_px(TICK_SIZE)),
                Element::new("text")
                    .attr("fill", "currentColor")
                    .attr("y", label_gap)
                    .attr("dy", "0.71em"),
            ),
            Orient::Left => (
                format!("translate(0,{pos})"),
                Element::new("line").attr("stroke", "currentColor").attr("x2", fmt_px(-TICK_SIZE)),
                Element::new("text")
                    .attr("fill", "currentColor")
                    .attr("x", fmt_px(-(TICK_SIZE + TICK_PADDING)))
                    .attr("dy", "0.32em"),
            ),
        };
        Element::new("g")
            .attr("class", "tick")
            .attr("opacity", "1")
            .attr("transform", transform)
            .child(line)
            .child(text.text(tick.label.clone()))
    }
}
