// File: crates/scatter-core/src/chart.rs
// Summary: ChartRenderer pipeline (validate, scale, axes, marks, legend, tooltip) and the
//          rendered chart with its hover dispatch.

use tracing::debug;

use crate::axis::{Axis, TICK_FONT_SIZE, TICK_PADDING, TICK_SIZE};
use crate::dom::Element;
use crate::error::RenderError;
use crate::legend::{legend_element, legend_entries, legend_origin, LegendEntry};
use crate::marks::{bind_marks, Mark, MarkRadii};
use crate::record::Record;
use crate::scale::{min_sec_label, year_start, ChartScales};
use crate::text::estimate_width;
use crate::theme::Theme;
use crate::ticks::{time_ticks, year_ticks, DEFAULT_TICK_COUNT};
use crate::tooltip::{Tooltip, TooltipStyle, TOOLTIP_ID};
use crate::types::{fmt_px, Insets, Point, PLOT_HEIGHT, PLOT_WIDTH};

pub const SVG_ID: &str = "svg-canvas";
pub const TITLE_ID: &str = "title";
/// Race times must fit within the reference day; longer spans have no meaning on the time axis.
pub const MAX_RACE_SECONDS: u32 = 24 * 3600 - 1;

const TITLE_FONT_SIZE: f64 = 20.0;
const LABEL_FONT_SIZE: f64 = 12.0;

pub struct RenderOptions {
    pub plot_width: u32,
    pub plot_height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub title: String,
    pub y_label: String,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub radii: MarkRadii,
    pub tooltip: TooltipStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plot_width: PLOT_WIDTH,
            plot_height: PLOT_HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            title: "Doping in Professional Bicycle Racing".to_string(),
            y_label: "Time in minutes".to_string(),
            x_tick_count: DEFAULT_TICK_COUNT,
            y_tick_count: DEFAULT_TICK_COUNT,
            radii: MarkRadii::default(),
            tooltip: TooltipStyle::default(),
        }
    }
}

impl RenderOptions {
    /// Full SVG size (plot plus margins).
    pub fn svg_size(&self) -> (u32, u32) {
        (self.plot_width + self.insets.hsum(), self.plot_height + self.insets.vsum())
    }
}

/// Hover input for a rendered chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverEvent {
    /// Pointer entered mark `mark`; `pointer` is in page coordinates.
    Enter { mark: usize, pointer: Point },
    Leave,
}

pub struct ChartRenderer {
    opts: RenderOptions,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Render `records` into `mount`, appending the SVG scene and the tooltip.
    ///
    /// Everything is computed before the mount is touched; on error no element
    /// is created.
    pub fn render(&self, records: &[Record], mut mount: Element) -> Result<RenderedChart, RenderError> {
        validate(records)?;
        let o = &self.opts;
        let (w, h) = (f64::from(o.plot_width), f64::from(o.plot_height));

        let scales = ChartScales::compute(records, w, h)?;
        let marks = bind_marks(records, &scales, o.radii)?;
        let x_axis = Axis::bottom(&scales.x, year_ticks(&scales.x, o.x_tick_count));
        let y_axis = Axis::left(&scales.y, time_ticks(&scales.y, o.y_tick_count));
        let legend = legend_entries(records);

        let (d0, d1) = scales.y.domain();
        debug!(
            records = records.len(),
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            y_min = %min_sec_label(d0),
            y_max = %min_sec_label(d1),
            "chart scales computed"
        );

        let svg = self.svg_element(&marks, &x_axis, &y_axis, &legend);
        let tooltip = Tooltip::new(o.tooltip);
        mount.append(svg);
        mount.append(tooltip.to_element());

        Ok(RenderedChart {
            root: mount,
            scales,
            marks,
            x_axis,
            y_axis,
            legend,
            tooltip,
            insets: o.insets,
            theme: o.theme,
            size: o.svg_size(),
        })
    }

    /// Render into a fresh `<main>` element.
    pub fn render_detached(&self, records: &[Record]) -> Result<RenderedChart, RenderError> {
        self.render(records, Element::new("main"))
    }

    fn svg_element(&self, marks: &[Mark], x_axis: &Axis, y_axis: &Axis, legend: &[LegendEntry]) -> Element {
        let o = &self.opts;
        let theme = &o.theme;
        let (sw, sh) = o.svg_size();
        let (w, h) = (f64::from(o.plot_width), f64::from(o.plot_height));
        let (left, top) = (f64::from(o.insets.left), f64::from(o.insets.top));

        let title = Element::new("text")
            .attr("id", TITLE_ID)
            .attr("x", fmt_px(left + w / 2.0))
            .attr("y", fmt_px((top + TITLE_FONT_SIZE) / 2.0))
            .attr("text-anchor", "middle")
            .attr("font-size", fmt_px(TITLE_FONT_SIZE))
            .attr("font-family", "sans-serif")
            .attr("fill", theme.title.to_hex())
            .text(o.title.clone());

        // The label sits a quarter of the way between the tick labels and the edge.
        let tick_label_w = y_axis
            .ticks
            .iter()
            .map(|t| estimate_width(&t.label, TICK_FONT_SIZE))
            .fold(0.0, f64::max);
        let axis_w = TICK_SIZE + TICK_PADDING + tick_label_w;
        let y_label = Element::new("text")
            .attr("class", "axis-label")
            .attr("transform", "rotate(-90)")
            .attr("x", fmt_px(-h / 2.0))
            .attr("y", fmt_px(-axis_w - (left - axis_w).max(0.0) / 4.0))
            .attr("text-anchor", "middle")
            .attr("font-size", fmt_px(LABEL_FONT_SIZE))
            .attr("font-family", "sans-serif")
            .attr("fill", theme.axis_label.to_hex())
            .text(o.y_label.clone());

        let mut plot = Element::new("g")
            .attr("class", "plot")
            .attr("transform", format!("translate({},{})", fmt_px(left), fmt_px(top)))
            .child(x_axis.to_element(h))
            .child(y_axis.to_element(0.0))
            .child(y_label);
        for mark in marks {
            plot.append(mark.to_element(theme));
        }
        plot.append(legend_element(legend, theme, legend_origin(legend, marks, w, h)));

        Element::new("svg")
            .attr("id", SVG_ID)
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", sw)
            .attr("height", sh)
            .attr("viewBox", format!("0 0 {sw} {sh}"))
            .attr("color", theme.axis_line.to_hex())
            .child(
                Element::new("rect")
                    .attr("class", "background")
                    .attr("width", sw)
                    .attr("height", sh)
                    .attr("fill", theme.background.to_hex()),
            )
            .child(title)
            .child(plot)
    }
}

fn validate(records: &[Record]) -> Result<(), RenderError> {
    if records.is_empty() {
        return Err(RenderError::InvalidInput("no records to render".into()));
    }
    for (i, r) in records.iter().enumerate() {
        let padded = r.year.checked_sub(1).and_then(year_start).zip(r.year.checked_add(1).and_then(year_start));
        if padded.is_none() {
            return Err(RenderError::InvalidInput(format!("record {i}: year {} is out of range", r.year)));
        }
        if r.time_seconds > MAX_RACE_SECONDS {
            return Err(RenderError::InvalidInput(format!(
                "record {i}: race time {}s exceeds {MAX_RACE_SECONDS}s",
                r.time_seconds
            )));
        }
    }
    Ok(())
}

/// A chart rendered into its mount, with the state needed to answer hover events.
pub struct RenderedChart {
    root: Element,
    scales: ChartScales,
    marks: Vec<Mark>,
    x_axis: Axis,
    y_axis: Axis,
    legend: Vec<LegendEntry>,
    tooltip: Tooltip,
    insets: Insets,
    theme: Theme,
    size: (u32, u32),
}

impl RenderedChart {
    /// The mount element holding the SVG scene and the tooltip.
    pub fn root(&self) -> &Element { &self.root }
    pub fn into_root(self) -> Element { self.root }
    pub fn svg(&self) -> Option<&Element> { self.root.find_by_id(SVG_ID) }
    pub fn scales(&self) -> &ChartScales { &self.scales }
    pub fn marks(&self) -> &[Mark] { &self.marks }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn legend(&self) -> &[LegendEntry] { &self.legend }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn insets(&self) -> Insets { self.insets }
    /// SVG width and height in pixels.
    pub fn size(&self) -> (u32, u32) { self.size }

    pub fn dispatch(&mut self, event: HoverEvent) -> Result<(), RenderError> {
        match event {
            HoverEvent::Enter { mark, pointer } => {
                let m = self.marks.get(mark).ok_or(RenderError::UnknownMark(mark))?;
                debug!(mark, year = %m.x_value, "hover enter");
                self.tooltip.enter(m, pointer);
            }
            HoverEvent::Leave => {
                debug!("hover leave");
                self.tooltip.leave();
            }
        }
        if let Some(el) = self.root.find_by_id_mut(TOOLTIP_ID) {
            self.tooltip.sync(el);
        }
        Ok(())
    }

    pub fn hover(&mut self, mark: usize, pointer: Point) -> Result<(), RenderError> {
        self.dispatch(HoverEvent::Enter { mark, pointer })
    }

    pub fn leave(&mut self) {
        // Leave never fails; the tooltip element exists for the chart's lifetime.
        let _ = self.dispatch(HoverEvent::Leave);
    }

    /// Topmost mark under `p`, given in SVG coordinates.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        let local = Point::new(p.x - f64::from(self.insets.left), p.y - f64::from(self.insets.top));
        self.marks.iter().rev().find(|m| m.contains(local)).map(|m| m.index)
    }

    /// Centre of mark `index` in SVG coordinates.
    pub fn mark_center(&self, index: usize) -> Option<Point> {
        self.marks.get(index).map(|m| {
            Point::new(m.cx + f64::from(self.insets.left), m.cy + f64::from(self.insets.top))
        })
    }

    /// The SVG scene alone.
    pub fn to_svg_markup(&self) -> String {
        self.svg().map(Element::to_markup).unwrap_or_default()
    }
}
