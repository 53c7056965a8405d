// File: crates/scatter-core/src/tooltip.rs
// Summary: Chart-owned hover tooltip: state machine plus DOM synchronisation.

use crate::dom::{Element, Node};
use crate::marks::Mark;
use crate::types::{fmt_px, Point};

pub const TOOLTIP_ID: &str = "tooltip";

/// Placement and fade settings for the tooltip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipStyle {
    /// Added to the pointer x when showing.
    pub offset_x: f64,
    /// Added to the pointer y when showing.
    pub offset_y: f64,
    pub opacity: f64,
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self { offset_x: 15.0, offset_y: -50.0, opacity: 0.9, fade_in_ms: 100, fade_out_ms: 300 }
    }
}

/// Text lines shown for a mark.
pub fn tooltip_lines(mark: &Mark) -> [String; 3] {
    let r = &mark.record;
    [
        format!("{} ({})", r.name, r.nationality),
        format!("{} Place {} in {} min", r.year, r.place, r.time_label()),
        r.doping_allegation.clone(),
    ]
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    style: TooltipStyle,
    visible: bool,
    year: Option<String>,
    lines: Vec<String>,
    position: Point,
}

impl Tooltip {
    pub fn new(style: TooltipStyle) -> Self {
        Self { style, ..Self::default() }
    }

    pub fn is_visible(&self) -> bool { self.visible }

    /// Year of the last hovered mark, as written to `data-year`.
    pub fn year(&self) -> Option<&str> { self.year.as_deref() }

    pub fn lines(&self) -> &[String] { &self.lines }

    pub fn position(&self) -> Point { self.position }

    /// Show the tooltip for `mark`, replacing whatever it showed before.
    pub fn enter(&mut self, mark: &Mark, pointer: Point) {
        self.visible = true;
        self.year = Some(mark.x_value.clone());
        self.lines = tooltip_lines(mark).into_iter().filter(|l| !l.is_empty()).collect();
        self.position = Point::new(pointer.x + self.style.offset_x, pointer.y + self.style.offset_y);
    }

    pub fn leave(&mut self) {
        self.visible = false;
    }

    fn style_attr(&self) -> String {
        let (opacity, fade) = if self.visible {
            (self.style.opacity, self.style.fade_in_ms)
        } else {
            (0.0, self.style.fade_out_ms)
        };
        let mut s = format!("opacity: {}; transition: opacity {fade}ms;", fmt_px(opacity));
        if self.year.is_some() {
            s.push_str(&format!(
                " left: {}px; top: {}px;",
                fmt_px(self.position.x),
                fmt_px(self.position.y)
            ));
        }
        s
    }

    /// Fresh, hidden tooltip element.
    pub fn to_element(&self) -> Element {
        let mut el = Element::new("div").attr("id", TOOLTIP_ID).attr("class", "tooltip");
        self.sync(&mut el);
        el
    }

    /// Overwrite `el` with the current state.
    pub fn sync(&self, el: &mut Element) {
        el.set_attr("style", self.style_attr());
        match &self.year {
            Some(y) => el.set_attr("data-year", y),
            None => {
                el.remove_attr("data-year");
            }
        }
        el.clear_children();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                el.append(Element::new("br"));
            }
            el.children.push(Node::Text(line.clone()));
        }
    }
}
