// File: crates/scatter-core/src/types.rs
// Summary: Shared layout types and constants (plot size, margins, pointer position).

/// Default plot-area width in pixels (excluding margins).
pub const PLOT_WIDTH: u32 = 700;
/// Default plot-area height in pixels (excluding margins).
pub const PLOT_HEIGHT: u32 = 500;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 30, 50, 50)
    }
}

/// Pointer position in page (or SVG) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Format a pixel coordinate for an attribute.
///
/// Uses the shortest representation that parses back to the same `f64`, so a
/// value read from the DOM compares exactly against the scale output.
pub fn fmt_px(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { format!("{v}") }
}
