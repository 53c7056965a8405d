// File: crates/scatter-render-skia/src/lib.rs
// Summary: Skia raster backend; paints a rendered chart's SVG scene on a CPU surface and encodes PNG.
// Notes:
// - Only the SVG subset the core emits is understood: svg/g (translate, rotate), rect,
//   circle, line, path (absolute M/L/H/V), text (anchor + em offsets).
// - The tooltip is an HTML overlay and is not rasterised.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::{debug, trace};

use scatter_core::{Color, Element, RenderedChart, Theme};

pub mod text;

use text::{Anchor, TextShaper};

/// Rasterise `chart` and return PNG bytes.
pub fn rasterize_png(chart: &RenderedChart) -> Result<Vec<u8>> {
    let svg = chart.svg().context("rendered chart has no svg element")?;
    let (w, h) = chart.size();
    let theme = chart.theme();

    let mut surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(to_sk(theme.background));

    let painter = Painter { canvas, shaper: TextShaper::new() };
    painter.draw(svg, Style::root(theme));
    debug!(width = w, height = h, marks = chart.marks().len(), "chart rasterised");

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Rasterise `chart` and write the PNG to `output_png_path`.
pub fn render_to_png(chart: &RenderedChart, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = rasterize_png(chart)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn to_sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Inherited presentation attributes.
#[derive(Clone, Copy, Debug)]
struct Style {
    fill: Option<Color>,
    stroke: Option<Color>,
    current: Color,
    stroke_width: f32,
    font_size: f32,
    anchor: Anchor,
}

impl Style {
    fn root(theme: &Theme) -> Self {
        Self {
            fill: Some(Color::BLACK),
            stroke: None,
            current: theme.axis_line,
            stroke_width: 1.0,
            font_size: 16.0,
            anchor: Anchor::Start,
        }
    }

    fn apply(mut self, el: &Element) -> Self {
        if let Some(c) = el.get_attr("color").and_then(Color::from_hex) {
            self.current = c;
        }
        if let Some(v) = el.get_attr("fill") {
            self.fill = paint_value(v, self.current);
        }
        if let Some(v) = el.get_attr("stroke") {
            self.stroke = paint_value(v, self.current);
        }
        if let Some(v) = el.get_attr("stroke-width").and_then(|v| v.parse().ok()) {
            self.stroke_width = v;
        }
        if let Some(v) = el.get_attr("font-size").and_then(|v| v.parse().ok()) {
            self.font_size = v;
        }
        if let Some(v) = el.get_attr("text-anchor") {
            self.anchor = Anchor::parse(v);
        }
        self
    }
}

fn paint_value(v: &str, current: Color) -> Option<Color> {
    match v {
        "none" => None,
        "currentColor" => Some(current),
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        _ => Color::from_hex(v),
    }
}

fn num(el: &Element, name: &str) -> f32 {
    el.get_attr(name).and_then(|v| v.parse().ok()).unwrap_or(0.0)
}

/// `0.71em` style offsets resolve against the font size; plain numbers are pixels.
fn length(el: &Element, name: &str, font_size: f32) -> f32 {
    match el.get_attr(name) {
        Some(v) => match v.strip_suffix("em") {
            Some(em) => em.parse::<f32>().unwrap_or(0.0) * font_size,
            None => v.parse().unwrap_or(0.0),
        },
        None => 0.0,
    }
}

struct Painter<'a> {
    canvas: &'a skia::Canvas,
    shaper: TextShaper,
}

impl Painter<'_> {
    fn draw(&self, el: &Element, inherited: Style) {
        let style = inherited.apply(el);
        self.canvas.save();
        if let Some(t) = el.get_attr("transform") {
            apply_transform(self.canvas, t);
        }
        match el.tag.as_str() {
            "svg" | "g" => {
                for child in el.element_children() {
                    self.draw(child, style);
                }
            }
            "rect" => {
                let rect = skia::Rect::from_xywh(num(el, "x"), num(el, "y"), num(el, "width"), num(el, "height"));
                if let Some(p) = fill_paint(&style) {
                    self.canvas.draw_rect(rect, &p);
                }
                if let Some(p) = stroke_paint(&style) {
                    self.canvas.draw_rect(rect, &p);
                }
            }
            "circle" => {
                let center = (num(el, "cx"), num(el, "cy"));
                let r = num(el, "r");
                if let Some(p) = fill_paint(&style) {
                    self.canvas.draw_circle(center, r, &p);
                }
                if let Some(p) = stroke_paint(&style) {
                    self.canvas.draw_circle(center, r, &p);
                }
            }
            "line" => {
                if let Some(p) = stroke_paint(&style) {
                    self.canvas.draw_line(
                        (num(el, "x1"), num(el, "y1")),
                        (num(el, "x2"), num(el, "y2")),
                        &p,
                    );
                }
            }
            "path" => {
                if let Some(d) = el.get_attr("d") {
                    let path = parse_path(d);
                    if let Some(p) = fill_paint(&style) {
                        self.canvas.draw_path(&path, &p);
                    }
                    if let Some(p) = stroke_paint(&style) {
                        self.canvas.draw_path(&path, &p);
                    }
                }
            }
            "text" => {
                if let Some(color) = style.fill {
                    let x = num(el, "x") + length(el, "dx", style.font_size);
                    let y = num(el, "y") + length(el, "dy", style.font_size);
                    self.shaper.draw_anchored(
                        self.canvas,
                        &el.text_content(),
                        (x, y),
                        style.font_size,
                        to_sk(color),
                        style.anchor,
                    );
                }
            }
            other => trace!(tag = other, "skipping element"),
        }
        self.canvas.restore();
    }
}

fn fill_paint(style: &Style) -> Option<skia::Paint> {
    let color = style.fill?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_sk(color));
    Some(paint)
}

fn stroke_paint(style: &Style) -> Option<skia::Paint> {
    let color = style.stroke?;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.stroke_width);
    paint.set_color(to_sk(color));
    Some(paint)
}

/// Apply `translate(x,y)` / `rotate(deg)` functions in order.
fn apply_transform(canvas: &skia::Canvas, transform: &str) {
    for part in transform.split(')') {
        let Some((name, args)) = part.trim().split_once('(') else { continue };
        let args: Vec<f32> = args
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect();
        match (name.trim(), args.as_slice()) {
            ("translate", [x]) => { canvas.translate((*x, 0.0)); }
            ("translate", [x, y, ..]) => { canvas.translate((*x, *y)); }
            ("rotate", [deg, ..]) => { canvas.rotate(*deg, None); }
            (other, _) => trace!(function = other, "ignoring transform"),
        }
    }
}

#[derive(Debug, PartialEq)]
enum PathToken {
    Cmd(char),
    Num(f32),
}

fn tokenize_path(d: &str) -> Vec<PathToken> {
    let mut out = Vec::new();
    let mut chars = d.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_ascii_alphabetic() {
            out.push(PathToken::Cmd(c));
        } else if c.is_ascii_digit() || c == '-' || c == '.' {
            let mut end = i + c.len_utf8();
            while let Some(&(j, n)) = chars.peek() {
                if n.is_ascii_digit() || n == '.' {
                    end = j + n.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            if let Ok(v) = d[i..end].parse() {
                out.push(PathToken::Num(v));
            }
        }
    }
    out
}

/// Absolute M/L/H/V path data to a Skia path.
fn parse_path(d: &str) -> skia::Path {
    let mut path = skia::Path::new();
    let mut cur = (0.0f32, 0.0f32);
    let mut cmd = ' ';
    let mut args: Vec<f32> = Vec::new();
    let mut flush = |cmd: char, args: &[f32], path: &mut skia::Path, cur: &mut (f32, f32)| match cmd {
        'M' | 'L' => {
            for (k, pair) in args.chunks_exact(2).enumerate() {
                *cur = (pair[0], pair[1]);
                if cmd == 'M' && k == 0 {
                    path.move_to(*cur);
                } else {
                    path.line_to(*cur);
                }
            }
        }
        'H' => {
            for &x in args {
                cur.0 = x;
                path.line_to(*cur);
            }
        }
        'V' => {
            for &y in args {
                cur.1 = y;
                path.line_to(*cur);
            }
        }
        _ => {}
    };
    for tok in tokenize_path(d) {
        match tok {
            PathToken::Cmd(c) => {
                flush(cmd, &args, &mut path, &mut cur);
                cmd = c;
                args.clear();
            }
            PathToken::Num(v) => args.push(v),
        }
    }
    flush(cmd, &args, &mut path, &mut cur);
    path
}
