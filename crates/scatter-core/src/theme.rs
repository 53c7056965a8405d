// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, backend-agnostic.

use crate::record::ColorCategory;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
        let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS value; opaque colors use hex, translucent ones `rgba()`.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            self.to_hex()
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, f64::from(self.a) / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub title: Color,
    pub mark_stroke: Color,
    pub clean: Color,
    pub flagged: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Theme {
    /// Category10 palette on white, as the classic browser rendition draws it.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::rgb(0x22, 0x22, 0x22),
            axis_label: Color::rgb(0x22, 0x22, 0x22),
            title: Color::rgb(0x11, 0x11, 0x11),
            mark_stroke: Color::BLACK,
            clean: Color::rgb(0x2c, 0xa0, 0x2c),
            flagged: Color::rgb(0xff, 0x7f, 0x0e),
            tooltip_background: Color::rgba(0x1f, 0x77, 0xb4, 230),
            tooltip_text: Color::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            title: Color::rgb(235, 235, 245),
            mark_stroke: Color::rgb(10, 10, 12),
            clean: Color::rgb(40, 200, 120),
            flagged: Color::rgb(220, 80, 80),
            tooltip_background: Color::rgba(40, 40, 45, 235),
            tooltip_text: Color::rgb(235, 235, 245),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::rgb(0x00, 0x00, 0x00),
            axis_line: Color::rgb(0xff, 0xff, 0xff),
            axis_label: Color::rgb(0xff, 0xff, 0xff),
            title: Color::rgb(0xff, 0xff, 0xff),
            mark_stroke: Color::rgb(0xff, 0xff, 0xff),
            clean: Color::rgb(0x00, 0xff, 0x00),
            flagged: Color::rgb(0xff, 0x00, 0x00),
            tooltip_background: Color::rgb(0x22, 0x22, 0x22),
            tooltip_text: Color::rgb(0xff, 0xff, 0x00),
        }
    }

    pub fn category_color(&self, category: ColorCategory) -> Color {
        match category {
            ColorCategory::Clean => self.clean,
            ColorCategory::Flagged => self.flagged,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
