use crate::constants::{CONTRAST_LUMINANCE_THRESHOLD, FALLBACK_EDGE_COLOR};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray used whenever a cover color is unknown.
    pub const fn fallback() -> Self {
        Self::new(FALLBACK_EDGE_COLOR.0, FALLBACK_EDGE_COLOR.1, FALLBACK_EDGE_COLOR.2)
    }

    /// Linear blend toward `other`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::fallback()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// `#rrggbb`
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// WCAG 2.0 relative luminance.
#[must_use]
pub fn luminance(rgb: Rgb) -> f64 {
    let channel = |c: u8| {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * channel(rgb.r) + 0.7152 * channel(rgb.g) + 0.0722 * channel(rgb.b)
}

/// Black or white text, whichever reads better on `background`.
#[must_use]
pub fn contrast_text_color(background: Rgb) -> Color {
    if luminance(background) > CONTRAST_LUMINANCE_THRESHOLD {
        Color::Black
    } else {
        Color::White
    }
}
