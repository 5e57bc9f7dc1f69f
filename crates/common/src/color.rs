//! Color representation and manipulation.

use std::fmt;

/// Opaque RGB color with 8-bit components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to hue (degrees), saturation and value, the latter two on a 0-255 scale.
    fn to_hsv(self) -> (f32, f32, f32) {
        let (r, g, b) = (self.r as f32, self.g as f32, self.b as f32);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta * 255.0 / max };
        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        (hue, saturation, max)
    }

    fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let chroma = value * saturation / 255.0;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let m = value - chroma;

        let (r, g, b) = match (sector as u32) % 6 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |c: f32| (c + m).round().clamp(0.0, 255.0) as u8;
        Color::rgb(channel(r), channel(g), channel(b))
    }

    /// Lighten the color by scaling its HSV value by `factor` percent.
    ///
    /// When the scaled value overflows, the excess is taken out of the
    /// saturation instead, so very bright colors drift towards white.
    /// Factors below 100 leave the color unchanged.
    pub fn lighter(&self, factor: u32) -> Color {
        if factor <= 100 {
            return *self;
        }

        let (hue, mut saturation, value) = self.to_hsv();
        let mut value = value * factor as f32 / 100.0;
        if value > 255.0 {
            saturation = (saturation - (value - 255.0)).max(0.0);
            value = 255.0;
        }

        Color::from_hsv(hue, saturation, value)
    }

    /// Format as a CSS hex color (`#rrggbb`).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
