//! Color types, color space conversions and categorical palettes.
//!
//! Provides RGBA and HSLA color representations with conversions between them,
//! plus the qualitative palettes used to color hue levels.

use crate::error::{Error, Result};
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Medium gray used for outlines and error bars.
    pub const GRAY: Self = Self::new(61, 61, 61, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the string is not a hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let bad = || Error::InvalidParameter(format!("invalid hex color {hex:?}"));
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#rrggbb` (alpha is dropped).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }

    /// Blend toward white by `amount` (0 = unchanged, 1 = white).
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        self.lerp(Self::WHITE.with_alpha(self.a), amount)
    }

    /// Reduce saturation to `prop` of its current value.
    ///
    /// Filled areas (boxes, violins, bars) use a slightly desaturated version
    /// of the palette color.
    #[must_use]
    pub fn desaturate(self, prop: f32) -> Self {
        let mut hsla = Hsla::from_rgba(self);
        hsla.s *= prop.clamp(0.0, 1.0);
        hsla.to_rgba()
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// HSLA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    /// Hue (0.0-360.0 degrees).
    pub h: f32,
    /// Saturation (0.0-1.0).
    pub s: f32,
    /// Lightness (0.0-1.0).
    pub l: f32,
    /// Alpha (0.0-1.0).
    pub a: f32,
}

impl Hsla {
    /// Create a new HSLA color.
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Create an opaque HSL color (alpha = 1.0).
    #[must_use]
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Convert from RGBA.
    #[must_use]
    pub fn from_rgba(c: Rgba) -> Self {
        let r = f32::from(c.r) / 255.0;
        let g = f32::from(c.g) / 255.0;
        let b = f32::from(c.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let a = f32::from(c.a) / 255.0;

        if (max - min).abs() < f32::EPSILON {
            return Self::new(0.0, 0.0, l, a);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if (max - r).abs() < f32::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f32::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h * 60.0, s, l, a)
    }

    /// Convert to RGBA.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let h = self.h / 360.0;
        let s = self.s;
        let l = self.l;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;

            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgba::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}

const DEEP: [u32; 10] = [
    0x4C72B0, 0xDD8452, 0x55A868, 0xC44E52, 0x8172B3, 0x937860, 0xDA8BC3, 0x8C8C8C, 0xCCB974,
    0x64B5CD,
];
const MUTED: [u32; 10] = [
    0x4878D0, 0xEE854A, 0x6ACC64, 0xD65F5F, 0x956CB4, 0x8C613C, 0xDC7EC0, 0x797979, 0xD5BB67,
    0x82C6E2,
];
const PASTEL: [u32; 10] = [
    0xA1C9F4, 0xFFB482, 0x8DE5A1, 0xFF9F9B, 0xD0BBFF, 0xDEBB9B, 0xFAB0E4, 0xCFCFCF, 0xFFFEA3,
    0xB9F2F0,
];
const COLORBLIND: [u32; 10] = [
    0x0173B2, 0xDE8F05, 0x029E73, 0xD55E00, 0xCC78BC, 0xCA9161, 0xFBAFE4, 0x949494, 0xECE133,
    0x56B4E9,
];

const fn from_u32(v: u32) -> Rgba {
    Rgba::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// Qualitative palette used to color hue levels.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Palette {
    /// Default ten-color palette.
    #[default]
    Deep,
    /// Lower-saturation variant of `Deep`.
    Muted,
    /// Light variant.
    Pastel,
    /// Palette distinguishable under common color-vision deficiencies.
    Colorblind,
    /// Evenly spaced hues in HSL space (any number of levels).
    Hls,
    /// Explicit color list, cycled.
    Custom(Vec<Rgba>),
}

impl Palette {
    /// Produce `n` colors. Fixed palettes cycle when `n` exceeds their size.
    #[must_use]
    pub fn colors(&self, n: usize) -> Vec<Rgba> {
        let cycle = |table: &[u32]| -> Vec<Rgba> {
            (0..n).map(|i| from_u32(table[i % table.len()])).collect()
        };
        match self {
            Palette::Deep => cycle(&DEEP),
            Palette::Muted => cycle(&MUTED),
            Palette::Pastel => cycle(&PASTEL),
            Palette::Colorblind => cycle(&COLORBLIND),
            Palette::Hls => (0..n)
                .map(|i| {
                    let h = 360.0 * i as f32 / n.max(1) as f32 + 3.6;
                    Hsla::hsl(h % 360.0, 0.65, 0.6).to_rgba()
                })
                .collect(),
            Palette::Custom(list) if list.is_empty() => cycle(&DEEP),
            Palette::Custom(list) => (0..n).map(|i| list[i % list.len()]).collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "deep" => Ok(Palette::Deep),
            "muted" => Ok(Palette::Muted),
            "pastel" => Ok(Palette::Pastel),
            "colorblind" => Ok(Palette::Colorblind),
            "hls" | "husl" => Ok(Palette::Hls),
            _ => s
                .split(',')
                .map(|c| Rgba::from_hex(c.trim()))
                .collect::<Result<Vec<_>>>()
                .map(Palette::Custom)
                .map_err(|_| Error::InvalidParameter(format!("unknown palette {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_hsla_to_rgba() {
        let red = Hsla::hsl(0.0, 1.0, 0.5).to_rgba();
        assert_eq!(red, Rgba::rgb(255, 0, 0));

        let gray = Hsla::hsl(0.0, 0.0, 0.5).to_rgba();
        assert_eq!(gray.r, 128);
        assert_eq!(gray.r, gray.b);
    }

    #[test]
    fn test_hsla_roundtrip_palette_color() {
        let c = Rgba::from_hex("#4C72B0").unwrap();
        let back = Hsla::from_rgba(c).to_rgba();
        assert!((i16::from(back.r) - i16::from(c.r)).abs() <= 1);
        assert!((i16::from(back.g) - i16::from(c.g)).abs() <= 1);
        assert!((i16::from(back.b) - i16::from(c.b)).abs() <= 1);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#ff0000").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::from_hex("00ff0080").unwrap(), Rgba::new(0, 255, 0, 128));
        assert!(Rgba::from_hex("#ff00").is_err());
        assert!(Rgba::from_hex("#gg0000").is_err());
        assert_eq!(Rgba::rgb(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn test_desaturate_gray_stays_gray() {
        let gray = Rgba::rgb(128, 128, 128);
        assert_eq!(gray.desaturate(0.75), gray);
    }

    #[test]
    fn test_desaturate_reduces_spread() {
        let c = Rgba::from_hex("#C44E52").unwrap();
        let d = c.desaturate(0.5);
        let spread = |c: Rgba| i16::from(c.r.max(c.g).max(c.b)) - i16::from(c.r.min(c.g).min(c.b));
        assert!(spread(d) < spread(c));
    }

    #[test]
    fn test_lighten() {
        let c = Rgba::rgb(0, 0, 0).lighten(1.0);
        assert_eq!(c, Rgba::WHITE);
        assert_eq!(Rgba::rgb(10, 20, 30).lighten(0.0), Rgba::rgb(10, 20, 30));
    }

    #[test]
    fn test_palette_cycles() {
        let colors = Palette::Deep.colors(12);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors[0], colors[10]);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn test_palette_hls_distinct() {
        let colors = Palette::Hls.colors(15);
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn test_palette_from_str() {
        assert_eq!("muted".parse::<Palette>().unwrap(), Palette::Muted);
        let custom: Palette = "#000000, #ffffff".parse().unwrap();
        assert_eq!(custom.colors(3), vec![Rgba::BLACK, Rgba::WHITE, Rgba::BLACK]);
        assert!("rainbow-ish".parse::<Palette>().is_err());
    }
}
