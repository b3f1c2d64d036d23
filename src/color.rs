//! Color value types for swatch-picker.
//!
//! [`Color`] stores RGBA as f64 values in 0.0–1.0 range. [`Hsv`] and [`Hsl`]
//! are the alternate representations the picker converts through.

use std::str::FromStr;

use crate::error::ColorParseError;
use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
///
/// Every constructor clamps, so a `Color` never holds NaN or an out-of-range
/// channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawColor"))]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl Color {
    /// Create from f64 RGBA, clamping each channel into 0.0–1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::clamp01(r),
            g: math::clamp01(g),
            b: math::clamp01(b),
            a: math::clamp01(a),
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create from 0–255 RGBA values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Create from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Convert to 0–255 RGBA, rounding each channel.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            math::channel_to_u8(self.r),
            math::channel_to_u8(self.g),
            math::channel_to_u8(self.b),
            math::channel_to_u8(self.a),
        )
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: math::clamp01(alpha),
            ..self
        }
    }

    /// Create from HSV plus alpha. Hue in degrees.
    pub fn from_hsva(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
        hsv_to_color(hue, saturation, value).with_alpha(alpha)
    }

    /// Convert to HSL. Alpha is dropped.
    pub fn to_hsl(&self) -> Hsl {
        color_to_hsl(*self)
    }

    /// Convert to HSV. Alpha is dropped.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::from_color(*self)
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f64 {
        color_to_hue(*self)
    }

    /// Format as `#AARRGGBB`, uppercase.
    pub fn to_hex(&self) -> String {
        to_hex(*self)
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 digits).
    ///
    /// 8-digit hex is interpreted as AARRGGBB, the order [`to_hex`] writes.
    /// 3 and 6-digit hex default to full opacity.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let stripped = hex.trim().trim_start_matches('#');
        if stripped.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(c) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            log::debug!("rejecting hex color {hex:?}: bad digit {c:?}");
            return Err(ColorParseError::InvalidDigit(c));
        }

        let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16);
        let nibble = |i: usize| u8::from_str_radix(&stripped[i..i + 1], 16).map(|n| n * 17);

        let color = match stripped.len() {
            3 => Self::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?),
            6 => Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?),
            8 => Self::from_rgba8(byte(2)?, byte(4)?, byte(6)?, byte(0)?),
            len => {
                log::debug!("rejecting hex color {hex:?}: {len} digits");
                return Err(ColorParseError::InvalidLength(len));
            }
        };
        Ok(color)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Hue/saturation/value triple. Hue in degrees, `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawHsv"))]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: math::normalize_hue(hue),
            saturation: math::clamp01(saturation),
            value: math::clamp01(value),
        }
    }

    /// Opaque RGB color for this HSV triple.
    pub fn to_color(&self) -> Color {
        hsv_to_color(self.hue, self.saturation, self.value)
    }

    /// Decompose a color into HSV. Gray colors report hue 0.
    pub fn from_color(color: Color) -> Self {
        let (hue, saturation, value) = math::rgb_to_hsv(color.r, color.g, color.b);
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Hue/saturation/lightness triple, used for the HSLA readout.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawHsl"))]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: math::normalize_hue(hue),
            saturation: math::clamp01(saturation),
            lightness: math::clamp01(lightness),
        }
    }
}

/// HSV → opaque RGB.
///
/// `hue` is expected in `[0, 360)`; anything else is wrapped first, so 360
/// behaves like 0. Saturation and value are clamped to 0.0–1.0.
pub fn hsv_to_color(hue: f64, saturation: f64, value: f64) -> Color {
    let (r, g, b) = math::hsv_to_rgb(hue, saturation, value);
    Color { r, g, b, a: 1.0 }
}

/// Hue of `color` in degrees. Keeps a hue slider in sync with a color that
/// was set directly, e.g. from a preset.
pub fn color_to_hue(color: Color) -> f64 {
    color_to_hsl(color).hue
}

/// HSL decomposition of `color`. Gray and extremal lightness report
/// saturation 0.
pub fn color_to_hsl(color: Color) -> Hsl {
    let (hue, saturation, lightness) = math::rgb_to_hsl(color.r, color.g, color.b);
    Hsl {
        hue,
        saturation,
        lightness,
    }
}

/// `#AARRGGBB`, uppercase, each channel rounded to the nearest byte.
pub fn to_hex(color: Color) -> String {
    let (r, g, b, a) = color.to_rgba8();
    format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
}

/// Wire shape of [`Color`]; deserialized values go through [`Color::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

#[cfg(feature = "serde")]
impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Color::new(raw.r, raw.g, raw.b, raw.a)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

#[cfg(feature = "serde")]
impl From<RawHsv> for Hsv {
    fn from(raw: RawHsv) -> Self {
        Hsv::new(raw.hue, raw.saturation, raw.value)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

#[cfg(feature = "serde")]
impl From<RawHsl> for Hsl {
    fn from(raw: RawHsl) -> Self {
        Hsl::new(raw.hue, raw.saturation, raw.lightness)
    }
}
