//! Text readout of a color in the picker's switchable formats.

use std::fmt;
use std::str::FromStr;

use crate::color::{color_to_hsl, to_hex, Color};
use crate::constants;
use crate::error::FormatParseError;

/// Which string form the readout shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorFormat {
    #[default]
    Rgba,
    Hex,
    Hsla,
}

impl ColorFormat {
    /// All formats in the order the format buttons list them.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Rgba, ColorFormat::Hex, ColorFormat::Hsla];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ColorFormat::Rgba => "RGBA",
            ColorFormat::Hex => "HEX",
            ColorFormat::Hsla => "HSLA",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| FormatParseError(name.to_string()))
    }
}

/// Render `color` the way the readout displays it in `format`.
///
/// - RGBA: `RGBA(255, 0, 0, 1.00)`
/// - HEX: `#AARRGGBB`
/// - HSLA: `HSLA(0, 100.00%, 50.00%, 1.00)`
pub fn render(color: Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Rgba => {
            let (r, g, b, _) = color.to_rgba8();
            format!("RGBA({}, {}, {}, {:.2})", r, g, b, color.a())
        }
        ColorFormat::Hex => to_hex(color),
        ColorFormat::Hsla => {
            let hsl = color_to_hsl(color);
            let hue = hsl.hue.floor() as u16;
            format!(
                "HSLA({}, {:.2}%, {:.2}%, {:.2})",
                hue,
                hsl.saturation * 100.0,
                hsl.lightness * 100.0,
                color.a()
            )
        }
    }
}

/// Readout text for an optional selection; shows a prompt until the user
/// picks something.
pub fn render_selection(color: Option<&Color>, format: ColorFormat) -> String {
    match color {
        Some(c) => render(*c, format),
        None => constants::EMPTY_SELECTION_TEXT.to_string(),
    }
}
