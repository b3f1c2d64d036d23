//! # swatch-picker
//!
//! Color math and pointer geometry behind an HSV color picker dialog.
//!
//! The host UI owns all widget state (current hue, alpha, selected point,
//! readout format) and calls into this crate with raw numbers: a pointer
//! offset on the saturation/value swatch becomes a `(saturation, value)`
//! pair, that pair plus the hue slider becomes a [`Color`], and the color
//! becomes the readout text.
//!
//! ## Usage
//!
//! ```rust
//! use swatch_picker::{position_to_saturation_value, render, Color, ColorFormat};
//!
//! let hue = 240.0;
//! let (s, v) = position_to_saturation_value(300.0, -10.0, 300.0, 300.0);
//! let color = Color::from_hsva(hue, s, v, 1.0);
//! assert_eq!(render(color, ColorFormat::Hsla), "HSLA(240, 100.00%, 50.00%, 1.00)");
//! ```

mod color;
pub mod constants;
mod error;
mod format;
mod math;
pub mod slider;
mod swatch;

pub use color::{color_to_hsl, color_to_hue, hsv_to_color, to_hex, Color, Hsl, Hsv};
pub use constants::presets;
pub use error::{ColorParseError, FormatParseError};
pub use format::{render, render_selection, ColorFormat};
pub use swatch::{clamp_point_to_box, position_to_saturation_value, saturation_value_to_position};
