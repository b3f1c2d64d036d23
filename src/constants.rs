//! Picker defaults, ranges, and the preset palette.

use std::ops::RangeInclusive;

use crate::color::Color;

/// Hue slider range in degrees
pub const HUE_RANGE: RangeInclusive<f64> = 0.0..=360.0;

/// Alpha slider range
pub const ALPHA_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 12.0;

/// Spacing between hue track gradient stops, in degrees
pub const HUE_STOP_STEP: f64 = 10.0;

/// Most stops a hue track gradient will hold (one per degree, both ends)
pub const MAX_HUE_STOPS: usize = 361;

/// Readout text before anything has been picked
pub const EMPTY_SELECTION_TEXT: &str = "Select a color";

/// Preset swatches as packed `0xAARRGGBB`.
pub const PRESET_COLORS: [u32; 6] = [
    0xFF4CAF50, // green
    0xFF2196F3, // blue
    0xFF9C27B0, // purple
    0xFFF44336, // red
    0xFFFFEB3B, // yellow
    0xFF795548, // brown
];

/// The preset palette, in display order.
pub fn presets() -> Vec<Color> {
    PRESET_COLORS.iter().copied().map(Color::from_argb).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_opaque() {
        let presets = presets();
        assert_eq!(presets.len(), PRESET_COLORS.len());
        assert!(presets.iter().all(|c| c.a() == 1.0));
        assert_eq!(presets[3].to_hex(), "#FFF44336");
    }
}
