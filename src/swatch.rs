//! Saturation/value swatch geometry.
//!
//! The swatch is a `width` × `height` box for a fixed hue: saturation grows
//! left to right, value shrinks top to bottom. Pointer coordinates are
//! relative to the box's top-left corner and may lie outside it while a drag
//! is in progress.

use crate::math;

/// Clamp a coordinate into `[0, extent]`. A non-positive extent collapses to 0.
fn clamp_axis(pos: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        math::clamp(pos, 0.0, extent)
    } else {
        0.0
    }
}

/// Map a pointer offset to `(saturation, value)`.
///
/// A zero-sized axis yields 0 for that component instead of dividing by zero.
pub fn position_to_saturation_value(
    offset_x: f64,
    offset_y: f64,
    box_width: f64,
    box_height: f64,
) -> (f64, f64) {
    let saturation = if box_width > 0.0 {
        math::clamp01(clamp_axis(offset_x, box_width) / box_width)
    } else {
        0.0
    };
    let value = if box_height > 0.0 {
        math::clamp01(1.0 - clamp_axis(offset_y, box_height) / box_height)
    } else {
        0.0
    };
    (saturation, value)
}

/// Map `(saturation, value)` back to the marker position inside the box.
pub fn saturation_value_to_position(
    saturation: f64,
    value: f64,
    box_width: f64,
    box_height: f64,
) -> (f64, f64) {
    let x = math::clamp01(saturation) * box_width.max(0.0);
    let y = (1.0 - math::clamp01(value)) * box_height.max(0.0);
    (x, y)
}

/// Keep a point inside the box, each axis independently.
///
/// Used to pin the selection marker to the swatch while a drag reports
/// coordinates outside it.
pub fn clamp_point_to_box(x: f64, y: f64, box_width: f64, box_height: f64) -> (f64, f64) {
    (clamp_axis(x, box_width), clamp_axis(y, box_height))
}
