//! Hue and alpha slider geometry.
//!
//! A slider track is `track_width` wide and its round thumb has radius
//! `thumb_radius`. The thumb center travels from `thumb_radius` to
//! `track_width - thumb_radius`, so the usable travel is the track width
//! minus the thumb diameter.

use std::ops::RangeInclusive;

use crate::color::{hsv_to_color, Color};
use crate::constants;
use crate::math;

fn travel(track_width: f64, thumb_radius: f64) -> f64 {
    track_width - 2.0 * thumb_radius.max(0.0)
}

/// Map a pointer x coordinate on the track to a value in `range`.
///
/// A track too narrow for the thumb yields `range.start()`.
pub fn position_to_slider_value(
    x: f64,
    track_width: f64,
    thumb_radius: f64,
    range: RangeInclusive<f64>,
) -> f64 {
    let (start, end) = (*range.start(), *range.end());
    let travel = travel(track_width, thumb_radius);
    if !(travel > 0.0) {
        return start;
    }
    let t = (x - thumb_radius.max(0.0)) / travel;
    math::clamp(t * (end - start) + start, start.min(end), start.max(end))
}

/// Center x of the thumb for `value`. Inverse of [`position_to_slider_value`].
pub fn slider_value_to_thumb_center(
    value: f64,
    track_width: f64,
    thumb_radius: f64,
    range: RangeInclusive<f64>,
) -> f64 {
    let (start, end) = (*range.start(), *range.end());
    let radius = thumb_radius.max(0.0);
    let travel = travel(track_width, thumb_radius);
    let span = end - start;
    if !(travel > 0.0) || span == 0.0 {
        return radius;
    }
    let t = math::clamp01((value - start) / span);
    radius + t * travel
}

/// Hue slider value for a pointer x, using the default thumb.
pub fn hue_from_position(x: f64, track_width: f64) -> f64 {
    position_to_slider_value(x, track_width, constants::THUMB_RADIUS, constants::HUE_RANGE)
}

/// Alpha slider value for a pointer x, using the default thumb.
pub fn alpha_from_position(x: f64, track_width: f64) -> f64 {
    position_to_slider_value(x, track_width, constants::THUMB_RADIUS, constants::ALPHA_RANGE)
}

/// Fully saturated colors every `step_degrees` from 0 to 360 inclusive, for
/// the hue track gradient.
pub fn hue_track_stops(step_degrees: f64) -> Vec<Color> {
    if !(step_degrees > 0.0) {
        return vec![hsv_to_color(0.0, 1.0, 1.0), hsv_to_color(360.0, 1.0, 1.0)];
    }
    let step_degrees = step_degrees.max(360.0 / (constants::MAX_HUE_STOPS - 1) as f64);
    let count = (360.0 / step_degrees).floor() as usize;
    let mut stops: Vec<Color> = (0..=count)
        .map(|i| hsv_to_color(i as f64 * step_degrees, 1.0, 1.0))
        .collect();
    // step doesn't divide 360 evenly: still close the gradient at 360
    if (count as f64 * step_degrees) < 360.0 {
        stops.push(hsv_to_color(360.0, 1.0, 1.0));
    }
    stops
}

/// Alpha track endpoints: `color` fully transparent, then fully opaque.
pub fn alpha_track_stops(color: Color) -> (Color, Color) {
    (color.with_alpha(0.0), color.with_alpha(1.0))
}
