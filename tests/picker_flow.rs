//! Drives the core the way the picker dialog does: swatch drags, hue slider
//! moves, and preset taps.

use swatch_picker::constants::PRESET_COLORS;
use swatch_picker::slider::hue_from_position;
use swatch_picker::{
    clamp_point_to_box, color_to_hue, position_to_saturation_value, presets, render,
    render_selection, saturation_value_to_position, Color, ColorFormat,
};

const BOX: f64 = 300.0;

#[test]
fn drag_then_hue_change_recomputes_from_same_point() {
    // drag past the top-right corner
    let marker = clamp_point_to_box(340.0, -20.0, BOX, BOX);
    assert_eq!(marker, (BOX, 0.0));

    let (s, v) = position_to_saturation_value(marker.0, marker.1, BOX, BOX);
    let red = Color::from_hsva(0.0, s, v, 1.0);
    assert_eq!(render(red, ColorFormat::Rgba), "RGBA(255, 0, 0, 1.00)");

    // hue slider moves to its far end; the selected point stays put
    let hue = hue_from_position(1000.0, 224.0);
    assert_eq!(hue, 360.0);
    let wrapped = Color::from_hsva(hue, s, v, 1.0);
    assert_eq!(wrapped, red);

    let hue = hue_from_position(112.0, 224.0);
    let cyan = Color::from_hsva(hue, s, v, 0.5);
    assert_eq!(render(cyan, ColorFormat::Hex), "#8000FFFF");
}

#[test]
fn preset_tap_syncs_hue_slider() {
    for (argb, color) in PRESET_COLORS.iter().zip(presets()) {
        let hue = color_to_hue(color);
        assert!((0.0..360.0).contains(&hue), "{argb:08X} gave hue {hue}");
        assert_eq!(Color::from_argb(*argb), color);
    }
    // yellow preset #FFEB3B
    let hue = color_to_hue(presets()[4]);
    assert!((hue - 54.0).abs() < 0.5, "got {hue}");
}

#[test]
fn marker_follows_hsv_of_picked_color() {
    let color = Color::from_hex("#FF336699").unwrap();
    let hsv = color.to_hsv();
    let (x, y) = saturation_value_to_position(hsv.saturation, hsv.value, BOX, BOX);
    let (s, v) = position_to_saturation_value(x, y, BOX, BOX);
    let back = Color::from_hsva(hsv.hue, s, v, color.a());
    assert_eq!(render(back, ColorFormat::Hex), "#FF336699");
}

#[test]
fn readout_before_selection() {
    assert_eq!(render_selection(None, ColorFormat::Rgba), "Select a color");
}
