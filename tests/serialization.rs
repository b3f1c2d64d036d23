#![cfg(feature = "serde")]

use swatch_picker::{render, Color, ColorFormat, Hsl, Hsv};

#[test]
fn color_serializes_as_channels() {
    let c = Color::new(1.0, 0.5, 0.0, 0.25);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"r":1.0,"g":0.5,"b":0.0,"a":0.25}"#);
    assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), c);
}

#[test]
fn format_and_hsv_round_trip() {
    let json = serde_json::to_string(&ColorFormat::Hsla).unwrap();
    assert_eq!(json, r#""Hsla""#);
    assert_eq!(serde_json::from_str::<ColorFormat>(&json).unwrap(), ColorFormat::Hsla);

    let hsv = Hsv::new(200.0, 0.5, 0.75);
    let back: Hsv = serde_json::from_str(&serde_json::to_string(&hsv).unwrap()).unwrap();
    assert_eq!(back, hsv);
}

#[test]
fn deserializing_clamps_out_of_range_channels() {
    let c: Color = serde_json::from_str(r#"{"r":2.0,"g":-1.0,"b":0.0,"a":3.5}"#).unwrap();
    assert_eq!(c, Color::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(render(c, ColorFormat::Rgba), "RGBA(255, 0, 0, 1.00)");
    assert_eq!(render(c, ColorFormat::Hsla), "HSLA(0, 100.00%, 50.00%, 1.00)");
}

#[test]
fn deserializing_normalizes_hsv_and_hsl() {
    let hsv: Hsv =
        serde_json::from_str(r#"{"hue":420.0,"saturation":1.5,"value":-0.5}"#).unwrap();
    assert_eq!(hsv, Hsv::new(60.0, 1.0, 0.0));

    let hsl: Hsl =
        serde_json::from_str(r#"{"hue":-120.0,"saturation":2.0,"lightness":0.25}"#).unwrap();
    assert_eq!(hsl, Hsl::new(240.0, 1.0, 0.25));
    assert!((0.0..360.0).contains(&hsl.hue));
}
