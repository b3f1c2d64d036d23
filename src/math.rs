//! Color math — direct conversions without external dependencies.
//! Hue is in degrees (0.0–360.0), every other component is 0.0–1.0.

/// Width of one hue sector in degrees.
const SECTOR: f64 = 60.0;

/// Clamp `v` into `[lo, hi]`. NaN maps to `lo`.
pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    // f64::clamp panics on an inverted or NaN range
    if !(lo <= hi) {
        return lo;
    }
    if v.is_nan() {
        log::trace!("clamped NaN to {lo}");
        return lo;
    }
    let clamped = v.clamp(lo, hi);
    if clamped != v {
        log::trace!("clamped {v} into [{lo}, {hi}]");
    }
    clamped
}

pub(crate) fn clamp01(v: f64) -> f64 {
    clamp(v, 0.0, 1.0)
}

/// Wrap a hue into `[0, 360)`. NaN and infinities map to 0.
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// HSV → RGB. Hue in degrees, saturation and value 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = normalize_hue(h);
    let s = clamp01(s);
    let v = clamp01(v);

    let c = v * s;
    let x = c * (1.0 - ((h / SECTOR) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (clamp01(r + m), clamp01(g + m), clamp01(b + m))
}

/// Hue of an RGB triple in degrees, `[0, 360)`. Gray yields 0.
fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    normalize_hue(sector * SECTOR)
}

/// RGB → HSL. Returns (hue degrees, saturation, lightness).
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (clamp01(r), clamp01(g), clamp01(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue_from_rgb(r, g, b, max, delta);
    let l = (max + min) / 2.0;
    let denom = 1.0 - (2.0 * l - 1.0).abs();
    let s = if delta == 0.0 || denom <= 0.0 {
        0.0
    } else {
        clamp01(delta / denom)
    };

    (h, s, clamp01(l))
}

/// RGB → HSV. Returns (hue degrees, saturation, value).
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (clamp01(r), clamp01(g), clamp01(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue_from_rgb(r, g, b, max, delta);
    let s = if max == 0.0 { 0.0 } else { clamp01(delta / max) };

    (h, s, max)
}

/// Scale a 0.0–1.0 channel to a byte, rounding to nearest.
pub(crate) fn channel_to_u8(v: f64) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}
