//! Scalar-to-color transfer functions.
//!
//! Three independent scales, each a pure function from a normalized value in
//! [0, 1] to RGB. Out-of-range input is clamped. Normalization of raw
//! metrics into the domain is owned by the caller, including the guard that
//! substitutes 1.0 for a zero-valued divisor.

use globe_common::Rgb;

/// Visitor-magnitude scale: yellow at 0, orange at 0.7, dark red at 1.
pub fn visitor_color(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.7 {
        // Yellow fading to orange.
        Rgb::new(255, (255.0 * (0.7 - t) / 0.7).round() as u8, 0)
    } else {
        // Orange darkening to red.
        Rgb::new((255.0 - 116.0 * (t - 0.7) / 0.3).round() as u8, 0, 0)
    }
}

/// Density scale: blue at 0 fading toward dark green at 1.
///
/// The caller applies the companion rule that forces the single
/// maximum-density feature to pure black; see the driver's density variant.
pub fn density_color(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb::new(
        (46.0 * t).round() as u8,
        (102.0 - 94.0 * t).round() as u8,
        (255.0 - 171.0 * t).round() as u8,
    )
}

/// Diverging change scale: red at 0 (max decrease), neutral gray at 0.5,
/// purple at 1 (max increase). Both one-sided limits at 0.5 agree on
/// (232, 232, 232).
pub fn change_color(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.5 {
        let factor = t * 2.0;
        Rgb::new(
            (204.0 + 28.0 * factor).round() as u8,
            (232.0 * factor).round() as u8,
            (232.0 * factor).round() as u8,
        )
    } else {
        let factor = (t - 0.5) * 2.0;
        Rgb::new(
            (232.0 - 125.0 * factor).round() as u8,
            (232.0 - 188.0 * factor).round() as u8,
            (232.0 - 87.0 * factor).round() as u8,
        )
    }
}
