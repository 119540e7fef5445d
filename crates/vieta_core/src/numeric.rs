//! Numeric tolerance and display helpers shared by the solver and renderers.

/// Absolute tolerance used for every comparison against zero.
pub const TOLERANCE: f64 = 1e-10;

/// Check if a value is zero within [`TOLERANCE`].
pub fn is_near_zero(x: f64) -> bool {
    x.abs() < TOLERANCE
}

/// Fixed-point rendering with 4 decimal places.
///
/// Negative zero prints as `0.0000` (rounding of tiny negatives such as
/// `-1e-12` still keeps the sign, as the standard formatter does).
pub fn fixed4(x: f64) -> String {
    format!("{:.4}", strip_negative_zero(x))
}

/// Natural rendering of a coefficient as the caller supplied it (`1`, `-3`, `2.5`).
///
/// Magnitudes from `1e21` up or below `1e-6` switch to exponent form with an
/// explicit exponent sign (`1e+21`, `1e-7`).
pub fn plain(x: f64) -> String {
    let x = strip_negative_zero(x);
    let magnitude = x.abs();
    if x == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", x);
    }
    let text = format!("{:e}", x);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

fn strip_negative_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}
