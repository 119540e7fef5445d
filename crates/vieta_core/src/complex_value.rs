//! Immutable complex value used for quadratic roots.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::numeric::{fixed4, is_near_zero};

/// A complex number `real + imag·i` in double precision.
///
/// Components are stored verbatim: NaN and infinities pass through unchecked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexValue {
    real: f64,
    imag: f64,
}

impl ComplexValue {
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Principal square root of a real number.
    ///
    /// Nonnegative input gives `(sqrt(value), 0)`; negative input gives
    /// `(0, sqrt(-value))`.
    pub fn sqrt_of(value: f64) -> Self {
        if value >= 0.0 {
            Self::new(value.sqrt(), 0.0)
        } else {
            Self::new(0.0, (-value).sqrt())
        }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imag(&self) -> f64 {
        self.imag
    }

    /// True when the imaginary part is zero within tolerance.
    pub fn is_real(&self) -> bool {
        is_near_zero(self.imag)
    }

    pub fn conj(&self) -> Self {
        Self::new(self.real, -self.imag)
    }

    /// Modulus `|z|`.
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Canonical 4-decimal rendering (same as `Display`).
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_near_zero(self.imag) {
            return write!(f, "{}", fixed4(self.real));
        }

        let imag_abs = fixed4(self.imag.abs());
        if is_near_zero(self.real) {
            // Purely imaginary: magnitude only, the sign of imag is not shown.
            return write!(f, "{}i", imag_abs);
        }

        let sign = if self.imag >= 0.0 { '+' } else { '-' };
        write!(f, "{} {} {}i", fixed4(self.real), sign, imag_abs)
    }
}

impl From<f64> for ComplexValue {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl Add for ComplexValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for ComplexValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Mul for ComplexValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + self.imag * rhs.real,
        )
    }
}

impl Neg for ComplexValue {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_values_render_without_imaginary_part() {
        assert_eq!(ComplexValue::new(3.0, 0.0).format(), "3.0000");
        assert_eq!(ComplexValue::new(-1.0, 5e-11).format(), "-1.0000");
    }

    #[test]
    fn purely_imaginary_shows_magnitude_only() {
        assert_eq!(ComplexValue::new(0.0, 1.0).format(), "1.0000i");
        assert_eq!(ComplexValue::new(0.0, -1.0).format(), "1.0000i");
        assert_eq!(ComplexValue::new(-0.0, 2.5).format(), "2.5000i");
    }

    #[test]
    fn general_complex_uses_sign_of_imag() {
        assert_eq!(ComplexValue::new(-1.0, 2.0).format(), "-1.0000 + 2.0000i");
        assert_eq!(ComplexValue::new(-1.0, -2.0).format(), "-1.0000 - 2.0000i");
        assert_eq!(ComplexValue::new(0.5, 0.25).format(), "0.5000 + 0.2500i");
    }

    #[test]
    fn format_is_stable() {
        let z = ComplexValue::new(1.23456, -7.891011);
        assert_eq!(z.format(), z.format());
        assert_eq!(z.format(), z.to_string());
    }

    #[test]
    fn sqrt_of_nonnegative_is_real() {
        assert_eq!(ComplexValue::sqrt_of(4.0), ComplexValue::new(2.0, 0.0));
        assert_eq!(ComplexValue::sqrt_of(0.0), ComplexValue::new(0.0, 0.0));
    }

    #[test]
    fn sqrt_of_negative_is_imaginary() {
        assert_eq!(ComplexValue::sqrt_of(-9.0), ComplexValue::new(0.0, 3.0));
    }

    #[test]
    fn arithmetic_follows_complex_rules() {
        let a = ComplexValue::new(1.0, 2.0);
        let b = ComplexValue::new(3.0, -1.0);
        assert_eq!(a + b, ComplexValue::new(4.0, 1.0));
        assert_eq!(a - b, ComplexValue::new(-2.0, 3.0));
        assert_eq!(a * b, ComplexValue::new(5.0, 5.0));
        assert_eq!(-a, ComplexValue::new(-1.0, -2.0));
        assert_eq!(a * a.conj(), ComplexValue::new(5.0, 0.0));
    }

    #[test]
    fn nan_passes_through() {
        let z = ComplexValue::new(f64::NAN, 0.0);
        assert!(z.real().is_nan());
    }
}
