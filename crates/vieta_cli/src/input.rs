//! Coefficient parsing and validation.
//!
//! The solver assumes finite coefficients and a non-zero leading term, so
//! every entry point goes through [`Coefficients::parse`] first.

use thiserror::Error;
use vieta_core::is_near_zero;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("coefficient '{name}' is not a number: '{value}'")]
    NotNumeric { name: char, value: String },

    #[error("coefficient '{name}' must be finite, got '{value}'")]
    NotFinite { name: char, value: String },

    #[error("coefficient 'a' cannot be 0 (the equation would not be quadratic)")]
    ZeroLeading,

    #[error("expected 3 coefficients (a b c), got {0}")]
    WrongArity(usize),
}

impl InputError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::ZeroLeading => "E_DEGENERATE",
            _ => "E_INPUT",
        }
    }
}

/// Validated coefficients of `ax² + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn parse(a: &str, b: &str, c: &str) -> Result<Self, InputError> {
        let coeffs = Self {
            a: parse_coefficient('a', a)?,
            b: parse_coefficient('b', b)?,
            c: parse_coefficient('c', c)?,
        };
        if is_near_zero(coeffs.a) {
            return Err(InputError::ZeroLeading);
        }
        coeffs.check_normalized()?;
        Ok(coeffs)
    }

    /// The solver divides by `a` and squares `b/2a`; both must stay finite.
    fn check_normalized(&self) -> Result<(), InputError> {
        let (b, c) = (self.b / self.a, self.c / self.a);
        if !b.is_finite() {
            return Err(InputError::NotFinite {
                name: 'b',
                value: format!("b/a = {}", b),
            });
        }
        if !c.is_finite() {
            return Err(InputError::NotFinite {
                name: 'c',
                value: format!("c/a = {}", c),
            });
        }
        let half = b / 2.0;
        let offset_squared = half * half - c;
        if !offset_squared.is_finite() {
            return Err(InputError::NotFinite {
                name: 'b',
                value: format!("(b/2a)² - c/a = {}", offset_squared),
            });
        }
        Ok(())
    }

    /// Parse a line of three coefficients separated by whitespace or commas.
    pub fn parse_line(line: &str) -> Result<Self, InputError> {
        let parts: Vec<&str> = line
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|part| !part.is_empty())
            .collect();
        match parts.as_slice() {
            [a, b, c] => Self::parse(a, b, c),
            _ => Err(InputError::WrongArity(parts.len())),
        }
    }
}

fn parse_coefficient(name: char, raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw.trim().parse().map_err(|_| InputError::NotNumeric {
        name,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            name,
            value: raw.to_string(),
        });
    }
    Ok(value)
}
