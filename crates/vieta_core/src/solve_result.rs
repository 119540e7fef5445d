//! Solver output and root classification.

use crate::complex_value::ComplexValue;
use crate::numeric::is_near_zero;
use crate::step::SolveStep;

/// Everything one solve produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// `[x₁, x₂]` in derivation order (`average + u`, then `average - u`).
    pub roots: [ComplexValue; 2],
    pub steps: Vec<SolveStep>,
    /// `(b/2)² - c` of the normalized equation.
    pub discriminant_like: f64,
}

impl SolveResult {
    pub fn kind(&self) -> RootKind {
        RootKind::classify(self.discriminant_like)
    }
}

/// Nature of the root pair, derived from `discriminant_like`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    DoubleRoot,
    DistinctReal,
    ComplexConjugate,
}

impl RootKind {
    pub fn classify(discriminant_like: f64) -> Self {
        if is_near_zero(discriminant_like) {
            RootKind::DoubleRoot
        } else if discriminant_like > 0.0 {
            RootKind::DistinctReal
        } else {
            RootKind::ComplexConjugate
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RootKind::DoubleRoot => "double root",
            RootKind::DistinctReal => "distinct real roots",
            RootKind::ComplexConjugate => "complex conjugate roots",
        }
    }

    /// Stable machine name (`snake_case`).
    pub fn as_str(&self) -> &'static str {
        match self {
            RootKind::DoubleRoot => "double_root",
            RootKind::DistinctReal => "distinct_real",
            RootKind::ComplexConjugate => "complex_conjugate",
        }
    }
}
