//! Back-substitution check for computed roots.

use crate::complex_value::ComplexValue;
use crate::solve_result::SolveResult;

const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Outcome of substituting both roots into the normalized polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifySummary {
    /// Both residuals are within tolerance.
    Verified,
    /// At least one residual exceeds tolerance.
    ResidualTooLarge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyReport {
    /// `|x² + bx + c|` for each root, on the normalized coefficients.
    pub residuals: [f64; 2],
    /// `x₁ + x₂`, expected `-b/a`.
    pub sum: ComplexValue,
    /// `x₁ · x₂`, expected `c/a`.
    pub product: ComplexValue,
    pub summary: VerifySummary,
}

impl VerifyReport {
    pub fn is_verified(&self) -> bool {
        self.summary == VerifySummary::Verified
    }
}

/// Evaluate the monic polynomial `x² + bx + c` at `x`.
pub fn evaluate_monic(b: f64, c: f64, x: ComplexValue) -> ComplexValue {
    x * x + ComplexValue::from(b) * x + ComplexValue::from(c)
}

/// Substitute `result.roots` into `x² + (b/a)x + (c/a)`.
pub fn verify(a: f64, b: f64, c: f64, result: &SolveResult) -> VerifyReport {
    let (b, c) = (b / a, c / a);
    let [x1, x2] = result.roots;

    let residuals = [
        evaluate_monic(b, c, x1).abs(),
        evaluate_monic(b, c, x2).abs(),
    ];
    let scale = 1.0_f64.max(b * b).max(c.abs());
    let tolerance = RELATIVE_TOLERANCE * scale;

    let summary = if residuals.iter().all(|r| *r <= tolerance) {
        VerifySummary::Verified
    } else {
        tracing::warn!(
            target: "vieta",
            residual_1 = residuals[0],
            residual_2 = residuals[1],
            tolerance,
            "root verification failed"
        );
        VerifySummary::ResidualTooLarge
    };

    VerifyReport {
        residuals,
        sum: x1 + x2,
        product: x1 * x2,
        summary,
    }
}
