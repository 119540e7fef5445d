//! Quadratic solving by Vieta's relations (midpoint ± offset).
//!
//! The roots of `x² + bx + c = 0` are written as `m + u` and `m - u` where
//! `m = -b/2` is their average. The product relation `(m + u)(m - u) = c`
//! gives `u² = (b/2)² - c`, whose sign decides between a real pair and a
//! complex-conjugate pair. Every reduction is narrated as a [`SolveStep`].
//!
//! [`SolveStep`]: crate::step::SolveStep

use crate::complex_value::ComplexValue;
use crate::numeric::{fixed4, plain, TOLERANCE};
use crate::solve_result::SolveResult;
use crate::step::{SolveStep, StepLog};

pub const ORIGINAL_EQUATION_MESSAGE: &str = "Original equation:";
pub const ALREADY_MONIC_MESSAGE: &str = "Since a = 1, we can work with the equation directly.";
pub const AVERAGE_MESSAGE: &str =
    "By Vieta's formulas the two roots add up to -b, so their average is:";
pub const ROOTS_AS_OFFSET_MESSAGE: &str = "Write the roots as:";
pub const PRODUCT_RELATION_MESSAGE: &str = "Using Vieta's second formula (x₁ × x₂ = c):";
pub const SIMPLIFY_MESSAGE: &str = "Simplifying:";
pub const SOLVE_FOR_U_SQUARED_MESSAGE: &str = "Solving for u²:";
pub const REAL_OFFSET_MESSAGE: &str = "Since u² ≥ 0, the roots are real:";
pub const COMPLEX_OFFSET_MESSAGE: &str = "Since u² < 0, the roots are complex:";
pub const REAL_ROOTS_MESSAGE: &str = "Therefore the roots are:";
pub const COMPLEX_ROOTS_MESSAGE: &str = "Therefore the complex roots are:";

/// Narration for dividing through by a non-unit leading coefficient.
pub fn normalize_message(a: f64) -> String {
    let a = plain(a);
    format!("Since a = {} ≠ 1, divide the whole equation by {}:", a, a)
}

/// Render `{a}x² + {b}x + {c} = 0` with coefficients as given.
pub fn equation_display(a: f64, b: f64, c: f64) -> String {
    format!("{}x² + {}x + {} = 0", plain(a), plain(b), plain(c))
}

/// Solve `ax² + bx + c = 0`.
///
/// Requires `a ≠ 0` and finite inputs; the caller validates both. The
/// function itself never fails.
pub fn solve(a: f64, b: f64, c: f64) -> SolveResult {
    let mut steps = StepLog::new();

    steps.push(ORIGINAL_EQUATION_MESSAGE, equation_display(a, b, c));

    let ((b, c), normalize_step) = normalize(a, b, c);
    steps.append(normalize_step);

    let average = -b / 2.0;
    steps.push(
        AVERAGE_MESSAGE,
        format!("average = -b/2 = {}", fixed4(average)),
    );
    steps.push(
        ROOTS_AS_OFFSET_MESSAGE,
        format!(
            "x₁ = {avg} + u  and  x₂ = {avg} - u",
            avg = fixed4(average)
        ),
    );

    let b_half = b / 2.0;
    let b_half_sq = b_half * b_half;
    let discriminant_like = b_half_sq - c;

    steps.push(
        PRODUCT_RELATION_MESSAGE,
        format!(
            "({avg} + u)({avg} - u) = {c}",
            avg = fixed4(average),
            c = fixed4(c)
        ),
    );
    steps.push(
        SIMPLIFY_MESSAGE,
        format!("{} - u² = {}", fixed4(b_half_sq), fixed4(c)),
    );
    steps.push(
        SOLVE_FOR_U_SQUARED_MESSAGE,
        format!(
            "u² = {} - {} = {}",
            fixed4(b_half_sq),
            fixed4(c),
            fixed4(discriminant_like)
        ),
    );

    let (roots, [offset_step, roots_step]) = if discriminant_like >= 0.0 {
        real_pair(average, discriminant_like)
    } else {
        complex_pair(average, discriminant_like)
    };
    steps.append(offset_step);
    steps.append(roots_step);

    tracing::debug!(
        target: "vieta",
        b,
        c,
        discriminant_like,
        real = discriminant_like >= 0.0,
        steps = steps.len(),
        "solved quadratic"
    );

    SolveResult {
        roots,
        steps: steps.into_steps(),
        discriminant_like,
    }
}

/// Divide through by `a` when it is not 1; returns the monic `(b, c)` and its step.
fn normalize(a: f64, b: f64, c: f64) -> ((f64, f64), SolveStep) {
    if (a - 1.0).abs() > TOLERANCE {
        let (b, c) = (b / a, c / a);
        let step = SolveStep::with_formula(
            normalize_message(a),
            format!("x² + {}x + {} = 0", fixed4(b), fixed4(c)),
        );
        ((b, c), step)
    } else {
        let step = SolveStep::with_formula(
            ALREADY_MONIC_MESSAGE,
            format!("x² + {}x + {} = 0", plain(b), plain(c)),
        );
        ((b, c), step)
    }
}

/// Roots `average ± u` for `u² >= 0`, with the offset and result steps.
fn real_pair(average: f64, discriminant_like: f64) -> ([ComplexValue; 2], [SolveStep; 2]) {
    let u = ComplexValue::sqrt_of(discriminant_like).real();
    let offset = SolveStep::with_formula(REAL_OFFSET_MESSAGE, format!("u = ±{}", fixed4(u)));

    let x1 = ComplexValue::new(average + u, 0.0);
    let x2 = ComplexValue::new(average - u, 0.0);
    let roots = SolveStep::with_formula(
        REAL_ROOTS_MESSAGE,
        format!(
            "x₁ = {avg} + {u} = {x1}\nx₂ = {avg} - {u} = {x2}",
            avg = fixed4(average),
            u = fixed4(u),
            x1 = x1,
            x2 = x2
        ),
    );
    ([x1, x2], [offset, roots])
}

/// Roots `average ± u·i` for `u² < 0`, with the offset and result steps.
fn complex_pair(average: f64, discriminant_like: f64) -> ([ComplexValue; 2], [SolveStep; 2]) {
    let u = ComplexValue::sqrt_of(-discriminant_like).real();
    let offset = SolveStep::with_formula(COMPLEX_OFFSET_MESSAGE, format!("u = ±{}i", fixed4(u)));

    let x1 = ComplexValue::new(average, u);
    let x2 = x1.conj();
    let roots = SolveStep::with_formula(COMPLEX_ROOTS_MESSAGE, format!("x₁ = {}\nx₂ = {}", x1, x2));
    ([x1, x2], [offset, roots])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve_result::RootKind;

    fn formulas(result: &SolveResult) -> Vec<&str> {
        result
            .steps
            .iter()
            .map(|s| s.formula.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn distinct_real_roots() {
        let result = solve(1.0, -3.0, 2.0);
        assert_eq!(result.roots[0].format(), "2.0000");
        assert_eq!(result.roots[1].format(), "1.0000");
        assert_eq!(result.discriminant_like, 0.25);
        assert_eq!(result.kind(), RootKind::DistinctReal);
    }

    #[test]
    fn distinct_real_roots_narration() {
        let result = solve(1.0, -3.0, 2.0);
        assert_eq!(
            formulas(&result),
            vec![
                "1x² + -3x + 2 = 0",
                "x² + -3x + 2 = 0",
                "average = -b/2 = 1.5000",
                "x₁ = 1.5000 + u  and  x₂ = 1.5000 - u",
                "(1.5000 + u)(1.5000 - u) = 2.0000",
                "2.2500 - u² = 2.0000",
                "u² = 2.2500 - 2.0000 = 0.2500",
                "u = ±0.5000",
                "x₁ = 1.5000 + 0.5000 = 2.0000\nx₂ = 1.5000 - 0.5000 = 1.0000",
            ]
        );
        assert_eq!(result.steps[0].text, ORIGINAL_EQUATION_MESSAGE);
        assert_eq!(result.steps[1].text, ALREADY_MONIC_MESSAGE);
        assert_eq!(result.steps[7].text, REAL_OFFSET_MESSAGE);
        assert_eq!(result.steps[8].text, REAL_ROOTS_MESSAGE);
    }

    #[test]
    fn purely_imaginary_pair() {
        let result = solve(1.0, 0.0, 1.0);
        assert_eq!(result.discriminant_like, -1.0);
        assert_eq!(result.roots[0], ComplexValue::new(0.0, 1.0));
        assert_eq!(result.roots[1].imag(), -1.0);
        // magnitude-only rendering for purely imaginary values
        assert_eq!(result.roots[0].format(), "1.0000i");
        assert_eq!(result.roots[1].format(), "1.0000i");
        assert_eq!(result.steps[2].formula.as_deref(), Some("average = -b/2 = 0.0000"));
        assert_eq!(result.steps[7].formula.as_deref(), Some("u = ±1.0000i"));
    }

    #[test]
    fn normalizes_and_finds_double_root() {
        let result = solve(2.0, 4.0, 2.0);
        assert_eq!(result.steps[1].text, normalize_message(2.0));
        assert_eq!(
            result.steps[1].formula.as_deref(),
            Some("x² + 2.0000x + 1.0000 = 0")
        );
        assert_eq!(result.discriminant_like, 0.0);
        assert_eq!(result.roots[0].format(), "-1.0000");
        assert_eq!(result.roots[1].format(), "-1.0000");
        assert_eq!(result.kind(), RootKind::DoubleRoot);
    }

    #[test]
    fn complex_conjugate_pair() {
        let result = solve(1.0, 2.0, 5.0);
        assert_eq!(result.discriminant_like, -4.0);
        assert_eq!(result.roots[0].format(), "-1.0000 + 2.0000i");
        assert_eq!(result.roots[1].format(), "-1.0000 - 2.0000i");
        assert_eq!(result.steps[7].text, COMPLEX_OFFSET_MESSAGE);
        assert_eq!(
            result.steps[8].formula.as_deref(),
            Some("x₁ = -1.0000 + 2.0000i\nx₂ = -1.0000 - 2.0000i")
        );
        assert_eq!(result.kind(), RootKind::ComplexConjugate);
    }

    #[test]
    fn normalize_step_alone() {
        let ((b, c), step) = normalize(4.0, 2.0, -8.0);
        assert_eq!((b, c), (0.5, -2.0));
        assert_eq!(step.text, "Since a = 4 ≠ 1, divide the whole equation by 4:");
        assert_eq!(step.formula.as_deref(), Some("x² + 0.5000x + -2.0000 = 0"));

        let ((b, c), step) = normalize(1.0, 0.5, 3.0);
        assert_eq!((b, c), (0.5, 3.0));
        assert_eq!(step.formula.as_deref(), Some("x² + 0.5x + 3 = 0"));
    }

    #[test]
    fn branch_helpers_return_their_steps() {
        let (roots, [offset, result]) = real_pair(1.5, 0.25);
        assert_eq!(roots, [ComplexValue::new(2.0, 0.0), ComplexValue::new(1.0, 0.0)]);
        assert_eq!(offset.formula.as_deref(), Some("u = ±0.5000"));
        assert_eq!(result.text, REAL_ROOTS_MESSAGE);

        let (roots, [offset, result]) = complex_pair(-1.0, -4.0);
        assert_eq!(roots[1], roots[0].conj());
        assert_eq!(offset.text, COMPLEX_OFFSET_MESSAGE);
        assert_eq!(
            result.formula.as_deref(),
            Some("x₁ = -1.0000 + 2.0000i\nx₂ = -1.0000 - 2.0000i")
        );
    }

    #[test]
    fn tiny_negative_offset_takes_complex_branch_but_classifies_as_double_root() {
        let result = solve(1.0, 2.0, 1.0 + 5e-11);
        assert!(result.discriminant_like < 0.0);
        assert_eq!(result.kind(), RootKind::DoubleRoot);
        assert_eq!(result.steps[7].text, COMPLEX_OFFSET_MESSAGE);
        assert_eq!(result.steps[7].formula.as_deref(), Some("u = ±0.0000i"));
        assert!(result.roots[0].imag() > 0.0);
        assert_eq!(result.roots[1], result.roots[0].conj());
        assert_eq!(result.roots[0].format(), "-1.0000 + 0.0000i");
        assert_eq!(result.roots[1].format(), "-1.0000 - 0.0000i");
    }

    #[test]
    fn always_nine_steps() {
        for (a, b, c) in [(1.0, -3.0, 2.0), (2.0, 4.0, 2.0), (1.0, 2.0, 5.0), (-3.0, 1.5, 7.0)] {
            assert_eq!(solve(a, b, c).steps.len(), 9);
        }
    }

    #[test]
    fn leading_coefficient_within_tolerance_is_not_normalized() {
        let result = solve(1.0 + 1e-12, -3.0, 2.0);
        assert_eq!(result.steps[1].text, ALREADY_MONIC_MESSAGE);
    }

    #[test]
    fn negative_leading_coefficient() {
        let result = solve(-1.0, 0.0, 4.0);
        assert_eq!(result.steps[1].text, "Since a = -1 ≠ 1, divide the whole equation by -1:");
        assert_eq!(result.roots[0].format(), "2.0000");
        assert_eq!(result.roots[1].format(), "-2.0000");
    }

    #[test]
    fn original_equation_keeps_raw_coefficients() {
        let result = solve(2.5, -0.5, 3.0);
        assert_eq!(
            result.steps[0].formula.as_deref(),
            Some("2.5x² + -0.5x + 3 = 0")
        );
    }
}
