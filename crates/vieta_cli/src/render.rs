//! Plain-text rendering of solve results.

use std::fmt::Write;

use vieta_core::{RootKind, SolveResult, SolveStep, VerifyReport};

/// Equation preview from raw input; empty fields show their letter.
pub fn equation_preview(a: Option<&str>, b: Option<&str>, c: Option<&str>) -> String {
    fn field<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => placeholder,
        }
    }
    format!(
        "{}x² + {}x + {} = 0",
        field(a, "a"),
        field(b, "b"),
        field(c, "c")
    )
}

pub fn kind_indicator(kind: RootKind) -> &'static str {
    match kind {
        RootKind::DoubleRoot => "Double root (both roots are equal)",
        RootKind::DistinctReal => "Distinct real roots",
        RootKind::ComplexConjugate => "Complex conjugate roots",
    }
}

pub fn render_roots(result: &SolveResult) -> String {
    let mut out = String::new();
    for (i, root) in result.roots.iter().enumerate() {
        let _ = writeln!(out, "Root {}:", i + 1);
        let _ = writeln!(out, "  x{} = {}", i + 1, root);
    }
    let _ = writeln!(out, "{}", kind_indicator(result.kind()));
    out
}

pub fn render_steps(steps: &[SolveStep]) -> String {
    let mut out = String::from("Steps:\n");
    for (i, step) in steps.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, step.text);
        if let Some(formula) = &step.formula {
            for line in formula.lines() {
                let _ = writeln!(out, "      {}", line);
            }
        }
    }
    out
}

pub fn render_verification(report: &VerifyReport) -> String {
    let status = if report.is_verified() {
        "verified"
    } else {
        "FAILED"
    };
    format!(
        "Check: {} (x₁ + x₂ = {}, x₁ · x₂ = {}, residuals {:.2e} / {:.2e})\n",
        status, report.sum, report.product, report.residuals[0], report.residuals[1]
    )
}
