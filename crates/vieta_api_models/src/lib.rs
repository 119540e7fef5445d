//! Serializable output models for the non-interactive CLI.
//!
//! A stable, schema-versioned JSON shape for solve results and errors,
//! usable by scripts and frontends without linking `vieta_core` types.

use serde::{Deserialize, Serialize};
use vieta_core::{ComplexValue, SolveResult, SolveStep, VerifyReport};

/// Current schema version for the JSON output.
pub const SCHEMA_VERSION: u32 = 1;

/// Coefficient triple `(a, b, c)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CoefficientsJson {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// One root with its canonical display and raw components.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RootJson {
    pub display: String,
    pub real: f64,
    pub imag: f64,
}

impl From<&ComplexValue> for RootJson {
    fn from(z: &ComplexValue) -> Self {
        Self {
            display: z.format(),
            real: z.real(),
            imag: z.imag(),
        }
    }
}

/// One derivation step (1-based index).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepJson {
    pub index: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub formula: Option<String>,
}

impl StepJson {
    pub fn from_step(index: usize, step: &SolveStep) -> Self {
        Self {
            index,
            text: step.text.clone(),
            formula: step.formula.clone(),
        }
    }
}

/// Back-substitution check summary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerificationJson {
    pub verified: bool,
    pub residuals: [f64; 2],
    pub sum: String,
    pub product: String,
}

impl From<&VerifyReport> for VerificationJson {
    fn from(report: &VerifyReport) -> Self {
        Self {
            verified: report.is_verified(),
            residuals: report.residuals,
            sum: report.sum.format(),
            product: report.product.format(),
        }
    }
}

/// Successful solve.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolveJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub input: CoefficientsJson,
    /// Monic coefficients after dividing through by `a`.
    pub normalized: CoefficientsJson,
    pub roots: Vec<RootJson>,
    pub kind: String,
    pub kind_label: String,
    pub discriminant_like: f64,
    pub steps: Vec<StepJson>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub verification: Option<VerificationJson>,
}

impl SolveJsonOutput {
    pub fn new(input: CoefficientsJson, result: &SolveResult) -> Self {
        let kind = result.kind();
        Self {
            schema_version: SCHEMA_VERSION,
            ok: true,
            input,
            normalized: CoefficientsJson {
                a: 1.0,
                b: input.b / input.a,
                c: input.c / input.a,
            },
            roots: result.roots.iter().map(RootJson::from).collect(),
            kind: kind.as_str().to_string(),
            kind_label: kind.label().to_string(),
            discriminant_like: result.discriminant_like,
            steps: result
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| StepJson::from_step(i + 1, step))
                .collect(),
            verification: None,
        }
    }

    pub fn with_verification(mut self, report: &VerifyReport) -> Self {
        self.verification = Some(report.into());
        self
    }

    /// Drop the derivation, keeping only the roots.
    pub fn without_steps(mut self) -> Self {
        self.steps.clear();
        self
    }
}

/// Failed request, with a stable machine-readable code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub kind: String,
    pub code: String,
    pub error: String,
}

impl ErrorJsonOutput {
    pub fn new(kind: impl Into<String>, code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            kind: kind.into(),
            code: code.into(),
            error: error.into(),
        }
    }
}
