//! solve subcommand handler.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use vieta_api_models::{CoefficientsJson, ErrorJsonOutput, SolveJsonOutput};
use vieta_core::{solve, verify};

use crate::config::{OutputFormat, VietaConfig};
use crate::input::{Coefficients, InputError};
use crate::render;

/// Arguments for solve subcommand
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Leading coefficient (must be non-zero)
    #[arg(allow_negative_numbers = true)]
    pub a: String,

    /// Linear coefficient
    #[arg(allow_negative_numbers = true)]
    pub b: String,

    /// Constant term
    #[arg(allow_negative_numbers = true)]
    pub c: String,

    /// Print only the roots, without the derivation
    #[arg(long)]
    pub no_steps: bool,

    /// Substitute the roots back and report the residuals
    #[arg(long)]
    pub verify: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Effective options after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub format: OutputFormat,
    pub show_steps: bool,
    pub verify: bool,
}

impl SolveOptions {
    pub fn resolve(args: &SolveArgs, config: &VietaConfig) -> Self {
        Self {
            format: args.format.unwrap_or(config.format),
            show_steps: config.show_steps && !args.no_steps,
            verify: config.verify || args.verify,
        }
    }
}

/// Run the solve command
pub fn run(args: SolveArgs, config: &VietaConfig) -> Result<ExitCode> {
    let options = SolveOptions::resolve(&args, config);

    let coeffs = match Coefficients::parse(&args.a, &args.b, &args.c) {
        Ok(coeffs) => coeffs,
        Err(e) => {
            report_input_error(&e, options.format)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let output = render_solution(coeffs, options)?;
    print!("{}", output);
    Ok(ExitCode::SUCCESS)
}

/// Solve validated coefficients and render them in the requested format.
pub fn render_solution(coeffs: Coefficients, options: SolveOptions) -> Result<String> {
    let Coefficients { a, b, c } = coeffs;
    tracing::info!(a, b, c, "solving quadratic");

    let result = solve(a, b, c);
    let report = options.verify.then(|| verify(a, b, c, &result));

    match options.format {
        OutputFormat::Json => {
            let mut out = SolveJsonOutput::new(CoefficientsJson { a, b, c }, &result);
            if let Some(report) = &report {
                out = out.with_verification(report);
            }
            if !options.show_steps {
                out = out.without_steps();
            }
            Ok(format!("{}\n", to_pretty_json(&out)?))
        }
        OutputFormat::Text => {
            let mut out = format!("Equation: {}\n\n", vieta_core::equation_display(a, b, c));
            out.push_str(&render::render_roots(&result));
            if let Some(report) = &report {
                out.push_str(&render::render_verification(report));
            }
            if options.show_steps {
                out.push('\n');
                out.push_str(&render::render_steps(&result.steps));
            }
            Ok(out)
        }
    }
}

fn report_input_error(e: &InputError, format: OutputFormat) -> Result<()> {
    tracing::debug!(code = e.code(), "rejected input: {}", e);
    match format {
        OutputFormat::Json => {
            let out = ErrorJsonOutput::new("InputError", e.code(), e.to_string());
            println!("{}", to_pretty_json(&out)?);
        }
        OutputFormat::Text => eprintln!("Error: {}", e),
    }
    Ok(())
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
