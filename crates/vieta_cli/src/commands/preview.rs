//! preview subcommand handler.

use clap::Args;

use crate::render::equation_preview;

/// Arguments for preview subcommand
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Leading coefficient, shown as `a` when omitted
    #[arg(allow_negative_numbers = true)]
    pub a: Option<String>,

    #[arg(allow_negative_numbers = true)]
    pub b: Option<String>,

    #[arg(allow_negative_numbers = true)]
    pub c: Option<String>,
}

pub fn run(args: PreviewArgs) {
    println!(
        "{}",
        equation_preview(args.a.as_deref(), args.b.as_deref(), args.c.as_deref())
    );
}
