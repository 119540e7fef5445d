use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod input;
mod render;
mod repl;

use config::{VietaConfig, DEFAULT_CONFIG_FILE};

/// Solve quadratic equations step by step with Vieta's relations.
#[derive(Parser, Debug)]
#[command(name = "vieta_cli", version, about)]
struct Cli {
    /// Config file (defaults to ./vieta_config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve ax² + bx + c = 0 and explain the derivation
    Solve(commands::solve::SolveArgs),
    /// Show the equation for the given (possibly partial) coefficients
    Preview(commands::preview::PreviewArgs),
    /// Interactive session
    Repl,
    /// Inspect or reset the config file
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    // Logs go to stderr so JSON on stdout stays parseable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = VietaConfig::load_from(&config_path);
    tracing::debug!(?config, path = %config_path.display(), "loaded config");

    let outcome = match cli.command {
        Command::Solve(args) => commands::solve::run(args, &config),
        Command::Preview(args) => {
            commands::preview::run(args);
            Ok(ExitCode::SUCCESS)
        }
        Command::Repl => repl::Repl::new(&config)
            .run()
            .map(|_| ExitCode::SUCCESS)
            .map_err(anyhow::Error::from),
        Command::Config { action } => {
            commands::config::run(action, &config, &config_path).map(|_| ExitCode::SUCCESS)
        }
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
