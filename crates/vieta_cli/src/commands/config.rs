//! config subcommand handler.

use std::path::Path;

use anyhow::Result;
use clap::Subcommand;

use crate::config::VietaConfig;

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Overwrite the config file with defaults
    Reset,
}

pub fn run(action: ConfigAction, config: &VietaConfig, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Reset => {
            VietaConfig::restore(path)?;
            println!("Configuration reset to defaults in {}", path.display());
        }
    }
    Ok(())
}
