// src/cli/config.rs — `jonodoro config`: print the effective configuration.

use std::path::Path;

use crate::infra::config::Config;
use crate::infra::paths;

pub fn show_config(config: &Config, source: Option<&Path>, path_only: bool) -> anyhow::Result<()> {
    let default_path = paths::config_file_path();
    let path = source.unwrap_or(default_path.as_path());

    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if path.exists() {
        println!("# {} (loaded)", path.display());
    } else {
        println!("# {} (not found, using defaults)", path.display());
    }
    println!("# log file: {}", config.logging.file_path().display());
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
