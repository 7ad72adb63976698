// src/main.rs — Jonodoro entry point

use std::path::Path;

use clap::Parser;

use jonodoro::cli::{Cli, Commands};
use jonodoro::infra::config::Config;
use jonodoro::infra::errors::JonodoroError;
use jonodoro::infra::logger;
use jonodoro::timer::Fraction;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(Path::new(path))?
    } else {
        Config::load()?
    };
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());

    match cli.command {
        Some(Commands::Config { path }) => {
            logger::init_logging(&level);
            jonodoro::cli::config::show_config(&config, cli.config.as_deref().map(Path::new), path)
        }
        Some(Commands::Run) | None => {
            let fraction = cli
                .fraction
                .unwrap_or_else(|| config.timer.default_fraction.clone());
            // Reject a bad --fraction before taking over the terminal.
            fraction
                .parse::<Fraction>()
                .map_err(JonodoroError::MalformedFraction)?;

            logger::init_file_logging(&level, &config.logging.file_path())?;
            tracing::info!(fraction = %fraction, "timer started");

            let sessions = jonodoro::tui::run_timer(&config, fraction)?;
            tracing::info!(sessions = sessions.len(), "timer closed");
            jonodoro::cli::summary::print_summary(&sessions);
            Ok(())
        }
    }
}
