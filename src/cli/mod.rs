// src/cli/mod.rs — CLI definition (clap derive)

pub mod config;
pub mod summary;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jonodoro",
    about = "Work/break interval timer: breaks scale with the work you did",
    version
)]
pub struct Cli {
    /// Break fraction to start with (e.g. "1/3", "0.25", "1")
    #[arg(short, long)]
    pub fraction: Option<String>,

    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (overridden by JONODORO_LOG / RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer (default when no subcommand is given)
    Run,
    /// Show the effective configuration
    Config {
        /// Only print where the config file is read from
        #[arg(long)]
        path: bool,
    },
}
