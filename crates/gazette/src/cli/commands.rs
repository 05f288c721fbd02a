//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gazette - scheduled AI blog publishing bot
#[derive(Parser, Debug)]
#[command(name = "gazette")]
#[command(about = "Scheduled AI blog publishing bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the publishing loop until terminated
    Run {
        /// Path to the configuration TOML file
        #[arg(long, default_value = "gazette.toml")]
        config: PathBuf,
    },

    /// Show topic eligibility from the persisted ledger
    Status {
        /// Path to the configuration TOML file
        #[arg(long, default_value = "gazette.toml")]
        config: PathBuf,
    },
}
