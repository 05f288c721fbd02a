//! Gazette CLI binary.
//!
//! Runs the scheduled publishing loop, or reports the current state of the
//! topic ledger.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_bot, show_status};

    // Load .env before anything reads credentials
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Run { config } => {
            run_bot(&config).await?;
        }

        Commands::Status { config } => {
            show_status(&config)?;
        }
    }

    Ok(())
}
