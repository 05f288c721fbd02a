//! Command-line interface module.
//!
//! Provides the CLI structure and command handlers for the gazette binary.

mod commands;
mod run;
mod status;

pub use commands::{Cli, Commands};
pub use run::run_bot;
pub use status::show_status;
