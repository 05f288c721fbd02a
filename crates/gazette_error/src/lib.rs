//! Error types for the gazette publishing bot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use gazette_error::{ConfigError, GazetteResult};
//!
//! fn load_settings() -> GazetteResult<String> {
//!     Err(ConfigError::new("topic pool is empty"))?
//! }
//!
//! match load_settings() {
//!     Ok(s) => println!("Got: {}", s),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod publish;
mod store;

pub use config::ConfigError;
pub use error::{GazetteError, GazetteErrorKind, GazetteResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use publish::{PublishError, PublishErrorKind};
pub use store::{StoreError, StoreErrorKind};
