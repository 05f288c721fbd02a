//! Collaborator contracts for the gazette publishing bot.
//!
//! The bot core only ever talks to its external collaborators (the
//! generative backend, the image host, and the blog platform) through the
//! traits defined here, so each can be swapped or mocked independently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ContentDriver, ImageHost, Publisher};
pub use types::PostDraft;
