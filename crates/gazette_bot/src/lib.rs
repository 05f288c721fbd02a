//! Scheduler loop and orchestration for the gazette publishing bot.
//!
//! This crate owns the pieces between configuration and the collaborator
//! interfaces: the [`SlotClock`] deciding when a cycle fires, the topic
//! [`selector`], the [`cycle`] sequencing one publish, and the
//! [`GazetteBot`] polling loop tying them together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bot;
mod clock;
mod config;
pub mod cycle;
pub mod selector;

pub use bot::{GazetteBot, POLL_INTERVAL, POST_FIRE_COOLDOWN};
pub use clock::SlotClock;
pub use config::{GazetteConfig, GenerationConfig};
