//! Gazette - scheduled AI blog publishing bot.
//!
//! Gazette wakes at configured times of day, picks a topic that has not been
//! used inside its cooldown window, asks Gemini for an article, SEO
//! metadata, and an illustrative image, uploads the image, and publishes the
//! post to a Blogger blog. Used topics are recorded in a persisted ledger so
//! content rotates instead of repeating.
//!
//! # Architecture
//!
//! Gazette is organized as a workspace with focused crates:
//!
//! - `gazette_core` - Core data types (Topic, ScheduleSlot, Article, ...)
//! - `gazette_error` - Error types
//! - `gazette_interface` - Collaborator trait contracts
//! - `gazette_store` - Persisted topic ledger
//! - `gazette_models` - Gemini content driver
//! - `gazette_publish` - Blogger and imgbb clients
//! - `gazette_bot` - Scheduler loop, selector, configuration
//!
//! This crate (`gazette`) re-exports everything for convenience and owns
//! the `gazette` binary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gazette::{BloggerClient, GazetteBot, GazetteConfig, GeminiWriter, ImgbbHost};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GazetteConfig::from_file("gazette.toml")?;
//!     let driver = GeminiWriter::new(
//!         config.generation.text_model.clone(),
//!         config.generation.image_model.clone(),
//!     )?;
//!     let host = ImgbbHost::new()?;
//!     let publisher = BloggerClient::new(config.blog_id.clone())?;
//!
//!     GazetteBot::new(config, driver, host, publisher).run().await;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use gazette_bot::{
    GazetteBot, GazetteConfig, GenerationConfig, POLL_INTERVAL, POST_FIRE_COOLDOWN, SlotClock,
    cycle, selector,
};
pub use gazette_core::{
    Article, ArticleMetadata, GeneratedImage, PostResult, ScheduleSlot, Topic, TopicPool,
    derive_title,
};
pub use gazette_error::{
    ConfigError, GazetteError, GazetteErrorKind, GazetteResult, GenerationError,
    GenerationErrorKind, PublishError, PublishErrorKind, StoreError, StoreErrorKind,
};
pub use gazette_interface::{ContentDriver, ImageHost, PostDraft, Publisher};
pub use gazette_models::GeminiWriter;
pub use gazette_publish::{BloggerClient, ImgbbHost};
pub use gazette_store::{LEDGER_VERSION, TopicLedger};
