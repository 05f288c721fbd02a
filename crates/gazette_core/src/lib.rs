//! Core data types for the gazette publishing bot.
//!
//! This crate provides the foundation data types used across all gazette
//! crates: topics and the topic pool, schedule slots, generated content, and
//! publish outcomes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod article;
mod post;
mod schedule;
mod topic;

pub use article::{Article, ArticleMetadata, GeneratedImage, derive_title};
pub use post::PostResult;
pub use schedule::ScheduleSlot;
pub use topic::{Topic, TopicPool};
