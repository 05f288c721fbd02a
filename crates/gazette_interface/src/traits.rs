//! Trait definitions for the bot's external collaborators.

use crate::PostDraft;
use async_trait::async_trait;
use gazette_core::{Article, ArticleMetadata, GeneratedImage, PostResult, Topic};
use gazette_error::GazetteResult;

/// Contract for the generative backend that writes articles, metadata, and
/// images.
///
/// Implementations make a single synchronous request per call; no streaming.
/// A failed or empty image is reported as an error and downgraded by the
/// caller, never silently swallowed here.
#[async_trait]
pub trait ContentDriver: Send + Sync {
    /// Generate a long-form article for a topic.
    ///
    /// An empty body is an error, never a valid article.
    async fn generate_article(&self, topic: &Topic) -> GazetteResult<Article>;

    /// Generate a meta description and keyword list for an article.
    async fn generate_metadata(&self, article: &Article) -> GazetteResult<ArticleMetadata>;

    /// Generate an illustrative image for a topic.
    async fn generate_image(&self, topic: &Topic) -> GazetteResult<GeneratedImage>;

    /// Provider name for log context (e.g. "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Contract for an image host that turns raw image bytes into a public URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload an image, returning its hosted URL.
    async fn upload(&self, image: &GeneratedImage) -> GazetteResult<String>;
}

/// Contract for the blog platform the bot publishes to.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish a post, returning what was actually published.
    async fn publish(&self, draft: &PostDraft) -> GazetteResult<PostResult>;
}
