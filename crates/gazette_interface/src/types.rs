//! Exchange types shared across collaborator boundaries.

use gazette_core::{Article, ArticleMetadata, Topic, derive_title};
use serde::{Deserialize, Serialize};

/// Everything a [`Publisher`](crate::Publisher) needs to publish one post.
///
/// The title is guaranteed non-empty for a non-empty body: when the article
/// carries no usable title, one is derived from the first body line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Topic the draft was generated for
    pub topic: Topic,
    /// Post title, already bounded to platform limits
    pub title: String,
    /// Body markup
    pub body: String,
    /// Hosted image URL to embed, when an image was produced
    pub image_url: Option<String>,
    /// SEO metadata, when generated
    pub metadata: Option<ArticleMetadata>,
}

impl PostDraft {
    /// Assemble a draft from a generated article and its optional trimmings.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_core::{Article, Topic};
    /// use gazette_interface::PostDraft;
    ///
    /// let article = Article {
    ///     topic: Topic::from("tech"),
    ///     title: String::new(),
    ///     body: "The State of Tech\n\nMuch has changed.".to_string(),
    /// };
    /// let draft = PostDraft::from_article(article, None, None);
    /// assert_eq!(draft.title, "The State of Tech");
    /// ```
    pub fn from_article(
        article: Article,
        image_url: Option<String>,
        metadata: Option<ArticleMetadata>,
    ) -> Self {
        let title = if article.title.trim().is_empty() {
            derive_title(&article.body)
        } else {
            article.title
        };

        Self {
            topic: article.topic,
            title,
            body: article.body,
            image_url,
            metadata,
        }
    }
}
