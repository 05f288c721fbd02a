//! Generated article content and its metadata.

use crate::Topic;
use serde::{Deserialize, Serialize};

/// Longest title the publish backend accepts.
pub const MAX_TITLE_LEN: usize = 70;

/// Longest meta description the publish backend accepts.
pub const MAX_DESCRIPTION_LEN: usize = 160;

/// A generated long-form article for one topic.
///
/// # Examples
///
/// ```
/// use gazette_core::{Article, Topic};
///
/// let article = Article {
///     topic: Topic::from("wildlife"),
///     title: "All About Wildlife".to_string(),
///     body: "Wildlife is everywhere...".to_string(),
/// };
/// assert!(!article.body.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// The topic the article was generated for
    pub topic: Topic,
    /// Post title
    pub title: String,
    /// Long-form body markup
    pub body: String,
}

/// SEO metadata generated alongside an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Short description, at most [`MAX_DESCRIPTION_LEN`] characters
    pub description: String,
    /// Keyword labels, already split and trimmed
    pub keywords: Vec<String>,
}

impl ArticleMetadata {
    /// Build metadata from raw model output: a free-form description and a
    /// comma-separated keyword string.
    ///
    /// The description is truncated to [`MAX_DESCRIPTION_LEN`] characters;
    /// keywords are split on commas, trimmed, and empties dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_core::ArticleMetadata;
    ///
    /// let meta = ArticleMetadata::from_raw("A short summary.", "tech, ai, , apps ");
    /// assert_eq!(meta.keywords, vec!["tech", "ai", "apps"]);
    /// ```
    pub fn from_raw(description: &str, keyword_csv: &str) -> Self {
        Self {
            description: truncate_chars(description.trim(), MAX_DESCRIPTION_LEN),
            keywords: parse_keywords(keyword_csv),
        }
    }
}

/// An image generated for a topic, held as raw bytes until upload.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    /// Encoded image bytes
    pub data: Vec<u8>,
    /// MIME type reported by the generator (e.g. `image/png`)
    pub mime_type: String,
}

/// Derive a post title from the first line of an article body, bounded to
/// [`MAX_TITLE_LEN`] characters.
///
/// Leading markdown heading markers are stripped so `# All About Tech`
/// titles cleanly. Returns an empty string only for an empty body.
///
/// # Examples
///
/// ```
/// use gazette_core::derive_title;
///
/// assert_eq!(derive_title("# The Quiet History of Tea\n\nTea began..."),
///            "The Quiet History of Tea");
/// ```
pub fn derive_title(body: &str) -> String {
    let first_line = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let headline = first_line.trim_start_matches('#').trim();
    truncate_chars(headline, MAX_TITLE_LEN)
}

fn parse_keywords(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

/// Truncate on a char boundary so multi-byte text cannot split mid-character.
fn truncate_chars(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].trim_end().to_string()
}
