//! Publish cycle outcomes.

use crate::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of one successful publish cycle.
///
/// # Examples
///
/// ```
/// use gazette_core::{PostResult, Topic};
/// use chrono::Utc;
///
/// let result = PostResult {
///     topic: Topic::from("tech"),
///     title: "All About Tech".to_string(),
///     url: None,
///     published_at: Utc::now(),
/// };
/// assert_eq!(result.topic.as_str(), "tech");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResult {
    /// Topic consumed by this cycle
    pub topic: Topic,
    /// Title the post was published under
    pub title: String,
    /// Post URL, when the backend returns one
    pub url: Option<String>,
    /// Publish timestamp
    pub published_at: DateTime<Utc>,
}
