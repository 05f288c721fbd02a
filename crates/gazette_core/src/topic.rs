//! Topics and the configured topic pool.

use gazette_error::{ConfigError, GazetteResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A labeled subject from the configured pool, the unit of content
/// generation and de-duplication.
///
/// # Examples
///
/// ```
/// use gazette_core::Topic;
///
/// let topic = Topic::from("wildlife");
/// assert_eq!(topic.as_str(), "wildlife");
/// assert_eq!(topic.to_string(), "wildlife");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// The topic label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The topic label in title case, for use in post titles.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_core::Topic;
    ///
    /// assert_eq!(Topic::from("apps history").title_case(), "Apps History");
    /// ```
    pub fn title_case(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<String> for Topic {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&str> for Topic {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// The ordered set of topics configured at startup, immutable during a run.
///
/// Construction rejects an empty pool and duplicate labels, so every
/// downstream selection operates on a non-empty pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPool(Vec<Topic>);

impl TopicPool {
    /// Build a validated pool from topic labels.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the pool is empty or a label
    /// appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_core::TopicPool;
    ///
    /// let pool = TopicPool::new(vec!["history".into(), "tech".into()]).unwrap();
    /// assert_eq!(pool.len(), 2);
    ///
    /// assert!(TopicPool::new(vec![]).is_err());
    /// ```
    pub fn new(topics: Vec<Topic>) -> GazetteResult<Self> {
        if topics.is_empty() {
            return Err(ConfigError::new("topic pool is empty").into());
        }

        let mut seen = HashSet::new();
        for topic in &topics {
            if !seen.insert(topic.as_str()) {
                return Err(
                    ConfigError::new(format!("duplicate topic in pool: {}", topic)).into(),
                );
            }
        }

        Ok(Self(topics))
    }

    /// The topics in configuration order.
    pub fn topics(&self) -> &[Topic] {
        &self.0
    }

    /// Iterate over the topics in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Topic> {
        self.0.iter()
    }

    /// Number of topics in the pool.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an empty pool cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a TopicPool {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
