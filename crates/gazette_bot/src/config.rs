//! Bot configuration.

use gazette_core::{ScheduleSlot, TopicPool};
use gazette_error::{ConfigError, GazetteResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_cooldown_days() -> u32 {
    30
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("posted_topics.json")
}

/// On-disk configuration shape, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    blog_id: String,
    topics: Vec<String>,
    schedule: Vec<String>,
    #[serde(default = "default_cooldown_days")]
    cooldown_days: u32,
    #[serde(default = "default_ledger_path")]
    ledger_path: PathBuf,
    #[serde(default)]
    generation: GenerationConfig,
}

/// Model selection for the generative backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model used for articles and metadata
    pub text_model: String,
    /// Image-capable model used for illustrations
    pub image_model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            text_model: "gemini-2.5-pro".to_string(),
            image_model: "gemini-2.0-flash-preview-image-generation".to_string(),
        }
    }
}

/// Validated bot configuration, constructed once at startup and passed by
/// reference into the scheduler loop.
///
/// Schedule slots are interpreted in UTC. Credentials are not part of this
/// struct: they come from the environment and are read by the collaborator
/// clients that need them.
#[derive(Debug, Clone)]
pub struct GazetteConfig {
    /// Target blog identifier
    pub blog_id: String,
    /// The topic pool (non-empty, unique labels)
    pub topics: TopicPool,
    /// Times of day at which a publish cycle fires (non-empty)
    pub schedule: Vec<ScheduleSlot>,
    /// Days before a used topic becomes eligible again
    pub cooldown_days: u32,
    /// Path of the persisted topic ledger
    pub ledger_path: PathBuf,
    /// Generative model selection
    pub generation: GenerationConfig,
}

impl GazetteConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read or
    /// parsed, the topic pool is empty or holds duplicates, the blog id is
    /// blank, or any schedule slot is malformed.
    pub fn from_file(path: impl AsRef<Path>) -> GazetteResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let raw: RawConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> GazetteResult<Self> {
        if raw.blog_id.trim().is_empty() {
            return Err(ConfigError::new("blog_id is empty").into());
        }

        let topics = TopicPool::new(raw.topics.into_iter().map(Into::into).collect())?;

        if raw.schedule.is_empty() {
            return Err(ConfigError::new("schedule is empty").into());
        }
        let schedule = raw
            .schedule
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<ScheduleSlot>, _>>()?;

        Ok(Self {
            blog_id: raw.blog_id,
            topics,
            schedule,
            cooldown_days: raw.cooldown_days,
            ledger_path: raw.ledger_path,
            generation: raw.generation,
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Same validation as [`from_file`](GazetteConfig::from_file).
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_bot::GazetteConfig;
    ///
    /// let config = GazetteConfig::from_toml(r#"
    ///     blog_id = "8675309"
    ///     topics = ["history", "tech"]
    ///     schedule = ["10:00", "16:00"]
    /// "#).unwrap();
    /// assert_eq!(config.topics.len(), 2);
    /// assert_eq!(config.cooldown_days, 30);
    /// ```
    pub fn from_toml(content: &str) -> GazetteResult<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Self::from_raw(raw)
    }
}
