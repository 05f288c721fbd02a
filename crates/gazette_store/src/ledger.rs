//! The topic ledger: last-used timestamps with a rolling cooldown window.

use chrono::{DateTime, TimeDelta, Utc};
use gazette_core::{Topic, TopicPool};
use gazette_error::{GazetteResult, StoreError, StoreErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk schema version.
pub const LEDGER_VERSION: u32 = 1;

/// On-disk shape: a version field plus topic → last-used timestamp.
///
/// ```json
/// { "version": 1, "entries": { "wildlife": "2026-08-01T10:00:12Z" } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct LedgerFile {
    version: u32,
    entries: BTreeMap<Topic, DateTime<Utc>>,
}

/// Tracks when each topic was last used and persists that state to a JSON
/// file after every successful publish.
///
/// A topic is eligible when it has no entry, or its last-used timestamp plus
/// the cooldown window is not after `now`. The ledger is loaded once at
/// startup and rewritten in full on every [`persist`](TopicLedger::persist);
/// writes go to a temp file first and are renamed into place so a crash
/// never leaves a half-written ledger.
///
/// # Examples
///
/// ```no_run
/// use chrono::Utc;
/// use gazette_core::Topic;
/// use gazette_store::TopicLedger;
///
/// let mut ledger = TopicLedger::load("posted_topics.json", 30);
/// let topic = Topic::from("wildlife");
/// assert!(ledger.is_eligible(&topic, Utc::now()));
///
/// ledger.mark_used(topic.clone(), Utc::now());
/// ledger.persist().unwrap();
/// assert!(!ledger.is_eligible(&topic, Utc::now()));
/// ```
#[derive(Debug)]
pub struct TopicLedger {
    path: PathBuf,
    cooldown: TimeDelta,
    entries: BTreeMap<Topic, DateTime<Utc>>,
}

impl TopicLedger {
    /// Load persisted state, or start empty.
    ///
    /// A missing file is the normal first-run condition. An unreadable or
    /// malformed file degrades to empty state with a warning rather than
    /// failing: losing dedup history risks a repeat post, which is cheaper
    /// than refusing to run.
    pub fn load(path: impl Into<PathBuf>, cooldown_days: u32) -> Self {
        let path = path.into();
        let cooldown = TimeDelta::days(i64::from(cooldown_days));
        let entries = Self::read_entries(&path);

        tracing::debug!(
            path = %path.display(),
            topics = entries.len(),
            cooldown_days,
            "Loaded topic ledger"
        );

        Self {
            path,
            cooldown,
            entries,
        }
    }

    fn read_entries(path: &Path) -> BTreeMap<Topic, DateTime<Utc>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No ledger file yet, starting empty");
                return BTreeMap::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not read ledger file, starting empty"
                );
                return BTreeMap::new();
            }
        };

        match serde_json::from_str::<LedgerFile>(&raw) {
            Ok(file) if file.version == LEDGER_VERSION => file.entries,
            Ok(file) => {
                tracing::warn!(
                    path = %path.display(),
                    found = file.version,
                    expected = LEDGER_VERSION,
                    "Unknown ledger version, starting empty"
                );
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Malformed ledger file, starting empty"
                );
                BTreeMap::new()
            }
        }
    }

    /// Whether a topic may be selected at `now`.
    pub fn is_eligible(&self, topic: &Topic, now: DateTime<Utc>) -> bool {
        match self.entries.get(topic) {
            None => true,
            Some(&last_used) => last_used + self.cooldown <= now,
        }
    }

    /// Record that a topic was published at `now`.
    ///
    /// Callers record only after a successful publish, so a failed cycle
    /// never consumes eligibility.
    pub fn mark_used(&mut self, topic: Topic, now: DateTime<Utc>) {
        self.entries.insert(topic, now);
    }

    /// Clear every entry. Used when no topic in the pool remains eligible.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Write the full current state to disk, replacing prior content.
    ///
    /// Serialization is deterministic (sorted entries), so persisting the
    /// same state twice produces identical bytes.
    ///
    /// # Errors
    ///
    /// Returns a ledger error if the directory cannot be created or the
    /// file cannot be written or renamed into place.
    pub fn persist(&self) -> GazetteResult<()> {
        let file = LedgerFile {
            version: LEDGER_VERSION,
            entries: self.entries.clone(),
        };

        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| StoreError::new(StoreErrorKind::Serialize(e.to_string())))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::new(StoreErrorKind::DirectoryCreation(format!(
                        "{}: {}",
                        parent.display(),
                        e
                    )))
                })?;
            }
        }

        // Temp file + rename keeps the previous ledger intact on a crash.
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, &json).map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            StoreError::new(StoreErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            topics = self.entries.len(),
            "Persisted topic ledger"
        );

        Ok(())
    }

    /// When a topic was last used, if ever.
    pub fn last_used(&self, topic: &Topic) -> Option<DateTime<Utc>> {
        self.entries.get(topic).copied()
    }

    /// The pool topics currently eligible at `now`, in pool order.
    pub fn eligible_topics<'a>(
        &self,
        pool: &'a TopicPool,
        now: DateTime<Utc>,
    ) -> Vec<&'a Topic> {
        pool.iter().filter(|t| self.is_eligible(t, now)).collect()
    }

    /// Number of recorded topics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured cooldown window.
    pub fn cooldown(&self) -> TimeDelta {
        self.cooldown
    }
}
