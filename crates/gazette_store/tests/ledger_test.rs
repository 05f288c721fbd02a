//! Tests for the persisted topic ledger.

use chrono::{TimeDelta, Utc};
use gazette_core::{Topic, TopicPool};
use gazette_store::{LEDGER_VERSION, TopicLedger};
use tempfile::TempDir;

fn ledger_in(dir: &TempDir, cooldown_days: u32) -> TopicLedger {
    TopicLedger::load(dir.path().join("posted_topics.json"), cooldown_days)
}

#[test]
fn missing_file_is_a_normal_first_run() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_in(&dir, 30);
    assert!(ledger.is_empty());
}

#[test]
fn mark_used_makes_topic_ineligible_immediately() {
    let dir = TempDir::new().unwrap();
    let mut ledger = ledger_in(&dir, 30);
    let topic = Topic::from("wildlife");
    let now = Utc::now();

    assert!(ledger.is_eligible(&topic, now));
    ledger.mark_used(topic.clone(), now);
    assert!(!ledger.is_eligible(&topic, now));
}

#[test]
fn eligibility_returns_after_cooldown_never_before() {
    let dir = TempDir::new().unwrap();
    let mut ledger = ledger_in(&dir, 30);
    let topic = Topic::from("history");
    let used_at = Utc::now();

    ledger.mark_used(topic.clone(), used_at);

    let just_before = used_at + TimeDelta::days(30) - TimeDelta::seconds(1);
    assert!(!ledger.is_eligible(&topic, just_before));

    let at_expiry = used_at + TimeDelta::days(30);
    assert!(ledger.is_eligible(&topic, at_expiry));
}

#[test]
fn persist_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posted_topics.json");
    let used_at = Utc::now();

    let mut ledger = TopicLedger::load(&path, 30);
    ledger.mark_used(Topic::from("tech"), used_at);
    ledger.mark_used(Topic::from("crypto"), used_at);
    ledger.persist().unwrap();

    let reloaded = TopicLedger::load(&path, 30);
    assert_eq!(reloaded.len(), 2);
    assert!(!reloaded.is_eligible(&Topic::from("tech"), used_at));
    assert!(reloaded.is_eligible(&Topic::from("nature"), used_at));
    // Timestamps survive the round trip to the second.
    assert_eq!(
        reloaded.last_used(&Topic::from("tech")).map(|t| t.timestamp()),
        Some(used_at.timestamp())
    );
}

#[test]
fn persist_is_idempotent_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posted_topics.json");

    let mut ledger = TopicLedger::load(&path, 30);
    ledger.mark_used(Topic::from("ai"), Utc::now());

    ledger.persist().unwrap();
    let first = std::fs::read_to_string(&path).unwrap();
    ledger.persist().unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn persisted_shape_is_versioned() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posted_topics.json");

    let mut ledger = TopicLedger::load(&path, 30);
    ledger.mark_used(Topic::from("wildlife"), Utc::now());
    ledger.persist().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["version"], u64::from(LEDGER_VERSION));
    assert!(value["entries"]["wildlife"].is_string());
}

#[test]
fn malformed_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posted_topics.json");
    std::fs::write(&path, "{ not json").unwrap();

    let ledger = TopicLedger::load(&path, 30);
    assert!(ledger.is_empty());
}

#[test]
fn unknown_version_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posted_topics.json");
    std::fs::write(&path, r#"{"version":99,"entries":{"tech":"2026-01-01T00:00:00Z"}}"#)
        .unwrap();

    let ledger = TopicLedger::load(&path, 30);
    assert!(ledger.is_empty());
}

#[test]
fn reset_clears_all_entries() {
    let dir = TempDir::new().unwrap();
    let mut ledger = ledger_in(&dir, 30);
    let now = Utc::now();

    ledger.mark_used(Topic::from("a"), now);
    ledger.mark_used(Topic::from("b"), now);
    ledger.reset();

    assert!(ledger.is_empty());
    assert!(ledger.is_eligible(&Topic::from("a"), now));
}

#[test]
fn eligible_topics_filters_in_pool_order() {
    let dir = TempDir::new().unwrap();
    let mut ledger = ledger_in(&dir, 30);
    let now = Utc::now();
    let pool = TopicPool::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();

    ledger.mark_used(Topic::from("b"), now);

    let eligible: Vec<&str> = ledger
        .eligible_topics(&pool, now)
        .into_iter()
        .map(Topic::as_str)
        .collect();
    assert_eq!(eligible, vec!["a", "c"]);
}
