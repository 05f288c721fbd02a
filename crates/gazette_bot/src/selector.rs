//! Topic selection over the pool and ledger.

use chrono::{DateTime, Utc};
use gazette_core::{Topic, TopicPool};
use gazette_store::TopicLedger;
use rand::seq::SliceRandom;

/// Pick one eligible topic, resetting the ledger when none remain.
///
/// Selection is uniformly random over the eligible set to vary content over
/// time; after a reset the whole pool is immediately eligible. The caller
/// marks the topic used only after a successful publish, so a failed cycle
/// never consumes eligibility.
pub fn select(pool: &TopicPool, ledger: &mut TopicLedger, now: DateTime<Utc>) -> Topic {
    let mut eligible = ledger.eligible_topics(pool, now);

    if eligible.is_empty() {
        tracing::info!(
            pool = pool.len(),
            "No eligible topics remain, resetting ledger"
        );
        ledger.reset();
        eligible = pool.iter().collect();
    }

    let mut rng = rand::thread_rng();
    let chosen = eligible
        .choose(&mut rng)
        .expect("topic pool is never empty");

    (*chosen).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixtures(labels: &[&str]) -> (TempDir, TopicPool, TopicLedger) {
        let dir = TempDir::new().unwrap();
        let pool = TopicPool::new(labels.iter().map(|&l| l.into()).collect()).unwrap();
        let ledger = TopicLedger::load(dir.path().join("ledger.json"), 30);
        (dir, pool, ledger)
    }

    #[test]
    fn selects_a_pool_member_from_empty_state() {
        let (_dir, pool, mut ledger) = fixtures(&["a", "b"]);
        let now = Utc::now();

        for _ in 0..20 {
            let topic = select(&pool, &mut ledger, now);
            assert!(pool.iter().any(|t| *t == topic));
        }
    }

    #[test]
    fn skips_topics_inside_their_cooldown() {
        let (_dir, pool, mut ledger) = fixtures(&["a", "b"]);
        let now = Utc::now();

        ledger.mark_used(Topic::from("a"), now);

        for _ in 0..20 {
            assert_eq!(select(&pool, &mut ledger, now), Topic::from("b"));
        }
    }

    #[test]
    fn exhausted_pool_resets_and_still_selects() {
        let (_dir, pool, mut ledger) = fixtures(&["a", "b", "c"]);
        let now = Utc::now();

        for topic in &pool {
            ledger.mark_used(topic.clone(), now);
        }
        assert!(ledger.eligible_topics(&pool, now).is_empty());

        let topic = select(&pool, &mut ledger, now);
        assert!(pool.iter().any(|t| *t == topic));
        // Exactly one reset happened: the ledger is empty again.
        assert!(ledger.is_empty());
    }
}
