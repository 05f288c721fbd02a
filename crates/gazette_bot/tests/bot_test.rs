//! Scheduler loop and publish cycle tests against mock collaborators.

mod test_utils;

use chrono::{DateTime, TimeZone, Utc};
use gazette_bot::{GazetteBot, GazetteConfig, GenerationConfig};
use gazette_core::{Topic, TopicPool};
use gazette_store::TopicLedger;
use tempfile::TempDir;
use test_utils::{MockDriver, MockHost, MockPublisher};

fn config_in(dir: &TempDir, topics: &[&str]) -> GazetteConfig {
    GazetteConfig {
        blog_id: "test-blog".to_string(),
        topics: TopicPool::new(topics.iter().map(|&t| t.into()).collect()).unwrap(),
        schedule: vec!["10:00".parse().unwrap()],
        cooldown_days: 30,
        ledger_path: dir.path().join("posted_topics.json"),
        generation: GenerationConfig::default(),
    }
}

fn slot_time(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, second).unwrap()
}

#[tokio::test]
async fn successful_cycle_publishes_and_records_the_topic() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, &["wildlife", "history"]);
    let ledger_path = config.ledger_path.clone();

    let publisher = MockPublisher::new_success();
    let drafts = publisher.handle();
    let mut bot = GazetteBot::new(config, MockDriver::new_success(), MockHost::new_success(), publisher);

    assert!(bot.poll_once(slot_time(0)).await);

    let drafts = drafts.lock().unwrap();
    assert_eq!(drafts.len(), 1);
    assert!(drafts[0].title.starts_with("All About"));
    assert_eq!(drafts[0].image_url.as_deref(), Some("https://img.example/mock.png"));

    // The used topic is ineligible on reload; the other remains eligible.
    let reloaded = TopicLedger::load(&ledger_path, 30);
    assert_eq!(reloaded.len(), 1);
    let used = &drafts[0].topic;
    let other = if used.as_str() == "wildlife" { "history" } else { "wildlife" };
    assert!(!reloaded.is_eligible(used, slot_time(0)));
    assert!(reloaded.is_eligible(&Topic::from(other), slot_time(0)));
}

#[tokio::test]
async fn image_failure_still_publishes_without_an_image() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, &["tech"]);

    let publisher = MockPublisher::new_success();
    let drafts = publisher.handle();
    let mut bot = GazetteBot::new(
        config,
        MockDriver::with_failing_image(),
        MockHost::new_success(),
        publisher,
    );

    assert!(bot.poll_once(slot_time(0)).await);

    let drafts = drafts.lock().unwrap();
    assert_eq!(drafts.len(), 1);
    assert!(drafts[0].image_url.is_none());
    assert!(!drafts[0].body.is_empty());

    // The cycle still counts as a success: the topic was consumed.
    assert_eq!(bot.ledger().len(), 1);
}

#[tokio::test]
async fn upload_failure_also_downgrades_to_text_only() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, &["tech"]);

    let publisher = MockPublisher::new_success();
    let drafts = publisher.handle();
    let mut bot = GazetteBot::new(
        config,
        MockDriver::new_success(),
        MockHost::new_failing(),
        publisher,
    );

    assert!(bot.poll_once(slot_time(0)).await);

    let drafts = drafts.lock().unwrap();
    assert_eq!(drafts.len(), 1);
    assert!(drafts[0].image_url.is_none());
}

#[tokio::test]
async fn publish_failure_does_not_consume_the_topic() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, &["tech"]);
    let ledger_path = config.ledger_path.clone();

    let mut bot = GazetteBot::new(
        config,
        MockDriver::new_success(),
        MockHost::new_success(),
        MockPublisher::new_failing(),
    );

    // The cycle fired but failed; the error stays inside the loop.
    assert!(bot.poll_once(slot_time(0)).await);
    assert!(bot.ledger().is_empty());
    assert!(TopicLedger::load(&ledger_path, 30).is_empty());

    // A later cycle may pick the same topic again.
    assert!(bot
        .ledger()
        .is_eligible(&Topic::from("tech"), slot_time(30)));
}

#[tokio::test]
async fn generation_failure_is_contained_and_consumes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, &["tech"]);

    let publisher = MockPublisher::new_success();
    let drafts = publisher.handle();
    let mut bot = GazetteBot::new(
        config,
        MockDriver::with_failing_article(),
        MockHost::new_success(),
        publisher,
    );

    assert!(bot.poll_once(slot_time(0)).await);
    assert!(drafts.lock().unwrap().is_empty());
    assert!(bot.ledger().is_empty());
}

#[tokio::test]
async fn one_fire_per_matching_minute_despite_subminute_polling() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, &["a", "b", "c"]);

    let publisher = MockPublisher::new_success();
    let drafts = publisher.handle();
    let mut bot = GazetteBot::new(config, MockDriver::new_success(), MockHost::new_success(), publisher);

    // Polling twice a minute crosses the slot minute several times.
    assert!(bot.poll_once(slot_time(0)).await);
    assert!(!bot.poll_once(slot_time(30)).await);
    assert!(!bot.poll_once(slot_time(59)).await);
    assert!(!bot.poll_once(Utc.with_ymd_and_hms(2026, 8, 6, 10, 1, 29).unwrap()).await);

    assert_eq!(drafts.lock().unwrap().len(), 1);

    // The same slot the next day fires again.
    assert!(bot.poll_once(Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 10).unwrap()).await);
    assert_eq!(drafts.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn exhausted_pool_resets_and_keeps_publishing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir, &["solo"]);

    let publisher = MockPublisher::new_success();
    let drafts = publisher.handle();
    let mut bot = GazetteBot::new(config, MockDriver::new_success(), MockHost::new_success(), publisher);

    // Day one consumes the only topic; day two must reset and reuse it.
    assert!(bot.poll_once(slot_time(5)).await);
    assert!(bot.poll_once(Utc.with_ymd_and_hms(2026, 8, 7, 10, 0, 5).unwrap()).await);

    let drafts = drafts.lock().unwrap();
    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].topic, drafts[1].topic);
}
