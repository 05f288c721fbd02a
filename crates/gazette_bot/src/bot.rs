//! The polling scheduler loop.

use crate::clock::SlotClock;
use crate::config::GazetteConfig;
use crate::{cycle, selector};
use chrono::{DateTime, Utc};
use gazette_core::PostResult;
use gazette_error::GazetteResult;
use gazette_interface::{ContentDriver, ImageHost, Publisher};
use gazette_store::TopicLedger;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, instrument};

/// How long the loop sleeps between polls while idle.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// How long the loop sleeps after a fire, so a matching minute cannot
/// refire through polling granularity.
pub const POST_FIRE_COOLDOWN: Duration = Duration::from_secs(60);

/// The scheduler loop: polls the wall clock, fires one publish cycle per
/// due slot, and records used topics in the ledger.
///
/// Single-threaded and sequential; the only suspension points are the
/// sleeps between polls and the collaborator calls themselves. The ledger
/// file is owned exclusively by this loop.
pub struct GazetteBot<D, H, P> {
    config: GazetteConfig,
    driver: D,
    host: H,
    publisher: P,
    ledger: TopicLedger,
    clock: SlotClock,
    poll_interval: Duration,
    post_fire_cooldown: Duration,
}

impl<D, H, P> GazetteBot<D, H, P>
where
    D: ContentDriver,
    H: ImageHost,
    P: Publisher,
{
    /// Assemble the bot: loads the ledger and builds the slot clock from
    /// the validated configuration.
    pub fn new(config: GazetteConfig, driver: D, host: H, publisher: P) -> Self {
        let ledger = TopicLedger::load(&config.ledger_path, config.cooldown_days);
        let clock = SlotClock::new(config.schedule.clone());

        Self {
            config,
            driver,
            host,
            publisher,
            ledger,
            clock,
            poll_interval: POLL_INTERVAL,
            post_fire_cooldown: POST_FIRE_COOLDOWN,
        }
    }

    /// Override the loop's sleep durations.
    pub fn with_intervals(mut self, poll: Duration, post_fire: Duration) -> Self {
        self.poll_interval = poll;
        self.post_fire_cooldown = post_fire;
        self
    }

    /// Run the polling loop until the process is terminated.
    #[instrument(skip(self), fields(provider = self.driver.provider_name(), blog_id = %self.config.blog_id))]
    pub async fn run(mut self) {
        info!(
            topics = self.config.topics.len(),
            slots = self.config.schedule.len(),
            "Gazette bot started"
        );

        loop {
            let fired = self.poll_once(Utc::now()).await;
            let delay = if fired {
                self.post_fire_cooldown
            } else {
                self.poll_interval
            };
            sleep(delay).await;
        }
    }

    /// One poll: fire a publish cycle if a slot is due at `now`.
    ///
    /// Returns whether a cycle ran. Cycle errors are caught here, logged
    /// with topic and step context, and never escape the loop.
    pub async fn poll_once(&mut self, now: DateTime<Utc>) -> bool {
        let Some(slot) = self.clock.due(now) else {
            return false;
        };

        info!(slot = %slot, "Schedule slot reached, starting publish cycle");

        match self.publish_cycle(now).await {
            Ok(result) => {
                info!(
                    topic = %result.topic,
                    title = %result.title,
                    url = result.url.as_deref().unwrap_or("-"),
                    "Publish cycle complete"
                );
            }
            Err(e) => {
                error!(slot = %slot, error = %e, "Publish cycle failed");
            }
        }

        true
    }

    /// Select, generate, publish, then record the used topic.
    async fn publish_cycle(&mut self, now: DateTime<Utc>) -> GazetteResult<PostResult> {
        let topic = selector::select(&self.config.topics, &mut self.ledger, now);

        let result = cycle::run_cycle(&self.driver, &self.host, &self.publisher, &topic).await?;

        // Only a published topic consumes eligibility.
        self.ledger.mark_used(topic, now);
        if let Err(e) = self.ledger.persist() {
            error!(
                error = %e,
                "Failed to persist topic ledger; a repeat post is possible"
            );
        }

        Ok(result)
    }

    /// Read access to the ledger, for status reporting.
    pub fn ledger(&self) -> &TopicLedger {
        &self.ledger
    }
}
