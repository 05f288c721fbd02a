//! The `status` command: read-only view of the topic ledger.

use chrono::Utc;
use gazette_bot::GazetteConfig;
use gazette_error::GazetteResult;
use gazette_store::TopicLedger;
use std::path::Path;

/// Print each pool topic with its eligibility and last-used time.
pub fn show_status(config_path: &Path) -> GazetteResult<()> {
    let config = GazetteConfig::from_file(config_path)?;
    let ledger = TopicLedger::load(&config.ledger_path, config.cooldown_days);
    let now = Utc::now();

    println!(
        "Blog {} - {} topics, cooldown {} days",
        config.blog_id,
        config.topics.len(),
        config.cooldown_days
    );

    for topic in &config.topics {
        let line = match (ledger.last_used(topic), ledger.is_eligible(topic, now)) {
            (None, _) => format!("{:<28} eligible (never used)", topic.as_str()),
            (Some(used), true) => format!(
                "{:<28} eligible (last used {})",
                topic.as_str(),
                used.format("%Y-%m-%d %H:%M")
            ),
            (Some(used), false) => format!(
                "{:<28} cooling down (last used {})",
                topic.as_str(),
                used.format("%Y-%m-%d %H:%M")
            ),
        };
        println!("  {}", line);
    }

    let slots: Vec<String> = config.schedule.iter().map(ToString::to_string).collect();
    println!("Schedule (UTC): {}", slots.join(", "));

    Ok(())
}
