//! The `run` command: start the publishing loop.

use gazette_bot::{GazetteBot, GazetteConfig};
use gazette_error::GazetteResult;
use gazette_models::GeminiWriter;
use gazette_publish::{BloggerClient, ImgbbHost};
use std::path::Path;
use tracing::info;

/// Load configuration, assemble the collaborators, and run the loop.
///
/// Returns only on a startup error; once the loop is running, the process
/// lives until externally terminated.
pub async fn run_bot(config_path: &Path) -> GazetteResult<()> {
    let config = GazetteConfig::from_file(config_path)?;

    info!(
        config = %config_path.display(),
        blog_id = %config.blog_id,
        topics = config.topics.len(),
        "Configuration loaded"
    );

    let driver = GeminiWriter::new(
        config.generation.text_model.clone(),
        config.generation.image_model.clone(),
    )?;
    let host = ImgbbHost::new()?;
    let publisher = BloggerClient::new(config.blog_id.clone())?;

    GazetteBot::new(config, driver, host, publisher).run().await;
    Ok(())
}
