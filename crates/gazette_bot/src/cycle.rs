//! One publish cycle: generate, upload, publish.

use gazette_core::{PostResult, Topic};
use gazette_error::GazetteResult;
use gazette_interface::{ContentDriver, ImageHost, PostDraft, Publisher};
use tracing::instrument;

/// Run one publish cycle for an already-selected topic.
///
/// Sequencing follows the fixed order: article, metadata, image
/// (best-effort), publish. The image leg may fail without aborting the
/// cycle; the post then goes out text-only. Any other failure aborts the
/// whole cycle, and the caller must not mark the topic used.
#[instrument(skip(driver, host, publisher), fields(provider = driver.provider_name(), topic = %topic))]
pub async fn run_cycle<D, H, P>(
    driver: &D,
    host: &H,
    publisher: &P,
    topic: &Topic,
) -> GazetteResult<PostResult>
where
    D: ContentDriver,
    H: ImageHost,
    P: Publisher,
{
    let article = driver.generate_article(topic).await?;
    let metadata = driver.generate_metadata(&article).await?;

    let image_url = match driver.generate_image(topic).await {
        Ok(image) => match host.upload(&image).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(topic = %topic, error = %e, "Image upload failed, publishing without image");
                None
            }
        },
        Err(e) => {
            tracing::warn!(topic = %topic, error = %e, "Image generation failed, publishing without image");
            None
        }
    };

    let draft = PostDraft::from_article(article, image_url, Some(metadata));
    publisher.publish(&draft).await
}
