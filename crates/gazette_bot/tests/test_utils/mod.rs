//! Mock collaborators for bot tests.

use async_trait::async_trait;
use chrono::Utc;
use gazette_core::{Article, ArticleMetadata, GeneratedImage, PostResult, Topic};
use gazette_error::{
    GazetteResult, GenerationError, GenerationErrorKind, PublishError, PublishErrorKind,
};
use gazette_interface::{ContentDriver, ImageHost, PostDraft, Publisher};
use std::sync::{Arc, Mutex};

/// Whether a mocked call succeeds or fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOutcome {
    Success,
    Fail,
}

/// Content driver with per-operation outcomes.
pub struct MockDriver {
    article: MockOutcome,
    image: MockOutcome,
    article_calls: Arc<Mutex<usize>>,
}

impl MockDriver {
    /// Every operation succeeds.
    pub fn new_success() -> Self {
        Self::new(MockOutcome::Success, MockOutcome::Success)
    }

    /// Articles succeed, image generation fails.
    pub fn with_failing_image() -> Self {
        Self::new(MockOutcome::Success, MockOutcome::Fail)
    }

    /// Article generation fails outright.
    pub fn with_failing_article() -> Self {
        Self::new(MockOutcome::Fail, MockOutcome::Success)
    }

    fn new(article: MockOutcome, image: MockOutcome) -> Self {
        Self {
            article,
            image,
            article_calls: Arc::new(Mutex::new(0)),
        }
    }

    /// How many articles were requested.
    #[allow(dead_code)]
    pub fn article_calls(&self) -> usize {
        *self.article_calls.lock().unwrap()
    }
}

#[async_trait]
impl ContentDriver for MockDriver {
    async fn generate_article(&self, topic: &Topic) -> GazetteResult<Article> {
        *self.article_calls.lock().unwrap() += 1;

        match self.article {
            MockOutcome::Success => Ok(Article {
                topic: topic.clone(),
                title: format!("All About {}", topic.title_case()),
                body: format!("A long read about {}.", topic),
            }),
            MockOutcome::Fail => Err(GenerationError::new(GenerationErrorKind::ApiRequest(
                "mock article failure".to_string(),
            ))
            .into()),
        }
    }

    async fn generate_metadata(&self, article: &Article) -> GazetteResult<ArticleMetadata> {
        Ok(ArticleMetadata::from_raw(
            &format!("About {}", article.topic),
            "mock, test",
        ))
    }

    async fn generate_image(&self, _topic: &Topic) -> GazetteResult<GeneratedImage> {
        match self.image {
            MockOutcome::Success => Ok(GeneratedImage {
                data: vec![0x89, 0x50, 0x4e, 0x47],
                mime_type: "image/png".to_string(),
            }),
            MockOutcome::Fail => {
                Err(GenerationError::new(GenerationErrorKind::EmptyImage).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Image host that returns a fixed URL, or refuses.
pub struct MockHost {
    outcome: MockOutcome,
}

impl MockHost {
    pub fn new_success() -> Self {
        Self {
            outcome: MockOutcome::Success,
        }
    }

    #[allow(dead_code)]
    pub fn new_failing() -> Self {
        Self {
            outcome: MockOutcome::Fail,
        }
    }
}

#[async_trait]
impl ImageHost for MockHost {
    async fn upload(&self, _image: &GeneratedImage) -> GazetteResult<String> {
        match self.outcome {
            MockOutcome::Success => Ok("https://img.example/mock.png".to_string()),
            MockOutcome::Fail => Err(PublishError::new(PublishErrorKind::UploadRejected(
                "mock upload failure".to_string(),
            ))
            .into()),
        }
    }
}

/// Publisher that records every draft it accepts.
pub struct MockPublisher {
    outcome: MockOutcome,
    published: Arc<Mutex<Vec<PostDraft>>>,
}

impl MockPublisher {
    pub fn new_success() -> Self {
        Self::new(MockOutcome::Success)
    }

    pub fn new_failing() -> Self {
        Self::new(MockOutcome::Fail)
    }

    fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drafts accepted so far.
    #[allow(dead_code)]
    pub fn published(&self) -> Vec<PostDraft> {
        self.published.lock().unwrap().clone()
    }

    /// Shared handle to the accepted drafts, usable after the publisher
    /// moves into the bot.
    pub fn handle(&self) -> Arc<Mutex<Vec<PostDraft>>> {
        Arc::clone(&self.published)
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, draft: &PostDraft) -> GazetteResult<PostResult> {
        match self.outcome {
            MockOutcome::Success => {
                self.published.lock().unwrap().push(draft.clone());
                Ok(PostResult {
                    topic: draft.topic.clone(),
                    title: draft.title.clone(),
                    url: Some("https://blog.example/p/1".to_string()),
                    published_at: Utc::now(),
                })
            }
            MockOutcome::Fail => Err(PublishError::new(PublishErrorKind::Api {
                status_code: 503,
                message: "mock publish failure".to_string(),
            })
            .into()),
        }
    }
}
