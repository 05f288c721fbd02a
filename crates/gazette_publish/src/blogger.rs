//! Blogger v3 publish client.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::instrument;

use gazette_core::PostResult;
use gazette_error::{GazetteResult, PublishError, PublishErrorKind};
use gazette_interface::{PostDraft, Publisher};

const API_BASE: &str = "https://www.googleapis.com/blogger/v3";

/// Publishes posts to a Blogger blog via the v3 REST API.
///
/// Authentication uses a bearer token from the `BLOGGER_ACCESS_TOKEN`
/// environment variable; obtaining and refreshing that token is the
/// deployment's concern, not the bot's.
pub struct BloggerClient {
    http: reqwest::Client,
    blog_id: String,
    access_token: String,
}

impl std::fmt::Debug for BloggerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloggerClient")
            .field("blog_id", &self.blog_id)
            .finish_non_exhaustive()
    }
}

/// Post insert payload, mirroring the Blogger v3 wire shape.
#[derive(Debug, Serialize)]
struct PostBody<'a> {
    kind: &'static str,
    blog: BlogRef<'a>,
    title: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    labels: Vec<String>,
    #[serde(rename = "customMetaData", skip_serializing_if = "Option::is_none")]
    custom_meta_data: Option<String>,
}

#[derive(Debug, Serialize)]
struct BlogRef<'a> {
    id: &'a str,
}

#[derive(Debug, Deserialize)]
struct InsertedPost {
    #[serde(default)]
    url: Option<String>,
}

impl BloggerClient {
    /// Create a client for one blog.
    ///
    /// # Errors
    ///
    /// Fails when `BLOGGER_ACCESS_TOKEN` is unset or the HTTP client
    /// cannot be built.
    pub fn new(blog_id: impl Into<String>) -> GazetteResult<Self> {
        let access_token = env::var("BLOGGER_ACCESS_TOKEN").map_err(|_| {
            PublishError::new(PublishErrorKind::MissingCredentials(
                "BLOGGER_ACCESS_TOKEN".to_string(),
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| PublishError::new(PublishErrorKind::Request(e.to_string())))?;

        Ok(Self {
            http,
            blog_id: blog_id.into(),
            access_token,
        })
    }

    /// Assemble the post content, embedding the hosted image when present.
    fn render_content(draft: &PostDraft) -> String {
        match &draft.image_url {
            Some(url) => format!("<img src=\"{}\">\n{}", url, draft.body),
            None => draft.body.clone(),
        }
    }
}

#[async_trait]
impl Publisher for BloggerClient {
    #[instrument(skip(self, draft), fields(blog_id = %self.blog_id, topic = %draft.topic, title = %draft.title))]
    async fn publish(&self, draft: &PostDraft) -> GazetteResult<PostResult> {
        let (labels, custom_meta_data) = match &draft.metadata {
            Some(meta) => (
                meta.keywords.clone(),
                Some(format!(
                    "<meta name='description' content='{}'>",
                    meta.description
                )),
            ),
            None => (Vec::new(), None),
        };

        let body = PostBody {
            kind: "blogger#post",
            blog: BlogRef { id: &self.blog_id },
            title: &draft.title,
            content: Self::render_content(draft),
            labels,
            custom_meta_data,
        };

        let url = format!("{}/blogs/{}/posts/", API_BASE, self.blog_id);
        let response = self
            .http
            .post(&url)
            .query(&[("isDraft", "false")])
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::new(PublishErrorKind::Api {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let inserted: InsertedPost = response
            .json()
            .await
            .map_err(|e| PublishError::new(PublishErrorKind::Request(e.to_string())))?;

        tracing::info!(
            topic = %draft.topic,
            title = %draft.title,
            url = inserted.url.as_deref().unwrap_or("-"),
            "Published post"
        );

        Ok(PostResult {
            topic: draft.topic.clone(),
            title: draft.title.clone(),
            url: inserted.url,
            published_at: Utc::now(),
        })
    }
}
