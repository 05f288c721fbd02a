//! Google Gemini content driver.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use gemini_rust::{Gemini, client::Model};
use serde::Deserialize;
use std::env;
use tracing::instrument;

use gazette_core::{Article, ArticleMetadata, GeneratedImage, Topic};
use gazette_error::{GazetteResult, GenerationError, GenerationErrorKind};
use gazette_interface::ContentDriver;

/// Article prompts may embed long bodies; keep them bounded.
const MAX_PROMPT_CONTEXT: usize = 10_000;

const ARTICLE_MAX_TOKENS: i32 = 4000;
const METADATA_MAX_TOKENS: i32 = 50;

const IMAGE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Content driver backed by the Google Gemini API.
///
/// Text generation (article, description, keywords) goes through the
/// `gemini-rust` builder API against the configured text model. Image
/// generation posts directly to the REST `generateContent` endpoint of an
/// image-capable model and decodes the inline base64 payload.
///
/// # Examples
///
/// ```no_run
/// use gazette_core::Topic;
/// use gazette_interface::ContentDriver;
/// use gazette_models::GeminiWriter;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let writer = GeminiWriter::new(
///     "gemini-2.5-pro",
///     "gemini-2.0-flash-preview-image-generation",
/// )?;
/// let article = writer.generate_article(&Topic::from("wildlife")).await?;
/// assert!(!article.body.is_empty());
/// # Ok(())
/// # }
/// ```
pub struct GeminiWriter {
    client: Gemini,
    http: reqwest::Client,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl std::fmt::Debug for GeminiWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiWriter")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiWriter {
    /// Create a writer for the given text and image models.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Fails when the key is absent or the SDK client cannot be built.
    #[instrument(name = "gemini_writer_new", skip_all)]
    pub fn new(
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> GazetteResult<Self> {
        let text_model = text_model.into();
        let image_model = image_model.into();

        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        let client = Gemini::with_model(&api_key, Self::model_name_to_enum(&text_model))
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        Ok(Self {
            client,
            http,
            api_key,
            text_model,
            image_model,
        })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names fall through to `Model::Custom` with the
    /// "models/" prefix the API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }

    /// Run one text prompt against the configured text model.
    async fn prompt_text(&self, prompt: &str, max_tokens: i32) -> GazetteResult<String> {
        let response = self
            .client
            .generate_content()
            .with_user_message(prompt)
            .with_max_output_tokens(max_tokens)
            .execute()
            .await
            .map_err(Self::parse_api_error)?;

        Ok(response.text())
    }

    /// Parse SDK errors to extract HTTP status codes where present.
    ///
    /// Converts strings like "bad response from server; code 503; ..." into
    /// a structured HTTP error, everything else into a plain request error.
    fn parse_api_error(err: impl std::fmt::Display) -> GenerationError {
        let err_msg = err.to_string();

        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GenerationError::new(GenerationErrorKind::Http {
                status_code,
                message: err_msg,
            })
        } else {
            GenerationError::new(GenerationErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract an HTTP status code from an error message string.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        if let Some(code_start) = error_msg.find("code ") {
            let code_str = &error_msg[code_start + 5..];
            if let Some(end) = code_str.find(|c: char| !c.is_numeric()) {
                return code_str[..end].parse().ok();
            }
        }
        None
    }

    /// Truncate article text for embedding in a metadata prompt,
    /// respecting UTF-8 boundaries.
    fn prompt_context(body: &str) -> &str {
        if body.len() <= MAX_PROMPT_CONTEXT {
            return body;
        }
        let mut end = MAX_PROMPT_CONTEXT;
        while end > 0 && !body.is_char_boundary(end) {
            end -= 1;
        }
        &body[..end]
    }
}

#[async_trait]
impl ContentDriver for GeminiWriter {
    #[instrument(skip(self), fields(model = %self.text_model, topic = %topic))]
    async fn generate_article(&self, topic: &Topic) -> GazetteResult<Article> {
        let prompt = format!(
            "Write a very detailed, professional, SEO-friendly blog article on: {}",
            topic
        );

        let body = self.prompt_text(&prompt, ARTICLE_MAX_TOKENS).await?;
        if body.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyArticle).into());
        }

        tracing::info!(topic = %topic, chars = body.len(), "Generated article");

        Ok(Article {
            topic: topic.clone(),
            title: format!("All About {}", topic.title_case()),
            body,
        })
    }

    #[instrument(skip(self, article), fields(model = %self.text_model, topic = %article.topic))]
    async fn generate_metadata(&self, article: &Article) -> GazetteResult<ArticleMetadata> {
        let context = Self::prompt_context(&article.body);

        let description = self
            .prompt_text(
                &format!(
                    "Create a short meta description under 160 chars for this blog:\n{}",
                    context
                ),
                METADATA_MAX_TOKENS,
            )
            .await?;

        let keywords = self
            .prompt_text(
                &format!(
                    "Extract 10-15 SEO keywords/tags, separated by commas:\n{}",
                    context
                ),
                METADATA_MAX_TOKENS,
            )
            .await?;

        Ok(ArticleMetadata::from_raw(&description, &keywords))
    }

    #[instrument(skip(self), fields(model = %self.image_model, topic = %topic))]
    async fn generate_image(&self, topic: &Topic) -> GazetteResult<GeneratedImage> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            IMAGE_ENDPOINT, self.image_model, self.api_key
        );

        let request = serde_json::json!({
            "contents": [{ "parts": [{ "text": topic.as_str() }] }],
            "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
        });

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::Http {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string()))
        })?;

        let inline = body
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|part| part.inline_data)
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyImage))?;

        let data = STANDARD.decode(inline.data.as_bytes()).map_err(|e| {
            GenerationError::new(GenerationErrorKind::Base64Decode(e.to_string()))
        })?;

        if data.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyImage).into());
        }

        tracing::info!(topic = %topic, bytes = data.len(), mime = %inline.mime_type, "Generated image");

        Ok(GeneratedImage {
            data,
            mime_type: inline.mime_type,
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

/// Subset of the REST `generateContent` response carrying inline media.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String, // base64-encoded
}
