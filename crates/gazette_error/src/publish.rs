//! Publishing error types.

/// Kinds of publishing errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PublishErrorKind {
    /// Required credential not found in environment
    #[display("{} environment variable not set", _0)]
    MissingCredentials(String),
    /// The request could not be sent or its response not read
    #[display("Publish request failed: {}", _0)]
    Request(String),
    /// The publish backend rejected the post
    #[display("Publish API returned HTTP {}: {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The image host accepted the request but rejected the upload
    #[display("Image upload rejected: {}", _0)]
    UploadRejected(String),
}

/// Publish error with source location tracking.
///
/// # Examples
///
/// ```
/// use gazette_error::{PublishError, PublishErrorKind};
///
/// let err = PublishError::new(PublishErrorKind::Api {
///     status_code: 403,
///     message: "forbidden".to_string(),
/// });
/// assert!(format!("{}", err).contains("403"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The kind of error that occurred
    pub kind: PublishErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
