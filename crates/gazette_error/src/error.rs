//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, PublishError, StoreError};

/// Discriminated union of every error the bot can produce.
///
/// # Examples
///
/// ```
/// use gazette_error::{GazetteError, ConfigError};
///
/// let cfg_err = ConfigError::new("missing blog_id");
/// let err: GazetteError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GazetteErrorKind {
    /// Configuration error (fatal at startup)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content generation error (aborts the current cycle)
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Publishing error (aborts the current cycle, topic not consumed)
    #[from(PublishError)]
    Publish(PublishError),
    /// Topic ledger error
    #[from(StoreError)]
    Store(StoreError),
}

/// Gazette error with kind discrimination.
///
/// # Examples
///
/// ```
/// use gazette_error::{GazetteResult, StoreError, StoreErrorKind};
///
/// fn persist() -> GazetteResult<()> {
///     Err(StoreError::new(StoreErrorKind::FileWrite("disk full".to_string())))?
/// }
///
/// match persist() {
///     Ok(_) => println!("saved"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Gazette Error: {}", _0)]
pub struct GazetteError(Box<GazetteErrorKind>);

impl GazetteError {
    /// Create a new error from a kind.
    pub fn new(kind: GazetteErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GazetteErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GazetteErrorKind
impl<T> From<T> for GazetteError
where
    T: Into<GazetteErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for gazette operations.
///
/// # Examples
///
/// ```
/// use gazette_error::{GazetteResult, GenerationError, GenerationErrorKind};
///
/// fn generate() -> GazetteResult<String> {
///     Err(GenerationError::new(GenerationErrorKind::EmptyArticle))?
/// }
/// ```
pub type GazetteResult<T> = std::result::Result<T, GazetteError>;
