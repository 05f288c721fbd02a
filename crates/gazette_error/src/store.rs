//! Topic-ledger error types.

/// Kinds of ledger errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Failed to read the ledger file
    #[display("Failed to read ledger file: {}", _0)]
    FileRead(String),
    /// Failed to write the ledger file
    #[display("Failed to write ledger file: {}", _0)]
    FileWrite(String),
    /// Failed to create the ledger directory
    #[display("Failed to create ledger directory: {}", _0)]
    DirectoryCreation(String),
    /// The ledger file held malformed JSON
    #[display("Failed to parse ledger file: {}", _0)]
    Parse(String),
    /// Failed to serialize the ledger state
    #[display("Failed to serialize ledger: {}", _0)]
    Serialize(String),
}

/// Ledger error with location tracking.
///
/// # Examples
///
/// ```
/// use gazette_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Parse("unexpected EOF".to_string()));
/// assert!(format!("{}", err).contains("parse"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ledger Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new ledger error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
