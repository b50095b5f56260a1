//! Content provider error types.

/// Specific content provider failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// The provider has no text for the requested passage
    #[display("Passage not found: {}", _0)]
    NotFound(String),
    /// The provider could not be reached or refused the request
    #[display("Provider unavailable: {}", _0)]
    Unavailable(String),
    /// The provider answered with content that could not be interpreted
    #[display("Malformed passage: {}", _0)]
    Malformed(String),
}

/// Content provider error with location tracking.
///
/// # Examples
///
/// ```
/// use versebot_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::NotFound("Genesis 51".to_string()));
/// assert!(format!("{}", err).contains("Genesis 51"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The specific error condition
    pub kind: ProviderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
