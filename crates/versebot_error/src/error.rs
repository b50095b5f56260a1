//! Top-level error wrapper types.

use crate::{ConfigError, LookupError, ProviderError, RequestError};

/// Every error condition a VerseBot crate can raise.
///
/// # Examples
///
/// ```
/// use versebot_error::{ConfigError, VerseBotError};
///
/// let config_err = ConfigError::new("Unsupported translation 'XYZ'");
/// let err: VerseBotError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VerseBotErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Reference table lookup error
    #[from(LookupError)]
    Lookup(LookupError),
    /// Content provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Verse request error
    #[from(RequestError)]
    Request(RequestError),
}

/// VerseBot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use versebot_error::{RequestError, RequestErrorKind, VerseBotErrorKind, VerseBotResult};
///
/// fn reply() -> VerseBotResult<String> {
///     Err(RequestError::new(RequestErrorKind::NoVerses))?
/// }
///
/// let err = reply().unwrap_err();
/// assert!(matches!(err.kind(), VerseBotErrorKind::Request(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("VerseBot Error: {}", _0)]
pub struct VerseBotError(Box<VerseBotErrorKind>);

impl VerseBotError {
    /// Create a new error from a kind.
    pub fn new(kind: VerseBotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VerseBotErrorKind {
        &self.0
    }

    /// Whether this is the "no verses resolved" failure of a request.
    pub fn is_no_verses(&self) -> bool {
        matches!(self.kind(), VerseBotErrorKind::Request(e) if e.is_no_verses())
    }
}

// Generic From implementation for any type that converts to VerseBotErrorKind
impl<T> From<T> for VerseBotError
where
    T: Into<VerseBotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for VerseBot operations.
pub type VerseBotResult<T> = std::result::Result<T, VerseBotError>;
