//! Verse request error types.

/// Request-level failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RequestErrorKind {
    /// No citation in the message resolved to a verse
    #[display("No verses could be resolved from the message")]
    NoVerses,
    /// The message carries no permalink and none was supplied
    #[display("Invalid request context: {}", _0)]
    InvalidContext(String),
}

/// Request error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    kind: RequestErrorKind,
    line: u32,
    file: &'static str,
}

impl RequestError {
    /// Create a new request error with caller location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RequestErrorKind {
        &self.kind
    }

    /// Whether this error means "nothing to reply with".
    pub fn is_no_verses(&self) -> bool {
        self.kind == RequestErrorKind::NoVerses
    }
}
