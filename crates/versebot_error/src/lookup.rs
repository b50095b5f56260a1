//! Reference table lookup error types.

/// Kinds of reference table lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LookupErrorKind {
    /// No configured book name or alias matches the citation token
    #[display("No book matches citation '{}'", _0)]
    UnknownBook(String),
    /// A book id that is not present in the reference table
    #[display("Unknown book id: {}", _0)]
    UnknownBookId(u32),
    /// The book has no Tanakh alias, so no Tanakh link can be built
    #[display("No Tanakh name configured for '{}'", _0)]
    MissingTanakhName(String),
}

/// Lookup error with location tracking.
///
/// # Examples
///
/// ```
/// use versebot_error::{LookupError, LookupErrorKind};
///
/// let err = LookupError::new(LookupErrorKind::UnknownBook("xyz 1:1".to_string()));
/// assert!(format!("{}", err).contains("xyz 1:1"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lookup Error: {} at line {} in {}", kind, line, file)]
pub struct LookupError {
    /// The kind of error that occurred
    pub kind: LookupErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LookupError {
    /// Create a new lookup error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LookupErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
