//! Portable encoding error types.

/// Kinds of encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum EncodingErrorKind {
    /// The text is not an encoded structured error
    #[display("Not a structured error: {}", _0)]
    NotStructured(String),
    /// The text is empty
    #[display("Not a structured error: empty input")]
    Empty,
    /// A structured error could not be serialized
    #[display("Failed to encode structured error: {}", _0)]
    Serialize(String),
}

/// Encoding error with location tracking.
///
/// Returned when a portable blob cannot be decoded. Callers usually treat
/// this as "the value is a plain failure" and carry on.
///
/// # Examples
///
/// ```
/// use errtrail_error::{EncodingError, EncodingErrorKind};
///
/// let err = EncodingError::new(EncodingErrorKind::NotStructured("expected value".to_string()));
/// assert!(err.is_not_structured());
/// assert!(format!("{}", err).contains("Not a structured error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Encoding Error: {} at line {} in {}", kind, line, file)]
pub struct EncodingError {
    /// The kind of error that occurred
    pub kind: EncodingErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl EncodingError {
    /// Create a new encoding error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EncodingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when decoding failed because the input was not a structured error.
    pub fn is_not_structured(&self) -> bool {
        matches!(
            self.kind,
            EncodingErrorKind::NotStructured(_) | EncodingErrorKind::Empty
        )
    }
}
