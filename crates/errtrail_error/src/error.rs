//! Top-level error wrapper types.

use crate::{ConfigError, EncodingError};

/// The foundation error enum for errtrail's own failures.
///
/// # Examples
///
/// ```
/// use errtrail_error::{ConfigError, ErrtrailError};
///
/// let config_err = ConfigError::invalid("stack.max_depth", "must be a number");
/// let err: ErrtrailError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ErrtrailErrorKind {
    /// Portable encoding or decoding error
    #[from(EncodingError)]
    Encoding(EncodingError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// errtrail error with kind discrimination.
///
/// # Examples
///
/// ```
/// use errtrail_error::{ConfigError, ErrtrailResult};
///
/// fn might_fail() -> ErrtrailResult<()> {
///     Err(ConfigError::invalid("details.max_lines", "must be at least 1"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Errtrail Error: {}", _0)]
pub struct ErrtrailError(Box<ErrtrailErrorKind>);

impl ErrtrailError {
    /// Create a new error from a kind.
    pub fn new(kind: ErrtrailErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ErrtrailErrorKind {
        &self.0
    }

    /// True when this error reports an input that is not a structured error.
    pub fn is_not_structured(&self) -> bool {
        match self.kind() {
            ErrtrailErrorKind::Encoding(err) => err.is_not_structured(),
            ErrtrailErrorKind::Config(_) => false,
        }
    }
}

// Generic From implementation for any type that converts to ErrtrailErrorKind
impl<T> From<T> for ErrtrailError
where
    T: Into<ErrtrailErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for errtrail operations.
///
/// # Examples
///
/// ```
/// use errtrail_error::{EncodingError, EncodingErrorKind, ErrtrailResult};
///
/// fn decode() -> ErrtrailResult<String> {
///     Err(EncodingError::new(EncodingErrorKind::Empty))?
/// }
/// ```
pub type ErrtrailResult<T> = std::result::Result<T, ErrtrailError>;
