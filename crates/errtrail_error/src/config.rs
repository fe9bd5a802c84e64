//! Configuration error types.

/// Kinds of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read
    #[display("Failed to read configuration: {}", _0)]
    Read(String),
    /// A configuration source did not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A value parsed but is out of range
    #[display("Invalid value for {}: {}", key, reason)]
    Invalid {
        /// Dotted path of the offending key, e.g. `details.max_lines`
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use errtrail_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::invalid("details.max_lines", "must be at least 1");
/// assert!(matches!(err.kind, ConfigErrorKind::Invalid { .. }));
/// assert!(err.to_string().contains("details.max_lines"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError of the given kind at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an out-of-range value under `key`.
    #[track_caller]
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            key: key.into(),
            reason: reason.into(),
        })
    }
}
