//! `Result` adapters for the construction operations.

use crate::{Factory, Failure, TrailError};

/// Extension trait that lifts any `Result` error into a [`TrailError`].
///
/// `Ok` values pass through untouched, which is the `Result` spelling of
/// "nothing failed, nothing to wrap".
///
/// ```
/// use errtrail::ResultExt;
///
/// fn read_config() -> Result<String, errtrail::TrailError> {
///     let raw: Result<String, std::io::Error> = Err(std::io::Error::other("i/o error"));
///     raw.wrap_err("read config.yaml")
/// }
///
/// assert_eq!(read_config().unwrap_err().to_string(), "read config.yaml: i/o error");
/// ```
pub trait ResultExt<T> {
    /// Converts the error into a structured error, capturing the stack here.
    fn extend_err(self) -> Result<T, TrailError>;

    /// Converts the error and sets its client-facing mask.
    fn mask_err(self, mask: impl Into<Failure>) -> Result<T, TrailError>;

    /// Wraps the error with a message prefix.
    fn wrap_err(self, message: impl Into<String>) -> Result<T, TrailError>;

    /// Wraps the error with a lazily built message prefix.
    fn wrap_err_with<S, F>(self, message: F) -> Result<T, TrailError>
    where
        S: Into<String>,
        F: FnOnce() -> S;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Failure>,
{
    #[track_caller]
    fn extend_err(self) -> Result<T, TrailError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Factory::default().extend(err)),
        }
    }

    #[track_caller]
    fn mask_err(self, mask: impl Into<Failure>) -> Result<T, TrailError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Factory::default().mask(err, Some(mask.into()))),
        }
    }

    #[track_caller]
    fn wrap_err(self, message: impl Into<String>) -> Result<T, TrailError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Factory::default().wrap(err, message)),
        }
    }

    #[track_caller]
    fn wrap_err_with<S, F>(self, message: F) -> Result<T, TrailError>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Factory::default().wrap(err, message())),
        }
    }
}
