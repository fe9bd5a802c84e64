//! Formatting constructors.

/// Creates a [`TrailError`](crate::TrailError) from a format string.
///
/// ```
/// let err = errtrail::errorf!("port {} already in use", 8080);
/// assert_eq!(err.to_string(), "port 8080 already in use");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::TrailError::new(::std::format!($($arg)*))
    };
}

/// Wraps an optional failure with a formatted message prefix.
///
/// ```
/// use errtrail::{wrapf, TrailError};
///
/// let err = wrapf!(Some(TrailError::new("i/o error")), "read {:?}", "config.yaml").unwrap();
/// assert_eq!(err.to_string(), "read \"config.yaml\": i/o error");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap($err, ::std::format!($($arg)*))
    };
}
