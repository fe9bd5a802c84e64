//! Construction operations bound to an explicit stack policy.

use crate::capture::capture;
use crate::{Failure, StackConfig, TrailError};
use tracing::debug;

/// Builds structured errors using one [`StackConfig`].
///
/// The free functions ([`extend`](crate::extend), [`mask`](crate::mask),
/// [`wrap`](crate::wrap)) use `Factory::default()`. Hold a `Factory` when an
/// application wants a different capture depth.
///
/// Every method is `#[track_caller]`: the first captured frame is the code
/// that called the method.
///
/// # Examples
///
/// ```
/// use errtrail::{Factory, StackConfig};
///
/// let factory = Factory::new(StackConfig::builder().max_depth(1).build());
/// let err = factory.error("disk full");
/// assert!(err.stack().len() <= 1);
/// ```
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct Factory {
    /// Stack capture policy for every error built here.
    config: StackConfig,
}

impl Factory {
    /// Creates a factory with the given capture policy.
    pub fn new(config: StackConfig) -> Self {
        Self { config }
    }

    /// Creates an error whose cause is a new message failure.
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> TrailError {
        TrailError::with_config(message, &self.config)
    }

    /// Turns `err` into a structured error.
    ///
    /// A value that is already structured is returned unchanged, keeping the
    /// stack captured where it was first created.
    #[track_caller]
    pub fn extend(&self, err: impl Into<Failure>) -> TrailError {
        match err.into() {
            Failure::Structured(trail) => trail,
            plain @ Failure::Plain(_) => TrailError::from_parts(plain, capture(&self.config)),
        }
    }

    /// Sets the client-facing mask on `err`.
    ///
    /// A structured `err` is updated in place and returned; `None` clears
    /// its mask. A plain `err` becomes the cause of a new structured error.
    #[track_caller]
    pub fn mask(&self, err: impl Into<Failure>, mask: Option<Failure>) -> TrailError {
        let mut trail = match err.into() {
            Failure::Structured(trail) => trail,
            plain @ Failure::Plain(_) => TrailError::from_parts(plain, capture(&self.config)),
        };
        trail.set_mask(mask);
        trail
    }

    /// Wraps `err` in a new node whose message is `"<message>: <inner>"`.
    #[track_caller]
    pub fn wrap(&self, err: impl Into<Failure>, message: impl Into<String>) -> TrailError {
        let message = message.into();
        let cause = err.into();
        debug!(wrap = %message, structured = cause.is_structured(), "Wrapping error");
        TrailError::from_parts(cause, capture(&self.config)).with_wrap_message(message)
    }
}
