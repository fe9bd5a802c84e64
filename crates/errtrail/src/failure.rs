//! The "any failure" value consumed and produced by errtrail operations.

use crate::TrailError;
use std::error::Error as StdError;
use std::fmt;

/// Boxed, thread-safe standard error.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A plain failure that carries nothing but a message.
///
/// This is the cause created by [`TrailError::new`] and the `errorf!` macro.
///
/// # Examples
///
/// ```
/// use errtrail::Message;
///
/// let msg = Message::new("i/o error");
/// assert_eq!(msg.to_string(), "i/o error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{}", text)]
pub struct Message {
    text: String,
}

impl Message {
    /// Creates a message failure.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The message text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Either a plain failure or a structured [`TrailError`].
///
/// Any `std::error::Error + Send + Sync + 'static` converts into a `Failure`.
/// Values that already are a `TrailError` land in the `Structured` variant,
/// so a chain is never hidden behind a box.
///
/// # Examples
///
/// ```
/// use errtrail::{Failure, TrailError};
///
/// let io = std::io::Error::other("disk on fire");
/// assert!(!Failure::from(io).is_structured());
///
/// let trail = TrailError::new("ABC");
/// assert!(Failure::from(trail).is_structured());
/// ```
#[derive(Debug)]
pub enum Failure {
    /// Any error that is not a `TrailError`
    Plain(BoxError),
    /// A structured error, possibly the head of a chain
    Structured(TrailError),
}

impl Failure {
    /// Builds a plain failure from a message.
    pub fn msg(text: impl Into<String>) -> Self {
        Failure::Plain(Box::new(Message::new(text)))
    }

    /// Converts a boxed error, recovering a `TrailError` if that is what it holds.
    pub fn from_boxed(err: BoxError) -> Self {
        match err.downcast::<TrailError>() {
            Ok(trail) => Failure::Structured(*trail),
            Err(plain) => Failure::Plain(plain),
        }
    }

    /// The resolved public message of this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for the `Structured` variant.
    pub fn is_structured(&self) -> bool {
        matches!(self, Failure::Structured(_))
    }

    /// Borrows the structured error, if this is one.
    pub fn as_structured(&self) -> Option<&TrailError> {
        match self {
            Failure::Structured(trail) => Some(trail),
            Failure::Plain(_) => None,
        }
    }

    /// Views this failure as a standard error.
    pub fn as_dyn(&self) -> &(dyn StdError + 'static) {
        match self {
            Failure::Plain(err) => &**err as &(dyn StdError + 'static),
            Failure::Structured(trail) => trail as &(dyn StdError + 'static),
        }
    }

    /// Converts into a boxed standard error.
    pub fn into_boxed(self) -> BoxError {
        match self {
            Failure::Plain(err) => err,
            Failure::Structured(trail) => Box::new(trail),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Plain(err) => write!(f, "{err}"),
            Failure::Structured(trail) => write!(f, "{trail}"),
        }
    }
}

impl<E> From<E> for Failure
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Failure::from_boxed(Box::new(err))
    }
}
