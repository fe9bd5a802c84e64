//! Portable text encoding of structured errors.
//!
//! A [`TrailError`] can travel through a boundary that only understands "a
//! failure with a message" by encoding it to a JSON blob:
//!
//! ```json
//! {"data":{},"causeError":"i/o error","maskError":null,"stack":[]}
//! ```
//!
//! Encoding flattens the chain into one cause/mask pair. The cause text is
//! the root cause's message. The mask text is the mask, or
//! the wrap-prefixed public message when that differs from the cause. Data
//! from every node is merged with outer keys winning, and the stack is the
//! outer node's.

use crate::{Failure, Location, Message, TrailError};
use errtrail_error::{EncodingError, EncodingErrorKind, ErrtrailResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error as StdError;
use tracing::debug;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct Encoded {
    data: HashMap<String, Value>,
    cause_error: String,
    mask_error: Option<String>,
    stack: Vec<Location>,
}

/// A plain failure whose message is an encoded [`TrailError`].
///
/// # Examples
///
/// ```
/// use errtrail::TrailError;
///
/// let mut err = TrailError::new("i/o error");
/// err.set_data("attempt", 3);
///
/// let portable = err.to_portable()?;
/// let restored = TrailError::from_failure(&portable)?;
/// assert_eq!(restored.cause_message(), "i/o error");
/// assert_eq!(restored.data("attempt"), Some(&3.into()));
/// # Ok::<(), errtrail::ErrtrailError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{}", blob)]
pub struct PortableError {
    blob: String,
}

impl PortableError {
    /// The encoded text.
    pub fn blob(&self) -> &str {
        &self.blob
    }
}

impl TrailError {
    /// Encodes this error, flattening any chain, into a JSON blob.
    ///
    /// # Errors
    ///
    /// Returns an error if a data value cannot be serialized.
    pub fn encode(&self) -> ErrtrailResult<String> {
        let cause_error = self.root_cause_message();
        let public = self.message();
        let mask_error = match self.mask() {
            Some(mask) => Some(mask.message()),
            None if public != cause_error => Some(public),
            None => None,
        };

        let encoded = Encoded {
            data: self.merged_data(),
            cause_error,
            mask_error,
            stack: self.stack().to_vec(),
        };

        serde_json::to_string(&encoded).map_err(|e| {
            EncodingError::new(EncodingErrorKind::Serialize(e.to_string())).into()
        })
    }

    /// Decodes a blob produced by [`TrailError::encode`].
    ///
    /// The result is a single-level error: a message cause, an optional
    /// message mask, the data map and the stack.
    ///
    /// # Errors
    ///
    /// Returns a "not a structured error" [`EncodingError`] if `blob` is not
    /// a well-formed encoding.
    pub fn decode(blob: &str) -> ErrtrailResult<Self> {
        if blob.trim().is_empty() {
            debug!("Empty input is not a structured error");
            return Err(EncodingError::new(EncodingErrorKind::Empty).into());
        }

        let encoded: Encoded = serde_json::from_str(blob).map_err(|e| {
            debug!(error = %e, "Input is not a structured error");
            EncodingError::new(EncodingErrorKind::NotStructured(e.to_string()))
        })?;

        let cause = Failure::Plain(Box::new(Message::new(encoded.cause_error)));
        let mut trail = TrailError::from_parts(cause, encoded.stack).with_data(encoded.data);
        if let Some(mask) = encoded.mask_error {
            trail.set_mask(Some(Failure::msg(mask)));
        }
        debug!(frames = trail.stack().len(), "Decoded structured error");
        Ok(trail)
    }

    /// Encodes this error into a plain failure that carries the blob as its
    /// message.
    ///
    /// # Errors
    ///
    /// Returns an error if a data value cannot be serialized.
    pub fn to_portable(&self) -> ErrtrailResult<PortableError> {
        Ok(PortableError {
            blob: self.encode()?,
        })
    }

    /// Decodes the message of any failure as a structured error.
    ///
    /// # Errors
    ///
    /// Returns a "not a structured error" [`EncodingError`] when the message
    /// is not a well-formed encoding; callers typically fall back to treating
    /// `err` as a plain failure.
    pub fn from_failure(err: &(dyn StdError + 'static)) -> ErrtrailResult<Self> {
        Self::decode(&err.to_string())
    }
}
