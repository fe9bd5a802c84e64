//! Error types for the errtrail library.
//!
//! errtrail's job is describing other people's failures, but a few of its own
//! operations can fail too: decoding a portable blob that turns out not to be a
//! structured error, or loading a configuration file that does not parse.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use errtrail_error::{EncodingError, EncodingErrorKind, ErrtrailResult};
//!
//! fn decode(blob: &str) -> ErrtrailResult<()> {
//!     if blob.is_empty() {
//!         Err(EncodingError::new(EncodingErrorKind::Empty))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(decode("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod encoding;
mod error;

pub use config::{ConfigError, ConfigErrorKind};
pub use encoding::{EncodingError, EncodingErrorKind};
pub use error::{ErrtrailError, ErrtrailErrorKind, ErrtrailResult};
