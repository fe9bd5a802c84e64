//! Structured errors that remember where they came from.
//!
//! A [`TrailError`] wraps a plain failure and adds the context a program
//! collects while the error travels up the call stack:
//!
//! - the original **cause**, preserved for debugging and equality checks,
//! - an optional client-safe **mask** that replaces the public message,
//! - **wrap** annotations that build breadcrumb messages like `"read: i/o error"`,
//! - the **stack** captured where the error was created,
//! - keyed **diagnostic data**, visible through the whole wrap chain.
//!
//! `Display` only ever shows the public message. [`details`] renders cause,
//! mask and stack for internal logs.
//!
//! # Examples
//!
//! ```
//! use errtrail::{details, get_data, mask, wrap, Failure, TrailError};
//!
//! let mut err = TrailError::new("connection reset");
//! err.set_data("peer", "10.0.0.7:5432");
//!
//! let err = wrap(Some(err), "query users").unwrap();
//! assert_eq!(err.to_string(), "query users: connection reset");
//! assert_eq!(get_data(Some(&err), "peer"), Some(&"10.0.0.7:5432".into()));
//!
//! let err = mask(Some(err), Some(Failure::msg("please retry later"))).unwrap();
//! assert_eq!(err.to_string(), "please retry later");
//! assert!(details(Some(&err), 5).contains("[MASK ERROR] please retry later"));
//! ```
//!
//! # Absent errors
//!
//! The free functions take `Option`s, where `None` means nothing failed, and
//! they hand `None` straight back. When working with `Result`, [`ResultExt`]
//! gives the same operations as methods.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod capture;
mod details;
mod ext;
mod factory;
mod failure;
mod location;
mod macros;
mod ops;
mod portable;
mod settings;
mod trail;

pub use details::Details;
pub use errtrail_error::{
    ConfigError, ConfigErrorKind, EncodingError, EncodingErrorKind, ErrtrailError, ErrtrailErrorKind,
    ErrtrailResult,
};
pub use ext::ResultExt;
pub use factory::Factory;
pub use failure::{BoxError, Failure, Message};
pub use location::{Location, UNKNOWN_FUNCTION};
pub use ops::{cause, details, extend, get_data, is_equal, mask, set_data, stack, wrap};
pub use portable::PortableError;
pub use serde_json::Value;
pub use settings::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_LINES, DetailsConfig, DetailsConfigBuilder, StackConfig,
    StackConfigBuilder, TrailConfig,
};
pub use trail::TrailError;

/// Result type whose error is a [`TrailError`].
pub type TrailResult<T> = std::result::Result<T, TrailError>;
