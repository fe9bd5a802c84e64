//! Free-standing operations over optional failures.
//!
//! `None` stands for "nothing failed". Every constructor maps `None` to
//! `None`, and every inspector accepts `None` and any failure value,
//! structured or not, degrading to an empty answer instead of panicking.

use crate::{Details, Factory, Failure, Location, TrailError};
use serde_json::Value;
use std::error::Error as StdError;

/// Turns `err` into a structured error, capturing the stack at the caller.
///
/// Already-structured errors come back unchanged.
///
/// ```
/// use errtrail::extend;
///
/// assert!(extend(None::<std::io::Error>).is_none());
///
/// let err = extend(Some(std::io::Error::other("i/o error"))).unwrap();
/// assert_eq!(err.to_string(), "i/o error");
/// ```
#[track_caller]
pub fn extend<F: Into<Failure>>(err: Option<F>) -> Option<TrailError> {
    match err {
        Some(err) => Some(Factory::default().extend(err)),
        None => None,
    }
}

/// Applies a client-facing mask to `err`.
///
/// A structured `err` is updated in place; `None` as the mask clears it.
///
/// ```
/// use errtrail::{mask, Failure, TrailError};
///
/// let err = mask(Some(TrailError::new("ABC")), Some(Failure::msg("XYZ"))).unwrap();
/// assert_eq!(err.to_string(), "XYZ");
///
/// let err = mask(Some(err), None::<Failure>).unwrap();
/// assert_eq!(err.to_string(), "ABC");
/// ```
#[track_caller]
pub fn mask<F, M>(err: Option<F>, mask: Option<M>) -> Option<TrailError>
where
    F: Into<Failure>,
    M: Into<Failure>,
{
    match err {
        Some(err) => Some(Factory::default().mask(err, mask.map(Into::into))),
        None => None,
    }
}

/// Prefixes the message of `err` with `message`, keeping the inner text visible.
///
/// ```
/// use errtrail::{wrap, TrailError};
///
/// let err = wrap(Some(TrailError::new("i/o error")), "read").unwrap();
/// assert_eq!(err.to_string(), "read: i/o error");
/// ```
#[track_caller]
pub fn wrap<F: Into<Failure>>(err: Option<F>, message: impl Into<String>) -> Option<TrailError> {
    match err {
        Some(err) => Some(Factory::default().wrap(err, message)),
        None => None,
    }
}

/// Returns the cause of a structured error, one level down, or `err` itself.
pub fn cause<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Option<&'a (dyn StdError + 'static)> {
    let err = err?;
    match err.downcast_ref::<TrailError>() {
        Some(trail) => Some(trail.cause().as_dyn()),
        None => Some(err),
    }
}

/// Compares two failures by the text of their root cause, ignoring masks,
/// wrap annotations and stacks at every level of the chain.
///
/// ```
/// use errtrail::{is_equal, TrailError};
///
/// let a = TrailError::new("ABC");
/// let b = TrailError::new("ABC");
/// assert!(is_equal(Some(&a), Some(&b)));
/// assert!(is_equal(None, None));
/// assert!(!is_equal(Some(&a), None));
/// ```
pub fn is_equal(a: Option<&(dyn StdError + 'static)>, b: Option<&(dyn StdError + 'static)>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => cause_text(a) == cause_text(b),
        _ => false,
    }
}

fn cause_text(err: &(dyn StdError + 'static)) -> String {
    match err.downcast_ref::<TrailError>() {
        Some(trail) => trail.root_cause_message(),
        None => err.to_string(),
    }
}

/// Looks up diagnostic data through the chain; `None` for plain failures.
pub fn get_data<'a>(err: Option<&'a (dyn StdError + 'static)>, key: &str) -> Option<&'a Value> {
    err?.downcast_ref::<TrailError>()?.data(key)
}

/// Attaches diagnostic data to a structured error; a no-op otherwise.
pub fn set_data(
    err: Option<&mut (dyn StdError + 'static)>,
    key: impl Into<String>,
    value: impl Into<Value>,
) {
    if let Some(trail) = err.and_then(|err| err.downcast_mut::<TrailError>()) {
        trail.set_data(key, value);
    }
}

/// The captured stack of a structured error; empty otherwise.
pub fn stack<'a>(err: Option<&'a (dyn StdError + 'static)>) -> &'a [Location] {
    match err.and_then(|err| err.downcast_ref::<TrailError>()) {
        Some(trail) => trail.stack(),
        None => &[],
    }
}

/// Renders cause, mask and up to `max_stack_lines` stack entries.
///
/// ```
/// use errtrail::details;
///
/// assert_eq!(details(None, 5), "");
/// let plain = std::io::Error::other("i/o error");
/// assert_eq!(details(Some(&plain), 5), "i/o error");
/// ```
pub fn details(err: Option<&(dyn StdError + 'static)>, max_stack_lines: usize) -> String {
    Details::with_max_lines(max_stack_lines).render(err)
}
