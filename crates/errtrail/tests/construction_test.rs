//! Tests for the construction operations and absent propagation.

use errtrail::{Failure, TrailError, cause, errorf, extend, mask, wrap, wrapf};
use std::io;

#[test]
fn new_keeps_message_as_cause() {
    let err = TrailError::new("some error");
    assert_eq!(err.to_string(), "some error");
    assert_eq!(err.cause().message(), "some error");
    assert!(err.mask().is_none());
    assert!(!err.stack().is_empty());
}

#[test]
fn new_accepts_empty_message() {
    let err = TrailError::new("");
    assert_eq!(err.to_string(), "");
    assert_eq!(err.cause_message(), "");
}

#[test]
fn errorf_formats_cause() {
    let err = errorf!("user {} not found in {:?}", 42, "accounts");
    assert_eq!(err.to_string(), "user 42 not found in \"accounts\"");
    assert_eq!(err.cause_message(), "user 42 not found in \"accounts\"");
}

#[test]
fn absent_inputs_stay_absent() {
    assert!(extend(None::<io::Error>).is_none());
    assert!(mask(None::<io::Error>, Some(Failure::msg("x"))).is_none());
    assert!(mask(None::<io::Error>, None::<Failure>).is_none());
    assert!(wrap(None::<io::Error>, "x").is_none());
    assert!(wrapf!(None::<io::Error>, "read {}", "x").is_none());
}

#[test]
fn present_inputs_never_vanish() {
    assert!(extend(Some(io::Error::other("a"))).is_some());
    assert!(mask(Some(io::Error::other("a")), None::<Failure>).is_some());
    assert!(mask(Some(io::Error::other("a")), Some(Failure::msg("b"))).is_some());
    assert!(wrap(Some(io::Error::other("a")), "b").is_some());
}

#[test]
fn extend_plain_error_preserves_message() {
    let err = extend(Some(io::Error::other("i/o error"))).unwrap();
    assert_eq!(err.to_string(), "i/o error");
    assert_eq!(err.cause().message(), "i/o error");
    assert!(!err.cause().is_structured());
    assert!(!err.stack().is_empty());
}

#[test]
fn extend_structured_error_is_idempotent() {
    let original = TrailError::new("ABC");
    let first_frame = original.stack()[0].clone();

    let extended = extend(Some(original)).unwrap();
    assert_eq!(extended.stack()[0], first_frame);
    assert!(!extended.cause().is_structured());
    assert_eq!(extended.chain().count(), 1);
}

#[test]
fn mask_replaces_public_message_but_keeps_cause() {
    let err = mask(Some(TrailError::new("ABC")), Some(TrailError::new("XYZ"))).unwrap();
    assert_eq!(err.to_string(), "XYZ");
    assert_eq!(
        cause(Some(&err)).map(|c| c.to_string()),
        Some("ABC".to_string())
    );
}

#[test]
fn mask_plain_error_with_plain_mask() {
    let err = mask(
        Some(io::Error::other("connection refused")),
        Some(io::Error::other("service unavailable")),
    )
    .unwrap();
    assert_eq!(err.to_string(), "service unavailable");
    assert_eq!(err.cause_message(), "connection refused");
}

#[test]
fn mask_without_mask_still_materializes() {
    let err = mask(Some(io::Error::other("ERROR")), None::<Failure>).unwrap();
    assert_eq!(err.to_string(), "ERROR");
    assert!(err.mask().is_none());
    assert!(!err.stack().is_empty());
}

#[test]
fn remask_replaces_previous_mask() {
    let err = mask(Some(TrailError::new("ABC")), Some(Failure::msg("001")));
    let err = mask(err, Some(Failure::msg("XYZ"))).unwrap();
    assert_eq!(err.to_string(), "XYZ");
}

#[test]
fn mask_with_none_reverts_to_cause() {
    let err = mask(Some(TrailError::new("ABC")), Some(Failure::msg("XYZ")));
    let err = mask(err, None::<Failure>).unwrap();
    assert_eq!(err.to_string(), "ABC");
}

#[test]
fn mask_updates_structured_error_in_place() {
    let mut original = TrailError::new("ABC");
    original.set_data("request", "r-1");
    let frames = original.stack().to_vec();

    let masked = mask(Some(original), Some(Failure::msg("XYZ"))).unwrap();
    assert_eq!(masked.stack(), frames.as_slice());
    assert_eq!(masked.data("request"), Some(&"r-1".into()));
    assert_eq!(masked.chain().count(), 1);
}

#[test]
fn wrap_prefixes_message() {
    let err = wrap(Some(TrailError::new("i/o error")), "read").unwrap();
    assert_eq!(err.to_string(), "read: i/o error");
    assert_eq!(err.wrap_message(), Some("read"));
}

#[test]
fn wrapf_formats_prefix() {
    let err = wrapf!(Some(TrailError::new("i/o error")), "read {:?}", "config.yaml").unwrap();
    assert_eq!(err.to_string(), "read \"config.yaml\": i/o error");
}

#[test]
fn wrap_builds_breadcrumb_trail() {
    let err = wrap(Some(io::Error::other("i/o error")), "read");
    let err = wrap(err, "load config");
    let err = wrap(err, "start server").unwrap();
    assert_eq!(err.to_string(), "start server: load config: read: i/o error");
    assert_eq!(err.chain().count(), 3);
}

#[test]
fn wrap_shows_inner_mask() {
    let inner = mask(Some(TrailError::new("sql syntax error")), Some(Failure::msg("bad query")));
    let err = wrap(inner, "list users").unwrap();
    assert_eq!(err.to_string(), "list users: bad query");
}

#[test]
fn mask_on_wrap_chain_hides_breadcrumbs() {
    let err = wrap(Some(TrailError::new("i/o error")), "read");
    let err = mask(err, Some(Failure::msg("try again"))).unwrap();
    assert_eq!(err.to_string(), "try again");
    assert_eq!(err.cause_message(), "i/o error");
}

#[test]
fn source_walks_the_chain() {
    use std::error::Error as _;

    let err = wrap(Some(io::Error::other("i/o error")), "read").unwrap();
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "i/o error");
    assert!(source.source().is_none());
}

#[test]
fn failure_from_boxed_recovers_structured() {
    let boxed: errtrail::BoxError = Box::new(TrailError::new("ABC"));
    let failure = Failure::from_boxed(boxed);
    assert!(failure.is_structured());
    assert_eq!(failure.message(), "ABC");

    let boxed: errtrail::BoxError = Box::new(io::Error::other("plain"));
    let failure = Failure::from_boxed(boxed);
    assert!(!failure.is_structured());
    assert_eq!(failure.into_boxed().to_string(), "plain");
}
