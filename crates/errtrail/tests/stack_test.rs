//! Tests for stack capture.

use errtrail::{
    Factory, Failure, ResultExt, StackConfig, TrailError, UNKNOWN_FUNCTION, extend, mask, wrap,
};
use std::io;

fn assert_points_here(err: &TrailError, line: u32, function: &str) {
    let first = &err.stack()[0];
    assert_eq!(*first.line(), line);
    assert!(
        first.file().ends_with("stack_test.rs"),
        "unexpected file {}",
        first.file()
    );
    assert!(
        first.function() == UNKNOWN_FUNCTION || first.function().contains(function),
        "unexpected function {}",
        first.function()
    );
}

#[test]
fn new_starts_at_caller() {
    let line = line!() + 1;
    let err = TrailError::new("boom");
    assert_points_here(&err, line, "new_starts_at_caller");
}

#[test]
fn errorf_starts_at_caller() {
    let line = line!() + 1;
    let err = errtrail::errorf!("boom {}", 1);
    assert_points_here(&err, line, "errorf_starts_at_caller");
}

#[test]
fn extend_starts_at_caller() {
    let line = line!() + 1;
    let err = extend(Some(io::Error::other("boom"))).unwrap();
    assert_points_here(&err, line, "extend_starts_at_caller");
}

#[test]
fn mask_starts_at_caller() {
    let line = line!() + 1;
    let err = mask(Some(io::Error::other("boom")), Some(Failure::msg("masked"))).unwrap();
    assert_points_here(&err, line, "mask_starts_at_caller");
}

#[test]
fn wrap_starts_at_caller() {
    let line = line!() + 1;
    let err = wrap(Some(io::Error::other("boom")), "context").unwrap();
    assert_points_here(&err, line, "wrap_starts_at_caller");
}

#[test]
fn result_ext_starts_at_caller() {
    let result: Result<(), io::Error> = Err(io::Error::other("boom"));
    let line = line!() + 1;
    let err = result.wrap_err("context").unwrap_err();
    assert_points_here(&err, line, "result_ext_starts_at_caller");
}

#[inline(never)]
fn failing_helper() -> TrailError {
    TrailError::new("helper failed")
}

#[test]
fn nested_call_records_helper_first() {
    let err = failing_helper();
    let first = &err.stack()[0];
    assert!(first.file().ends_with("stack_test.rs"));
    assert!(first.function() == UNKNOWN_FUNCTION || first.function().contains("failing_helper"));

    if let Some(second) = err.stack().get(1) {
        assert!(second.function().contains("nested_call_records_helper_first"));
    }
}

#[test]
fn default_depth_is_bounded() {
    let err = TrailError::new("boom");
    assert!(!err.stack().is_empty());
    assert!(err.stack().len() <= errtrail::DEFAULT_MAX_DEPTH);
}

#[test]
fn factory_depth_limits_capture() {
    let factory = Factory::new(StackConfig::builder().max_depth(1).build());
    let err = factory.error("boom");
    assert_eq!(err.stack().len(), 1);

    let deep = Factory::new(StackConfig::builder().max_depth(64).build());
    let err = deep.error("boom");
    assert!(!err.stack().is_empty());
    assert!(err.stack().len() <= 64);
}

#[test]
fn zero_depth_disables_capture() {
    let factory = Factory::new(StackConfig::disabled());
    assert!(factory.error("boom").stack().is_empty());
    assert!(factory.extend(io::Error::other("boom")).stack().is_empty());
    assert!(factory.wrap(io::Error::other("boom"), "context").stack().is_empty());
    assert!(
        factory
            .mask(io::Error::other("boom"), Some(Failure::msg("masked")))
            .stack()
            .is_empty()
    );
}

#[test]
fn wrap_captures_its_own_stack() {
    let inner_line = line!() + 1;
    let inner = TrailError::new("inner");
    let outer_line = line!() + 1;
    let outer = wrap(Some(inner), "outer").unwrap();

    assert_eq!(*outer.stack()[0].line(), outer_line);
    let inner = outer.cause().as_structured().unwrap();
    assert_eq!(*inner.stack()[0].line(), inner_line);
}

#[test]
fn stack_entries_render_as_function_file_line() {
    let err = TrailError::new("boom");
    let first = &err.stack()[0];
    assert_eq!(
        first.to_string(),
        format!("{} [{}:{}]", first.function(), first.file(), first.line())
    );
}

#[cfg(debug_assertions)]
#[test]
fn debug_build_records_symbolized_frames() {
    let err = failing_helper();
    let stack = err.stack();

    assert!(stack.len() > 1, "expected more than one frame, got {stack:?}");
    assert!(
        stack[0].function().contains("failing_helper"),
        "unexpected first frame {}",
        stack[0]
    );
    assert!(
        stack[1]
            .function()
            .contains("debug_build_records_symbolized_frames"),
        "unexpected second frame {}",
        stack[1]
    );
}

#[cfg(debug_assertions)]
#[test]
fn debug_build_frames_share_one_path_form() {
    let err = failing_helper();
    let stack = err.stack();
    assert!(stack.len() > 1);

    // Helper and test live in the same file, so both paths must match exactly.
    assert_eq!(stack[0].file(), stack[1].file());
    for location in stack {
        assert!(*location.line() > 0, "line 0 in {location}");
        assert!(!location.file().is_empty(), "empty file in {location}");
    }
}
