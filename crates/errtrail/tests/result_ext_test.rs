//! Tests for the `Result` adapters.

use errtrail::{Failure, ResultExt, TrailError, TrailResult, is_equal};
use std::io;

fn read(fail: bool) -> Result<u32, io::Error> {
    if fail {
        Err(io::Error::other("i/o error"))
    } else {
        Ok(7)
    }
}

fn load(fail: bool) -> TrailResult<u32> {
    let value = read(fail).wrap_err("read config.yaml")?;
    Ok(value * 2)
}

#[test]
fn ok_passes_through() {
    assert_eq!(read(false).extend_err().unwrap(), 7);
    assert_eq!(read(false).mask_err(Failure::msg("x")).unwrap(), 7);
    assert_eq!(read(false).wrap_err("x").unwrap(), 7);
    assert_eq!(load(false).unwrap(), 14);
}

#[test]
fn wrap_err_prefixes_message() {
    let err = load(true).unwrap_err();
    assert_eq!(err.to_string(), "read config.yaml: i/o error");
    assert!(is_equal(Some(&err), Some(&io::Error::other("i/o error"))));
}

#[test]
fn wrap_err_with_is_lazy() {
    let mut called = false;
    let ok = read(false).wrap_err_with(|| {
        called = true;
        "never"
    });
    assert!(ok.is_ok());
    assert!(!called);

    let err = read(true)
        .wrap_err_with(|| format!("attempt {}", 2))
        .unwrap_err();
    assert_eq!(err.to_string(), "attempt 2: i/o error");
}

#[test]
fn extend_err_keeps_structured_errors() {
    let result: TrailResult<()> = Err(TrailError::new("ABC"));
    let err = result.extend_err().unwrap_err();
    assert_eq!(err.chain().count(), 1);
    assert_eq!(err.to_string(), "ABC");
}

#[test]
fn mask_err_hides_cause() {
    let err = read(true)
        .mask_err(Failure::msg("please retry"))
        .unwrap_err();
    assert_eq!(err.to_string(), "please retry");
    assert_eq!(err.cause_message(), "i/o error");
}

#[test]
fn chained_adapters_compose() {
    let err = read(true)
        .wrap_err("read")
        .wrap_err("load")
        .mask_err(io::Error::other("unavailable"))
        .unwrap_err();
    assert_eq!(err.to_string(), "unavailable");
    assert_eq!(err.chain().count(), 2);
    assert_eq!(err.cause_message(), "read: i/o error");
}
