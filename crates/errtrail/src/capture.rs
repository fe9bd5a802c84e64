//! Call-stack capture anchored at the caller of a construction operation.
//!
//! Every construction path is `#[track_caller]`, so `Location::caller()` names
//! the exact user call site. The unwinder walks outward from here and drops
//! every frame until it reaches a symbol at that file and line; frames
//! belonging to errtrail itself (and to the unwinder) never appear in the
//! captured stack. Every recorded frame takes its path and line from the
//! symbol table, so all entries of one stack share a path form. If no symbol
//! can be matched, which happens in builds without debug info, the stack
//! degrades to the single caller location.

use crate::location::UNKNOWN_FUNCTION;
use crate::{Location, StackConfig};
use std::path::Path;
use tracing::trace;

/// Captures up to `config.max_depth()` frames, starting at the caller.
#[track_caller]
#[inline(never)]
pub(crate) fn capture(config: &StackConfig) -> Vec<Location> {
    let caller = std::panic::Location::caller();
    capture_from(caller, *config.max_depth())
}

#[inline(never)]
fn capture_from(caller: &std::panic::Location<'_>, max_depth: usize) -> Vec<Location> {
    if max_depth == 0 {
        return Vec::new();
    }

    let mut stack: Vec<Location> = Vec::with_capacity(max_depth);
    let mut anchored = false;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if stack.len() >= max_depth {
                return;
            }
            // Frames without a file or a line cannot be rendered.
            let (Some(path), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            if line == 0 {
                return;
            }

            if !anchored {
                anchored = line == caller.line() && path.ends_with(Path::new(caller.file()));
                if !anchored {
                    return;
                }
            }

            let function = symbol
                .name()
                .map(|name| format!("{name:#}"))
                .unwrap_or_else(|| UNKNOWN_FUNCTION.to_string());
            stack.push(Location::new(function, path.display().to_string(), line));
        });
        stack.len() < max_depth
    });

    if !anchored {
        stack.push(Location::new(UNKNOWN_FUNCTION, caller.file(), caller.line()));
    }

    trace!(frames = stack.len(), anchored, "Captured stack");
    stack
}
