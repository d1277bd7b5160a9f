//! Stack safety for recursive typing.
//!
//! Typing an expression recurses through its children and through the
//! declarations its names resolve to, so nesting depth in the source
//! becomes stack depth here.

/// Run `f`, growing the stack first if less than 256KB remains.
///
/// Each growth allocates a fresh 2MB segment.
pub fn ensure_sufficient_stack<R, F: FnOnce() -> R>(f: F) -> R {
    stacker::maybe_grow(256 * 1024, 2 * 1024 * 1024, f)
}
