//! Stack growth for nested group parsing and matching.
//!
//! - **Red zone**: 100KB. Less than this remaining triggers growth.
//! - **Growth size**: 1MB per segment.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if it is close to running out.
///
/// Wraps every recursion into a nested group so rules like `((((...))))`
/// cannot overflow the native stack.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
