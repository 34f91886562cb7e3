//! Stack growth for recursive descent.
//!
//! The parser recurses once per nesting level of an expression, so input
//! like `((((((...))))))` or `-------x` a few hundred thousand levels deep
//! would overflow a fixed thread stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves the work onto a freshly allocated
//! segment whenever the remaining stack drops below [`RED_ZONE`].
//!
//! Only parsing is guarded. Dropping, rendering, or evaluating a tree that
//! deep still recurses on the caller's stack.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
