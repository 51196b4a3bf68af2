//! Free-function forms of the core combinators.
//!
//! Each function takes the outcome as its first argument and delegates to the
//! matching method on [`Outcome`]. They are handy as function pointers, e.g.
//! `iter.filter(is_ok)`.
//!
//! # Examples
//!
//! ```
//! use result_rail::functions::{and_then_result, error, is_error, map_or, ok};
//!
//! let first = ok::<i32, &str>(2);
//! let combined = and_then_result(first, error::<&str, &str>("late"));
//! assert!(is_error(&combined));
//!
//! assert_eq!(map_or(ok::<&str, &str>("foo"), 42, str::len), 3);
//! ```

use crate::outcome::Outcome;

/// Constructs the success variant wrapping `value`.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Constructs the failure variant wrapping `value`.
#[inline]
pub const fn error<T, E>(value: E) -> Outcome<T, E> {
    Outcome::Error(value)
}

/// Returns `true` iff `outcome` is the success variant.
#[must_use]
#[inline]
pub const fn is_ok<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_ok()
}

/// Returns `true` iff `outcome` is the failure variant.
#[must_use]
#[inline]
pub const fn is_error<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_error()
}

/// See [`Outcome::map`].
#[inline]
pub fn map<T, E, U, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// See [`Outcome::map_or`].
#[inline]
pub fn map_or<T, E, U, F>(outcome: Outcome<T, E>, default: U, f: F) -> U
where
    F: FnOnce(T) -> U,
{
    outcome.map_or(default, f)
}

/// See [`Outcome::map_or_else`].
///
/// # Examples
///
/// ```
/// use result_rail::functions::{error, map_or_else, ok};
///
/// assert_eq!(map_or_else(ok::<&str, &str>("foo"), |_| 42, str::len), 3);
/// assert_eq!(map_or_else(error::<&str, &str>("bar"), |_| 42, str::len), 42);
/// ```
#[inline]
pub fn map_or_else<T, E, U, D, F>(outcome: Outcome<T, E>, default_fn: D, f: F) -> U
where
    D: FnOnce(E) -> U,
    F: FnOnce(T) -> U,
{
    outcome.map_or_else(default_fn, f)
}

/// See [`Outcome::map_error`].
#[inline]
pub fn map_error<T, E, G, F>(outcome: Outcome<T, E>, f: F) -> Outcome<T, G>
where
    F: FnOnce(E) -> G,
{
    outcome.map_error(f)
}

/// See [`Outcome::and_then_result`].
///
/// Both arguments are already evaluated when this is called.
#[inline]
pub fn and_then_result<T, U, E>(first: Outcome<T, E>, second: Outcome<U, E>) -> Outcome<U, E> {
    first.and_then_result(second)
}
