//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `result-rail` at the edges
//! of existing code: wrap standard results coming in, and hand standard
//! results back out so `?` keeps working.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::*;
//! use result_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let back: Result<i32, &str> = outcome_to_result(outcome);
//! assert_eq!(back, Ok(42));
//!
//! let missing: Outcome<i32, &str> = option_to_outcome(None, "not found");
//! assert_eq!(missing, Outcome::error("not found"));
//! ```

use crate::outcome::Outcome;

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Converts a `Result` into an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Ok(value)` if result is `Ok`
/// * `Outcome::Error(error)` if result is `Err`
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` into a `Result`.
///
/// # Examples
///
/// ```
/// use result_rail::convert::outcome_to_result;
/// use result_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::error("e")), Err("e"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome`, using `error` when the option is empty.
///
/// `error` is evaluated eagerly; see [`option_to_outcome_with`] for the lazy form.
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Error(error),
    }
}

/// Converts an `Option` into an `Outcome`, building the error only when needed.
///
/// # Examples
///
/// ```
/// use result_rail::convert::option_to_outcome_with;
/// use result_rail::Outcome;
///
/// let found: Outcome<i32, String> = option_to_outcome_with(Some(3), || "never built".to_string());
/// assert_eq!(found, Outcome::ok(3));
///
/// let missing: Outcome<i32, String> = option_to_outcome_with(None, || format!("id {}", 7));
/// assert_eq!(missing, Outcome::error("id 7".to_string()));
/// ```
#[inline]
pub fn option_to_outcome_with<T, E, F>(option: Option<T>, f: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Error(f()),
    }
}

/// Collapses a nested outcome, keeping whichever failure occurred first.
///
/// # Examples
///
/// ```
/// use result_rail::convert::flatten_outcome;
/// use result_rail::Outcome;
///
/// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::ok(5));
/// assert_eq!(flatten_outcome(nested), Outcome::ok(5));
///
/// let outer: Outcome<Outcome<i32, &str>, &str> = Outcome::error("outer");
/// assert_eq!(flatten_outcome(outer), Outcome::error("outer"));
/// ```
#[inline]
pub fn flatten_outcome<T, E>(nested: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    nested.flatten()
}
