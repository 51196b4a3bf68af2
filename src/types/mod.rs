//! Collection aliases shared across the crate.
//!
//! # Examples
//!
//! ```
//! use result_rail::{ErrorVec, OkVec};
//!
//! let mut errors: ErrorVec<&str> = ErrorVec::new();
//! errors.push("first");
//! assert!(!errors.spilled());
//!
//! let oks: OkVec<i32> = (0..8).collect();
//! assert_eq!(oks.len(), 8);
//! ```
use smallvec::SmallVec;

/// SmallVec-backed collection used for accumulating failures.
///
/// Uses inline storage for a single element, since most batches fail at most once.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// SmallVec-backed collection used for accumulating successes.
///
/// Uses inline storage for up to 4 elements before spilling to the heap.
pub type OkVec<T> = SmallVec<[T; 4]>;
