//! Core traits shared by [`Outcome`](crate::Outcome) and `Result`.
//!
//! - [`ErrorCategory`]: Categorical abstraction for lifting values and handling errors
//! - [`ErrorOps`]: Operations for error recovery and bidirectional mapping
//! - [`IntoOutcome`]: Conversion of result-like values into an [`Outcome`](crate::Outcome)
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::{ErrorCategory, WithError};
//! use result_rail::Outcome;
//!
//! let lifted: Outcome<i32, String> = <Outcome<(), String>>::lift(42);
//! assert_eq!(lifted, Outcome::ok(42));
//!
//! let remapped = Outcome::<i32, u16>::error(404).fmap_error(|code| format!("HTTP {code}"));
//! assert_eq!(remapped.to_result(), Err("HTTP 404".to_string()));
//! ```

pub mod error_category;
pub mod error_ops;
pub mod into_outcome;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use error_ops::ErrorOps;
pub use into_outcome::IntoOutcome;
pub use with_error::WithError;
