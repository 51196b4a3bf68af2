//! A minimal, `no_std` success-or-failure value type with composable combinators.
//!
//! [`Outcome<T, E>`](Outcome) is a closed two-variant sum type: `Ok(T)` or
//! `Error(E)`. Every combinator on it is pure and total, and caller-supplied
//! closures are run at most once and never retained.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Construction and Mapping
//!
//! ```
//! use result_rail::Outcome;
//!
//! let ok: Outcome<&str, &str> = Outcome::ok("foo");
//! assert_eq!(ok.map(str::len), Outcome::ok(3));
//!
//! let err: Outcome<&str, u16> = Outcome::error(13);
//! assert_eq!(err.map_error(|code| format!("code:{code}")), Outcome::error("code:13".to_string()));
//! ```
//!
//! ## Free Functions
//!
//! ```
//! use result_rail::functions::{and_then_result, error, ok};
//!
//! assert_eq!(and_then_result(ok::<i32, &str>(2), ok::<&str, &str>("y")), ok("y"));
//! assert_eq!(and_then_result(error::<i32, &str>("a"), error::<i32, &str>("b")), error("a"));
//! ```
//!
//! ## Interop with `?`
//!
//! ```
//! use result_rail::{IntoOutcome, Outcome};
//!
//! fn parse_port(raw: &str) -> Result<u16, String> {
//!     let port = raw
//!         .parse::<u16>()
//!         .into_outcome()
//!         .map_error(|e| format!("bad port {raw:?}: {e}"))
//!         .into_result()?;
//!     Ok(port)
//! }
//!
//! assert_eq!(parse_port("8080"), Ok(8080));
//! assert!(parse_port("http").is_err());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result, and Option
pub mod convert;
/// Free-function forms of the core combinators
pub mod functions;
/// The Outcome type, its combinators, and iteration
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits shared by Outcome and Result
pub mod traits;
/// SmallVec-backed collection aliases
pub mod types;

/// Tracing hooks for Outcome (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use outcome::{partition_outcomes, IntoIter, Iter, IterMut, Outcome};
pub use traits::*;
pub use types::{ErrorVec, OkVec};
