//! The [`Outcome`] type and its combinators.
//!
//! An [`Outcome`] holds either a success payload or a failure payload. All of
//! its combinators are pure: what they return depends only on which variant
//! they are given.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core two-variant type
//! - Iterator adapters over the success payload
//! - [`partition_outcomes`] for splitting a batch into successes and failures
//!
//! # Examples
//!
//! ```
//! use result_rail::outcome::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::ok(20);
//! let label = parsed
//!     .map(|n| n + 1)
//!     .map_error(|e| e.to_uppercase())
//!     .map_or_else(|e| format!("failed: {e}"), |n| format!("got {n}"));
//!
//! assert_eq!(label, "got 21");
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
