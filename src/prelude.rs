//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use result_rail::prelude::*;
//!
//! let total: Outcome<Vec<u32>, &str> = ["1", "2", "3"]
//!     .iter()
//!     .map(|s| s.parse::<u32>().map_err(|_| "not a number").into_outcome())
//!     .collect();
//!
//! assert_eq!(total.map_or(0, |v| v.iter().sum::<u32>()), 6);
//! ```

// Core types
pub use crate::outcome::{partition_outcomes, Outcome};
pub use crate::types::{ErrorVec, OkVec};

// Traits
pub use crate::traits::{ErrorCategory, ErrorOps, IntoOutcome, WithError};
