//! Tracing integration for result-rail.
//!
//! This module lets an [`Outcome`] report itself to the `tracing` ecosystem
//! without changing its value, so logging can sit in the middle of a
//! combinator chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! result-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use crate::outcome::Outcome;

impl<T, E: Debug> Outcome<T, E> {
    /// Emits a `warn` event when the outcome is a failure, then returns it unchanged.
    ///
    /// The event carries the `operation` label and the `Debug` form of the error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use result_rail::Outcome;
    ///
    /// let loaded = load_profile(id)
    ///     .trace_error("load_profile")
    ///     .map(|profile| profile.display_name);
    /// ```
    #[inline]
    pub fn trace_error(self, operation: &str) -> Self {
        self.inspect_error(|error| {
            tracing::warn!(operation, error = ?error, "outcome failed");
        })
    }
}

impl<T: Debug, E: Debug> Outcome<T, E> {
    /// Emits a `debug` event on success and a `warn` event on failure.
    ///
    /// Returns the outcome unchanged.
    #[inline]
    pub fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Outcome::Ok(value) => {
                tracing::debug!(operation, value = ?value, "outcome succeeded");
            }
            Outcome::Error(error) => {
                tracing::warn!(operation, error = ?error, "outcome failed");
            }
        }
        self
    }
}
