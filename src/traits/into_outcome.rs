use crate::outcome::Outcome;

/// Conversion into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use result_rail::traits::IntoOutcome;
/// use result_rail::Outcome;
///
/// let parsed = "12".parse::<u8>().into_outcome();
/// assert_eq!(parsed, Outcome::ok(12));
/// ```
pub trait IntoOutcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}
