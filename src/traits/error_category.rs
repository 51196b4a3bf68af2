use crate::outcome::Outcome;
use crate::traits::WithError;

/// Builds the success and failure forms of a carrier type.
///
/// Implemented on the unit-success carrier (`Outcome<(), E>`, `Result<(), E>`),
/// whose associated functor then produces carriers for any success type.
pub trait ErrorCategory<E> {
    type ErrorFunctor<T>: WithError<E>;

    fn lift<T>(value: T) -> Self::ErrorFunctor<T>;

    fn handle_error<T>(error: E) -> Self::ErrorFunctor<T>;
}

impl<E> ErrorCategory<E> for Outcome<(), E> {
    type ErrorFunctor<T> = Outcome<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Outcome<T, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Outcome<T, E> {
        Outcome::Error(error)
    }
}

impl<E> ErrorCategory<E> for Result<(), E> {
    type ErrorFunctor<T> = Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Result<T, E> {
        Err(error)
    }
}
