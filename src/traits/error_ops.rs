use crate::outcome::Outcome;
use crate::traits::with_error::WithError;

/// Recovery and two-sided mapping for carriers of a success or an error.
///
/// # Examples
///
/// ```
/// use result_rail::traits::ErrorOps;
/// use result_rail::Outcome;
///
/// let recovered = Outcome::<i32, &str>::error("missing").recover(|_| Outcome::ok(0));
/// assert_eq!(recovered, Outcome::ok(0));
///
/// let both = Outcome::<i32, &str>::error("bad").bimap_outcome(|x| x * 2, str::len);
/// assert_eq!(both, Outcome::error(3));
/// ```
pub trait ErrorOps<E>: WithError<E> {
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
        Self: Sized;

    fn bimap_outcome<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Outcome<B, G>
    where
        SuccessF: FnOnce(Self::Success) -> B,
        ErrorF: FnOnce(E) -> G,
        Self: Sized;
}

impl<T, E> ErrorOps<E> for Outcome<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        self.or_else(recovery)
    }

    #[inline]
    fn bimap_outcome<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Outcome<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(success_f(value)),
            Outcome::Error(error) => Outcome::Error(error_f(error)),
        }
    }
}

impl<T, E> ErrorOps<E> for Result<T, E> {
    #[inline]
    fn recover<F>(self, recovery: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        self.or_else(recovery)
    }

    #[inline]
    fn bimap_outcome<B, G, SuccessF, ErrorF>(
        self,
        success_f: SuccessF,
        error_f: ErrorF,
    ) -> Outcome<B, G>
    where
        SuccessF: FnOnce(T) -> B,
        ErrorF: FnOnce(E) -> G,
    {
        Outcome::from_result(self).bimap_outcome(success_f, error_f)
    }
}
