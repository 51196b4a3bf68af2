/// A value that is either a success payload or a failure payload.
///
/// `Outcome<T, E>` is a closed two-variant sum type used in place of raised
/// failures. Exactly one variant is active, and every combinator on it is a
/// pure function of which variant that is.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The failure payload type
///
/// # Variants
///
/// * `Ok(T)` - Contains a success value
/// * `Error(E)` - Contains a failure value
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::ok(42);
/// assert!(ok.is_ok());
///
/// let err = Outcome::<i32, &str>::error("boom");
/// assert!(err.is_error());
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Error(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::ok(42);
    /// assert_eq!(o.into_ok(), Some(42));
    /// ```
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failure outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The failure value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<(), &str>::error("missing field");
    /// assert_eq!(o.into_error(), Some("missing field"));
    /// ```
    #[inline]
    pub const fn error(value: E) -> Self {
        Self::Error(value)
    }

    /// Returns `true` if the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, &str>::ok(1).is_ok());
    /// assert!(!Outcome::<i32, &str>::error("e").is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub const fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Maps the success value using the provided function.
    ///
    /// A failure is passed through with its payload untouched and `f` is
    /// never called.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::ok(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::ok(42));
    ///
    /// let untouched = Outcome::<i32, &str>::error("bad").map(|x| x * 2);
    /// assert_eq!(untouched, Outcome::error("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Applies `f` to the success value, or returns `default` on failure.
    ///
    /// The failure payload is discarded.
    ///
    /// # Arguments
    ///
    /// * `default` - The value returned when the outcome is a failure
    /// * `f` - A function applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let ok = Outcome::<&str, &str>::ok("foo");
    /// assert_eq!(ok.map_or(42, |s| s.len()), 3);
    ///
    /// let err = Outcome::<&str, &str>::error("bar");
    /// assert_eq!(err.map_or(42, |s| s.len()), 42);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(_) => default,
        }
    }

    /// Applies `f` to the success value, or `default_fn` to the failure value.
    ///
    /// Unlike [`map_or`](Self::map_or), the fallback observes the failure payload.
    ///
    /// # Arguments
    ///
    /// * `default_fn` - A function applied to the failure value
    /// * `f` - A function applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let err = Outcome::<&str, &str>::error("bar");
    /// assert_eq!(err.map_or_else(|e| e.len() * 10, |s| s.len()), 30);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default_fn: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(error) => default_fn(error),
        }
    }

    /// Maps the failure value while preserving the success branch.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the failure from type `E` to type `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, u16>::error(13).map_error(|code| format!("code:{code}"));
    /// assert_eq!(o, Outcome::error("code:13".to_string()));
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(f(error)),
        }
    }

    /// Returns `next` if this outcome is a success, otherwise this failure.
    ///
    /// `next` is an already-built value, so it is evaluated by the caller even
    /// when it ends up discarded. Use [`and_then`](Self::and_then) when
    /// building the second outcome has side effects or is expensive.
    ///
    /// # Arguments
    ///
    /// * `next` - The outcome to return on success
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let first = Outcome::<i32, &str>::ok(2);
    /// assert_eq!(first.and_then_result(Outcome::<&str, &str>::ok("y")), Outcome::ok("y"));
    ///
    /// let early = Outcome::<i32, &str>::error("early");
    /// assert_eq!(early.and_then_result(Outcome::<&str, &str>::ok("x")), Outcome::error("early"));
    /// ```
    #[inline]
    pub fn and_then_result<U>(self, next: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => next,
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `f` is invoked only when the current outcome is a success.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Outcome::ok(input)
    ///     } else {
    ///         Outcome::error("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(4).and_then(parse_even), Outcome::ok(4));
    /// assert_eq!(Outcome::ok(3).and_then(parse_even), Outcome::error("not even"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Calls `op` if the outcome is a failure, otherwise returns the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::error("missing");
    /// let recovered: Outcome<i32, ()> = o.or_else(|_| Outcome::ok(0));
    /// assert_eq!(recovered, Outcome::ok(0));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => op(error),
        }
    }

    /// Borrows both payloads, producing `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Mutably borrows both payloads, producing `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Extracts the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::ok(7).into_ok(), Some(7));
    /// assert_eq!(Outcome::<i32, &str>::error("e").into_ok(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Extracts the failure value, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Returns the success value or `default`.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let o = Outcome::<usize, &str>::error("four");
    /// assert_eq!(o.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => f(error),
        }
    }

    /// Calls `f` with a reference to the success value and returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the failure value and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let o = Outcome::<i32, &str>::error("boom").inspect_error(|e| seen = Some(*e));
    /// assert_eq!(seen, Some("boom"));
    /// assert!(o.is_error());
    /// ```
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Error(error) = &self {
            f(error);
        }
        self
    }

    /// Converts into a standard `Result` so the outcome can be used with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// fn double(o: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
    ///     let value = o.into_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::ok(21)), Ok(42));
    /// assert_eq!(double(Outcome::error("nope")), Err("nope"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }

    /// Wraps a standard `Result` into an `Outcome`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::ok(Outcome::error("inner"));
    /// assert_eq!(nested.flatten(), Outcome::error("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}
