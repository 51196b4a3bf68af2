use crate::outcome::core::Outcome;
use crate::types::{ErrorVec, OkVec};

pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_ok() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success value, yielding it at most once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref().into_ok() }
    }

    /// Mutably iterates over the success value, yielding it at most once.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { inner: self.as_mut().into_ok() }
    }
}

/// Collects an iterator of outcomes, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use result_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> = vec![Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
/// assert_eq!(all, Outcome::ok(vec![1, 2]));
///
/// let first_error: Outcome<Vec<i32>, &str> =
///     vec![Outcome::ok(1), Outcome::error("a"), Outcome::error("b")].into_iter().collect();
/// assert_eq!(first_error, Outcome::error("a"));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut failure = None;
        let values: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Ok(value) => Some(value),
                Outcome::Error(error) => {
                    failure = Some(error);
                    None
                }
            })
            .collect();

        match failure {
            Some(error) => Outcome::Error(error),
            None => Outcome::Ok(values),
        }
    }
}

/// Splits outcomes into successes and failures, keeping the order of each.
///
/// Unlike collecting into an `Outcome`, this consumes the whole iterator.
///
/// # Examples
///
/// ```
/// use result_rail::{partition_outcomes, Outcome};
///
/// let (oks, errors) = partition_outcomes(vec![
///     Outcome::ok(1),
///     Outcome::error("x"),
///     Outcome::ok(3),
/// ]);
/// assert_eq!(oks.as_slice(), &[1, 3]);
/// assert_eq!(errors.as_slice(), &["x"]);
/// ```
pub fn partition_outcomes<T, E, I>(outcomes: I) -> (OkVec<T>, ErrorVec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut oks = OkVec::new();
    let mut errors = ErrorVec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => oks.push(value),
            Outcome::Error(error) => errors.push(error),
        }
    }
    (oks, errors)
}
