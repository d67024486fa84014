//! Validators lifted from boolean predicates.
//!
//! Three flavours differ only in where the error comes from:
//! - [`FromPredicate`]: a fixed error value
//! - [`FromPredicateWith`]: an error built from the rejected value
//! - [`FromPredicateSelf`]: the rejected value is the error

use crate::predicate::Predicate;
use crate::validator::trait_def::Validator;

/// Reports a fixed error when the predicate fails.
#[derive(Clone, Debug)]
pub struct FromPredicate<P, E> {
    pub(crate) predicate: P,
    pub(crate) error: E,
}

impl<T, P, E> Validator<T> for FromPredicate<P, E>
where
    T: ?Sized,
    P: Predicate<T>,
    E: Clone + Send + Sync,
{
    type Error = E;

    #[inline]
    fn validate(&self, value: &T) -> Vec<E> {
        if self.predicate.check(value) {
            Vec::new()
        } else {
            vec![self.error.clone()]
        }
    }
}

/// Builds the error from the rejected value when the predicate fails.
pub struct FromPredicateWith<P, F> {
    pub(crate) predicate: P,
    pub(crate) make_error: F,
}

impl<P: Clone, F: Clone> Clone for FromPredicateWith<P, F> {
    fn clone(&self) -> Self {
        FromPredicateWith {
            predicate: self.predicate.clone(),
            make_error: self.make_error.clone(),
        }
    }
}

impl<P, F> std::fmt::Debug for FromPredicateWith<P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromPredicateWith")
            .field("predicate", &"<predicate>")
            .field("make_error", &"<function>")
            .finish()
    }
}

impl<T, P, F, E> Validator<T> for FromPredicateWith<P, F>
where
    T: ?Sized,
    P: Predicate<T>,
    F: Fn(&T) -> E + Send + Sync,
{
    type Error = E;

    #[inline]
    fn validate(&self, value: &T) -> Vec<E> {
        if self.predicate.check(value) {
            Vec::new()
        } else {
            vec![(self.make_error)(value)]
        }
    }
}

/// Reports an owned copy of the rejected value itself.
///
/// Useful when the value is its own best diagnostic, such as an element
/// missing from an allow-list.
#[derive(Clone, Debug)]
pub struct FromPredicateSelf<P> {
    pub(crate) predicate: P,
}

impl<T, P> Validator<T> for FromPredicateSelf<P>
where
    T: ?Sized + ToOwned,
    P: Predicate<T>,
{
    type Error = T::Owned;

    #[inline]
    fn validate(&self, value: &T) -> Vec<T::Owned> {
        if self.predicate.check(value) {
            Vec::new()
        } else {
            vec![value.to_owned()]
        }
    }
}
