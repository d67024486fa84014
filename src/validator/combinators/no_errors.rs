//! NoErrors - the validator that accepts everything.

use std::marker::PhantomData;

use crate::validator::trait_def::Validator;

/// Always reports zero errors.
///
/// The neutral element of [`every`](crate::validator::every): adding it to a
/// list never changes the result.
pub struct NoErrors<E> {
    _phantom: PhantomData<fn() -> E>,
}

impl<E> NoErrors<E> {
    /// Create a new NoErrors validator.
    pub fn new() -> Self {
        NoErrors {
            _phantom: PhantomData,
        }
    }
}

impl<E> Default for NoErrors<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for NoErrors<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> Copy for NoErrors<E> {}

impl<E> std::fmt::Debug for NoErrors<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NoErrors")
    }
}

impl<T: ?Sized, E> Validator<T> for NoErrors<E> {
    type Error = E;

    #[inline]
    fn validate(&self, _value: &T) -> Vec<E> {
        Vec::new()
    }
}
