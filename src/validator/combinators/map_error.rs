//! MapError combinator - transforms every reported error.

use crate::validator::trait_def::Validator;

/// Applies a function to every error of the inner validator.
///
/// The number and order of errors never change, and a valid value stays
/// valid: `f` is only called for errors that were actually reported.
pub struct MapError<V, F> {
    pub(crate) inner: V,
    pub(crate) f: F,
}

impl<V: Clone, F: Clone> Clone for MapError<V, F> {
    fn clone(&self) -> Self {
        MapError {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

impl<V, F> std::fmt::Debug for MapError<V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapError")
            .field("inner", &"<validator>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<T, V, F, E2> Validator<T> for MapError<V, F>
where
    T: ?Sized,
    V: Validator<T>,
    F: Fn(V::Error) -> E2 + Send + Sync,
{
    type Error = E2;

    #[inline]
    fn validate(&self, value: &T) -> Vec<E2> {
        self.inner.validate(value).into_iter().map(&self.f).collect()
    }
}
