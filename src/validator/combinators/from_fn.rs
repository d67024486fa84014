//! FromFn - validator from a plain function.

use std::marker::PhantomData;

use crate::validator::trait_def::Validator;

/// Validator backed by a function returning the error list directly.
///
/// Created by [`from_fn`](crate::validator::from_fn).
pub struct FromFn<F, T: ?Sized> {
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn(&T)>,
}

impl<F, T: ?Sized> FromFn<F, T> {
    /// Create a new FromFn validator.
    pub fn new(f: F) -> Self {
        FromFn {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F: Clone, T: ?Sized> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        FromFn::new(self.f.clone())
    }
}

impl<F, T: ?Sized> std::fmt::Debug for FromFn<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, T: ?Sized, E> Validator<T> for FromFn<F, T>
where
    F: Fn(&T) -> Vec<E> + Send + Sync,
{
    type Error = E;

    #[inline]
    fn validate(&self, value: &T) -> Vec<E> {
        (self.f)(value)
    }
}
