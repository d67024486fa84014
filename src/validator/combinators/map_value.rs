//! Contravariant adapters: reuse a validator for `A` on values of another type.
//!
//! - [`MapValue`]: validate an owned projection `f(&value)`
//! - [`Focus`]: validate a borrowed part of the value, such as a field
//! - [`MapFilterValue`]: validate an optional projection, skipping `None`

use std::marker::PhantomData;

use crate::validator::trait_def::Validator;

/// Validates `f(value)` instead of `value`.
pub struct MapValue<V, F, A> {
    pub(crate) inner: V,
    pub(crate) f: F,
    pub(crate) _target: PhantomData<fn(&A)>,
}

/// Validates the part of the value returned by `f`.
///
/// Like [`MapValue`] but the projection borrows from the value, so fields can
/// be checked without cloning them.
pub struct Focus<V, F, A: ?Sized> {
    pub(crate) inner: V,
    pub(crate) f: F,
    pub(crate) _target: PhantomData<fn(&A)>,
}

/// Validates `f(value)` when it is `Some`; `None` is vacuously valid.
///
/// Skipping is the intended behaviour: a projection that finds nothing to
/// check reports nothing, whatever the inner validator would have said.
pub struct MapFilterValue<V, F, A> {
    pub(crate) inner: V,
    pub(crate) f: F,
    pub(crate) _target: PhantomData<fn(&A)>,
}

macro_rules! adapter_common {
    ($name:ident, $($bound:tt)*) => {
        impl<V, F, A: $($bound)*> $name<V, F, A> {
            pub(crate) fn new(inner: V, f: F) -> Self {
                $name {
                    inner,
                    f,
                    _target: PhantomData,
                }
            }
        }

        impl<V: Clone, F: Clone, A: $($bound)*> Clone for $name<V, F, A> {
            fn clone(&self) -> Self {
                $name::new(self.inner.clone(), self.f.clone())
            }
        }

        impl<V, F, A: $($bound)*> std::fmt::Debug for $name<V, F, A> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("inner", &"<validator>")
                    .field("f", &"<function>")
                    .finish()
            }
        }
    };
}

adapter_common!(MapValue, Sized);
adapter_common!(Focus, ?Sized);
adapter_common!(MapFilterValue, Sized);

impl<A, B, V, F> Validator<B> for MapValue<V, F, A>
where
    B: ?Sized,
    V: Validator<A>,
    F: Fn(&B) -> A + Send + Sync,
{
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &B) -> Vec<V::Error> {
        self.inner.validate(&(self.f)(value))
    }
}

impl<A, B, V, F> Validator<B> for Focus<V, F, A>
where
    A: ?Sized,
    B: ?Sized,
    V: Validator<A>,
    F: Fn(&B) -> &A + Send + Sync,
{
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &B) -> Vec<V::Error> {
        self.inner.validate((self.f)(value))
    }
}

impl<A, B, V, F> Validator<B> for MapFilterValue<V, F, A>
where
    B: ?Sized,
    V: Validator<A>,
    F: Fn(&B) -> Option<A> + Send + Sync,
{
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &B) -> Vec<V::Error> {
        match (self.f)(value) {
            Some(projected) => self.inner.validate(&projected),
            None => Vec::new(),
        }
    }
}
