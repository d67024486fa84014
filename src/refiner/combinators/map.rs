//! Adapters around a single refiner.
//!
//! - [`MapInput`]: refine `f(input)` instead of `input`
//! - [`MapOutput`]: transform the output on success
//! - [`MapError`]: transform every error on failure

use std::marker::PhantomData;

use crate::refiner::trait_def::Refiner;
use crate::validation::Validation;

/// Refines a projection of the input.
pub struct MapInput<R, F, A> {
    pub(crate) inner: R,
    pub(crate) f: F,
    pub(crate) _target: PhantomData<fn(&A)>,
}

impl<R, F, A> MapInput<R, F, A> {
    pub(crate) fn new(inner: R, f: F) -> Self {
        MapInput {
            inner,
            f,
            _target: PhantomData,
        }
    }
}

impl<R: Clone, F: Clone, A> Clone for MapInput<R, F, A> {
    fn clone(&self) -> Self {
        MapInput::new(self.inner.clone(), self.f.clone())
    }
}

impl<R: std::fmt::Debug, F, A> std::fmt::Debug for MapInput<R, F, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapInput")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<A, B, R, F> Refiner<B> for MapInput<R, F, A>
where
    B: ?Sized,
    R: Refiner<A>,
    F: Fn(&B) -> A + Send + Sync,
{
    type Output = R::Output;
    type Error = R::Error;

    #[inline]
    fn refine(&self, input: &B) -> Validation<R::Output, Vec<R::Error>> {
        self.inner.refine(&(self.f)(input))
    }
}

/// Transforms the output of a successful refinement.
#[derive(Clone)]
pub struct MapOutput<R, F> {
    pub(crate) inner: R,
    pub(crate) f: F,
}

impl<R: std::fmt::Debug, F> std::fmt::Debug for MapOutput<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapOutput")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<I, O, R, F> Refiner<I> for MapOutput<R, F>
where
    I: ?Sized,
    R: Refiner<I>,
    F: Fn(R::Output) -> O + Send + Sync,
{
    type Output = O;
    type Error = R::Error;

    #[inline]
    fn refine(&self, input: &I) -> Validation<O, Vec<R::Error>> {
        self.inner.refine(input).map(&self.f)
    }
}

/// Transforms each error of a failed refinement.
///
/// An empty failure stays empty.
#[derive(Clone)]
pub struct MapError<R, F> {
    pub(crate) inner: R,
    pub(crate) f: F,
}

impl<R: std::fmt::Debug, F> std::fmt::Debug for MapError<R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapError")
            .field("inner", &self.inner)
            .field("f", &"<function>")
            .finish()
    }
}

impl<I, E2, R, F> Refiner<I> for MapError<R, F>
where
    I: ?Sized,
    R: Refiner<I>,
    F: Fn(R::Error) -> E2 + Send + Sync,
{
    type Output = R::Output;
    type Error = E2;

    #[inline]
    fn refine(&self, input: &I) -> Validation<R::Output, Vec<E2>> {
        self.inner
            .refine(input)
            .map_err(|errors| errors.into_iter().map(&self.f).collect())
    }
}
