//! Type-erased and shared refiners.

use std::sync::Arc;

use crate::refiner::trait_def::Refiner;
use crate::validation::Validation;

/// A heap-allocated refiner with its concrete type erased.
///
/// Needed to keep differently built refiners in one list, for example the
/// alternatives of [`any`](crate::refiner::any).
pub type BoxedRefiner<I, O, E> = Box<dyn Refiner<I, Output = O, Error = E>>;

impl<I: ?Sized, R: Refiner<I> + ?Sized> Refiner<I> for Box<R> {
    type Output = R::Output;
    type Error = R::Error;

    #[inline]
    fn refine(&self, input: &I) -> Validation<Self::Output, Vec<Self::Error>> {
        (**self).refine(input)
    }
}

impl<I: ?Sized, R: Refiner<I> + ?Sized> Refiner<I> for Arc<R> {
    type Output = R::Output;
    type Error = R::Error;

    #[inline]
    fn refine(&self, input: &I) -> Validation<Self::Output, Vec<Self::Error>> {
        (**self).refine(input)
    }
}

impl<I: ?Sized, R: Refiner<I> + ?Sized> Refiner<I> for &R {
    type Output = R::Output;
    type Error = R::Error;

    #[inline]
    fn refine(&self, input: &I) -> Validation<Self::Output, Vec<Self::Error>> {
        (**self).refine(input)
    }
}
