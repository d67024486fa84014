//! Refiners that ignore their input.
//!
//! - [`Succeed`]: always the same output
//! - [`Fail`]: always the same single error
//! - [`Reject`]: always a failure with no errors at all

use std::marker::PhantomData;

use crate::refiner::trait_def::Refiner;
use crate::validation::Validation;

/// Always succeeds with a clone of `output`.
pub struct Succeed<O, E> {
    pub(crate) output: O,
    pub(crate) _phantom: PhantomData<fn() -> E>,
}

/// Always fails with a clone of `error`.
pub struct Fail<O, E> {
    pub(crate) error: E,
    pub(crate) _phantom: PhantomData<fn() -> O>,
}

/// Always fails with an empty error list.
///
/// Distinct from [`Fail`]: it is the neutral element of alternation when no
/// default error is wanted.
pub struct Reject<O, E> {
    pub(crate) _phantom: PhantomData<fn() -> (O, E)>,
}

impl<O: Clone, E> Clone for Succeed<O, E> {
    fn clone(&self) -> Self {
        Succeed {
            output: self.output.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<O: std::fmt::Debug, E> std::fmt::Debug for Succeed<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Succeed")
            .field("output", &self.output)
            .finish()
    }
}

impl<O, E: Clone> Clone for Fail<O, E> {
    fn clone(&self) -> Self {
        Fail {
            error: self.error.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<O, E: std::fmt::Debug> std::fmt::Debug for Fail<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fail").field("error", &self.error).finish()
    }
}

impl<O, E> Clone for Reject<O, E> {
    fn clone(&self) -> Self {
        Reject {
            _phantom: PhantomData,
        }
    }
}

impl<O, E> std::fmt::Debug for Reject<O, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Reject")
    }
}

impl<I, O, E> Refiner<I> for Succeed<O, E>
where
    I: ?Sized,
    O: Clone + Send + Sync,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn refine(&self, _input: &I) -> Validation<O, Vec<E>> {
        Validation::Success(self.output.clone())
    }
}

impl<I, O, E> Refiner<I> for Fail<O, E>
where
    I: ?Sized,
    E: Clone + Send + Sync,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn refine(&self, _input: &I) -> Validation<O, Vec<E>> {
        Validation::Failure(vec![self.error.clone()])
    }
}

impl<I: ?Sized, O, E> Refiner<I> for Reject<O, E> {
    type Output = O;
    type Error = E;

    #[inline]
    fn refine(&self, _input: &I) -> Validation<O, Vec<E>> {
        Validation::Failure(Vec::new())
    }
}
