//! Alternation between refiners.

use crate::refiner::trait_def::Refiner;
use crate::validation::Validation;

/// Tries `primary`, then `fallback` if it fails.
///
/// The primary's errors are discarded: on fallback the result is exactly
/// whatever `fallback` returns, success or failure.
#[derive(Clone, Debug)]
pub struct Or<P, F> {
    pub(crate) primary: P,
    pub(crate) fallback: F,
}

impl<I, P, F> Refiner<I> for Or<P, F>
where
    I: ?Sized,
    P: Refiner<I>,
    F: Refiner<I, Output = P::Output, Error = P::Error>,
{
    type Output = P::Output;
    type Error = P::Error;

    fn refine(&self, input: &I) -> Validation<P::Output, Vec<P::Error>> {
        match self.primary.refine(input) {
            Validation::Success(output) => Validation::Success(output),
            Validation::Failure(_) => self.fallback.refine(input),
        }
    }
}

/// Tries each refiner in order and returns the first success.
///
/// When all of them fail, the errors of the last one attempted are
/// returned. An empty list fails with the default error.
#[derive(Clone, Debug)]
pub struct Any<R, E> {
    pub(crate) refiners: Vec<R>,
    pub(crate) default_error: E,
}

impl<I, R, E> Refiner<I> for Any<R, E>
where
    I: ?Sized,
    R: Refiner<I, Error = E>,
    E: Clone + Send + Sync,
{
    type Output = R::Output;
    type Error = E;

    fn refine(&self, input: &I) -> Validation<R::Output, Vec<E>> {
        let mut last = vec![self.default_error.clone()];
        for refiner in &self.refiners {
            match refiner.refine(input) {
                Validation::Success(output) => return Validation::Success(output),
                Validation::Failure(errors) => last = errors,
            }
        }
        Validation::Failure(last)
    }
}

/// Runs two refiners on the same input and pairs their outputs.
///
/// Both always run; when both fail their errors are concatenated, `first`'s
/// errors first.
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<I, A, B> Refiner<I> for Zip<A, B>
where
    I: ?Sized,
    A: Refiner<I>,
    B: Refiner<I, Error = A::Error>,
{
    type Output = (A::Output, B::Output);
    type Error = A::Error;

    fn refine(&self, input: &I) -> Validation<Self::Output, Vec<A::Error>> {
        self.first.refine(input).and(self.second.refine(input))
    }
}
