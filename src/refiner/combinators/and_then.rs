//! Sequential composition.

use crate::refiner::trait_def::Refiner;
use crate::validation::Validation;
use crate::validator::Validator;

/// Feeds the output of `first` into `second`.
///
/// `second` never runs when `first` fails; the result is then exactly
/// `first`'s failure.
#[derive(Clone, Debug)]
pub struct AndThen<F, G> {
    pub(crate) first: F,
    pub(crate) second: G,
}

impl<I, F, G> Refiner<I> for AndThen<F, G>
where
    I: ?Sized,
    F: Refiner<I>,
    G: Refiner<F::Output, Error = F::Error>,
{
    type Output = G::Output;
    type Error = F::Error;

    fn refine(&self, input: &I) -> Validation<G::Output, Vec<F::Error>> {
        match self.first.refine(input) {
            Validation::Success(middle) => self.second.refine(&middle),
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }
}

/// Checks the output of a successful refinement with a validator.
///
/// Passes the output through unchanged when the validator is satisfied and
/// fails with the validator's errors otherwise.
#[derive(Clone, Debug)]
pub struct Ensure<R, V> {
    pub(crate) inner: R,
    pub(crate) validator: V,
}

impl<I, R, V> Refiner<I> for Ensure<R, V>
where
    I: ?Sized,
    R: Refiner<I>,
    V: Validator<R::Output, Error = R::Error>,
{
    type Output = R::Output;
    type Error = R::Error;

    fn refine(&self, input: &I) -> Validation<R::Output, Vec<R::Error>> {
        self.inner.refine(input).and_then(|output| {
            let errors = self.validator.validate(&output);
            if errors.is_empty() {
                Validation::Success(output)
            } else {
                Validation::Failure(errors)
            }
        })
    }
}
