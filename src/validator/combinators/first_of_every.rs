//! FirstOfEvery combinator - stop at the first broken rule.

use crate::validator::trait_def::Validator;

/// Runs validators in order and returns the first non-empty error list as-is.
///
/// Validators after the first failing one are never invoked. An empty list,
/// or a list where nothing fails, reports nothing.
#[derive(Clone, Debug)]
pub struct FirstOfEvery<V> {
    pub(crate) validators: Vec<V>,
}

impl<T, V> Validator<T> for FirstOfEvery<V>
where
    T: ?Sized,
    V: Validator<T>,
{
    type Error = V::Error;

    fn validate(&self, value: &T) -> Vec<V::Error> {
        self.validators
            .iter()
            .map(|validator| validator.validate(value))
            .find(|errors| !errors.is_empty())
            .unwrap_or_default()
    }
}

/// Pairwise [`FirstOfEvery`]: `second` only runs when `first` passes.
#[derive(Clone, Debug)]
pub struct Then<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<T, A, B> Validator<T> for Then<A, B>
where
    T: ?Sized,
    A: Validator<T>,
    B: Validator<T, Error = A::Error>,
{
    type Error = A::Error;

    fn validate(&self, value: &T) -> Vec<A::Error> {
        let errors = self.first.validate(value);
        if errors.is_empty() {
            self.second.validate(value)
        } else {
            errors
        }
    }
}
