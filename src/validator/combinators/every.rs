//! Every combinator - run all validators and report all of their errors.
//!
//! This is the accumulating policy: nothing short-circuits, so every
//! independent fact about a value is reported together, in list order.

use crate::validator::trait_def::Validator;

/// Runs every validator and concatenates their errors in list order.
///
/// An empty list reports nothing.
///
/// # Example
///
/// ```rust
/// use weir::validator::{every, from_predicate, Validator, ValidatorExt};
///
/// let rules = every(vec![
///     from_predicate(|n: &i32| *n >= 0, "negative").boxed(),
///     from_predicate(|n: &i32| n % 2 == 0, "odd").boxed(),
/// ]);
///
/// assert!(rules.validate(&4).is_empty());
/// assert_eq!(rules.validate(&-3), vec!["negative", "odd"]);
/// ```
#[derive(Clone, Debug)]
pub struct Every<V> {
    pub(crate) validators: Vec<V>,
}

impl<T, V> Validator<T> for Every<V>
where
    T: ?Sized,
    V: Validator<T>,
{
    type Error = V::Error;

    fn validate(&self, value: &T) -> Vec<V::Error> {
        self.validators
            .iter()
            .flat_map(|validator| validator.validate(value))
            .collect()
    }
}

/// Pairwise [`Every`] for two validators of different types.
///
/// Created by [`ValidatorExt::and`](crate::validator::ValidatorExt::and).
#[derive(Clone, Debug)]
pub struct And<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<T, A, B> Validator<T> for And<A, B>
where
    T: ?Sized,
    A: Validator<T>,
    B: Validator<T, Error = A::Error>,
{
    type Error = A::Error;

    fn validate(&self, value: &T) -> Vec<A::Error> {
        let mut errors = self.first.validate(value);
        errors.extend(self.second.validate(value));
        errors
    }
}
