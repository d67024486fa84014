//! Any combinator - the first passing alternative wins.

use crate::validator::trait_def::Validator;

/// Accepts the value as soon as one alternative reports no errors.
///
/// Alternatives run in list order and the remaining ones are skipped after
/// the first pass. When every alternative fails, the errors of all of them
/// are concatenated in list order. An empty list has no alternative that
/// could pass and reports the default error.
///
/// # Example
///
/// ```rust
/// use weir::validator::{any, from_predicate, Validator, ValidatorExt};
///
/// let id = any(
///     "no rule",
///     vec![
///         from_predicate(|s: &str| s.len() == 8, "not a short id").boxed(),
///         from_predicate(|s: &str| s.len() == 32, "not a long id").boxed(),
///     ],
/// );
///
/// assert!(id.validate("abcdefgh").is_empty());
/// assert_eq!(id.validate("abc"), vec!["not a short id", "not a long id"]);
/// ```
#[derive(Clone, Debug)]
pub struct Any<V, E> {
    pub(crate) validators: Vec<V>,
    pub(crate) default_error: E,
}

impl<T, V, E> Validator<T> for Any<V, E>
where
    T: ?Sized,
    V: Validator<T, Error = E>,
    E: Clone + Send + Sync,
{
    type Error = E;

    fn validate(&self, value: &T) -> Vec<E> {
        if self.validators.is_empty() {
            return vec![self.default_error.clone()];
        }

        let mut errors = Vec::new();
        for validator in &self.validators {
            let reported = validator.validate(value);
            if reported.is_empty() {
                return Vec::new();
            }
            errors.extend(reported);
        }
        errors
    }
}

/// Pairwise [`Any`] for two validators of different types.
///
/// `second` only runs when `first` fails; if both fail their errors are
/// concatenated.
#[derive(Clone, Debug)]
pub struct Or<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<T, A, B> Validator<T> for Or<A, B>
where
    T: ?Sized,
    A: Validator<T>,
    B: Validator<T, Error = A::Error>,
{
    type Error = A::Error;

    fn validate(&self, value: &T) -> Vec<A::Error> {
        let mut errors = self.first.validate(value);
        if errors.is_empty() {
            return errors;
        }

        let second = self.second.validate(value);
        if second.is_empty() {
            return second;
        }
        errors.extend(second);
        errors
    }
}
