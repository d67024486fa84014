//! Refiners lifted from validators and plain functions.

use std::marker::PhantomData;

use crate::refiner::trait_def::Refiner;
use crate::validation::Validation;
use crate::validator::Validator;

/// Restricts the domain of a value without transforming it.
///
/// Succeeds with an owned copy of the input when the validator reports no
/// errors, and fails with exactly the validator's errors otherwise.
#[derive(Clone, Debug)]
pub struct FromValidator<V> {
    pub(crate) validator: V,
}

impl<V> FromValidator<V> {
    /// Lift `validator` into a refiner.
    pub fn new(validator: V) -> Self {
        FromValidator { validator }
    }

    /// The wrapped validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

impl<T, V> Refiner<T> for FromValidator<V>
where
    T: ?Sized + ToOwned,
    V: Validator<T>,
{
    type Output = T::Owned;
    type Error = V::Error;

    fn refine(&self, input: &T) -> Validation<T::Owned, Vec<V::Error>> {
        let errors = self.validator.validate(input);
        if errors.is_empty() {
            Validation::Success(input.to_owned())
        } else {
            Validation::Failure(errors)
        }
    }
}

/// Always succeeds with an owned copy of the input.
pub struct Identity<E> {
    pub(crate) _phantom: PhantomData<fn() -> E>,
}

impl<E> Clone for Identity<E> {
    fn clone(&self) -> Self {
        Identity {
            _phantom: PhantomData,
        }
    }
}

impl<E> std::fmt::Debug for Identity<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Identity")
    }
}

impl<T, E> Refiner<T> for Identity<E>
where
    T: ?Sized + ToOwned,
{
    type Output = T::Owned;
    type Error = E;

    #[inline]
    fn refine(&self, input: &T) -> Validation<T::Owned, Vec<E>> {
        Validation::Success(input.to_owned())
    }
}

/// Lifts a total function into a refiner that always succeeds.
pub struct FromMapping<F, I: ?Sized, E> {
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn(&I) -> E>,
}

impl<F, I: ?Sized, E> FromMapping<F, I, E> {
    pub(crate) fn new(f: F) -> Self {
        FromMapping {
            f,
            _phantom: PhantomData,
        }
    }
}

/// Refiner backed by a function returning the full outcome.
pub struct FromFn<F, I: ?Sized> {
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn(&I)>,
}

/// Refiner backed by a function returning `Result` with a single error.
pub struct FromResult<F, I: ?Sized> {
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn(&I)>,
}

impl<F, I: ?Sized> FromFn<F, I> {
    pub(crate) fn new(f: F) -> Self {
        FromFn {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, I: ?Sized> FromResult<F, I> {
    pub(crate) fn new(f: F) -> Self {
        FromResult {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F: Clone, I: ?Sized, E> Clone for FromMapping<F, I, E> {
    fn clone(&self) -> Self {
        FromMapping::new(self.f.clone())
    }
}

impl<F: Clone, I: ?Sized> Clone for FromFn<F, I> {
    fn clone(&self) -> Self {
        FromFn::new(self.f.clone())
    }
}

impl<F: Clone, I: ?Sized> Clone for FromResult<F, I> {
    fn clone(&self) -> Self {
        FromResult::new(self.f.clone())
    }
}

impl<F, I: ?Sized, E> std::fmt::Debug for FromMapping<F, I, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromMapping")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, I: ?Sized> std::fmt::Debug for FromFn<F, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, I: ?Sized> std::fmt::Debug for FromResult<F, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromResult")
            .field("f", &"<function>")
            .finish()
    }
}

impl<I, O, E, F> Refiner<I> for FromMapping<F, I, E>
where
    I: ?Sized,
    F: Fn(&I) -> O + Send + Sync,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn refine(&self, input: &I) -> Validation<O, Vec<E>> {
        Validation::Success((self.f)(input))
    }
}

impl<I, O, E, F> Refiner<I> for FromFn<F, I>
where
    I: ?Sized,
    F: Fn(&I) -> Validation<O, Vec<E>> + Send + Sync,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn refine(&self, input: &I) -> Validation<O, Vec<E>> {
        (self.f)(input)
    }
}

impl<I, O, E, F> Refiner<I> for FromResult<F, I>
where
    I: ?Sized,
    F: Fn(&I) -> Result<O, E> + Send + Sync,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn refine(&self, input: &I) -> Validation<O, Vec<E>> {
        match (self.f)(input) {
            Ok(output) => Validation::Success(output),
            Err(error) => Validation::Failure(vec![error]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::from_predicate;

    #[test]
    fn test_from_validator_returns_owned_input() {
        let r = FromValidator::new(from_predicate(|s: &str| !s.is_empty(), "empty"));
        assert_eq!(r.refine("abc"), Validation::Success("abc".to_string()));
        assert_eq!(r.refine(""), Validation::Failure(vec!["empty"]));
    }

    #[test]
    fn test_from_validator_exposes_the_wrapped_rule() {
        let r = FromValidator::new(from_predicate(|n: &i32| *n >= 0, "negative"));
        if let Validation::Success(n) = r.refine(&7) {
            assert!(r.validator().is_valid(&n));
        } else {
            panic!("7 is not negative");
        }
        assert!(!r.validator().is_valid(&-7));
    }

    #[test]
    fn test_identity_never_fails() {
        let r = Identity::<&str> {
            _phantom: PhantomData,
        };
        assert_eq!(
            Refiner::<[u8]>::refine(&r, &[1, 2][..]),
            Validation::Success(vec![1, 2])
        );
    }

    #[test]
    fn test_from_result_wraps_single_error() {
        let r = FromResult::new(|s: &str| s.parse::<u8>().map_err(|_| "not a byte"));
        assert_eq!(r.refine("7"), Validation::Success(7));
        assert_eq!(r.refine("700"), Validation::Failure(vec!["not a byte"]));
    }
}
