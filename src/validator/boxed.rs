//! Type-erased and shared validators.
//!
//! Combinators return concrete types, so two validators built differently
//! have different types. Box them when they need to live in the same list:
//!
//! ```rust
//! use weir::validator::{every, from_predicate, BoxedValidator, Validator, ValidatorExt};
//!
//! let rules: Vec<BoxedValidator<i32, &str>> = vec![
//!     from_predicate(|n: &i32| *n > 0, "not positive").boxed(),
//!     from_predicate(|n: &i32| n % 2 == 0, "odd").boxed(),
//! ];
//!
//! assert_eq!(every(rules).validate(&-3), vec!["not positive", "odd"]);
//! ```

use std::sync::Arc;

use crate::validator::trait_def::Validator;

/// A heap-allocated validator with its concrete type erased.
pub type BoxedValidator<T, E> = Box<dyn Validator<T, Error = E>>;

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &T) -> Vec<Self::Error> {
        (**self).validate(value)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Arc<V> {
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &T) -> Vec<Self::Error> {
        (**self).validate(value)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for &V {
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &T) -> Vec<Self::Error> {
        (**self).validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{from_predicate, ValidatorExt};

    #[test]
    fn test_boxed_delegates() {
        let boxed: BoxedValidator<i32, &str> = from_predicate(|n: &i32| *n > 0, "neg").boxed();
        assert!(boxed.validate(&1).is_empty());
        assert_eq!(boxed.validate(&-1), vec!["neg"]);
    }

    #[test]
    fn test_shared_validator_across_threads() {
        let shared = Arc::new(from_predicate(|n: &i32| *n > 0, "neg"));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = Arc::clone(&shared);
                std::thread::spawn(move || v.validate(&(i - 2)))
            })
            .collect();

        let results: Vec<Vec<&str>> = handles
            .into_iter()
            .map(|h| h.join().expect("validator thread panicked"))
            .collect();
        assert_eq!(results, vec![vec!["neg"], vec!["neg"], vec!["neg"], vec![]]);
    }

    #[test]
    fn test_reference_is_validator() {
        let v = from_predicate(|s: &str| !s.is_empty(), "empty");
        let by_ref = &v;
        assert_eq!(by_ref.validate(""), vec!["empty"]);
    }
}
