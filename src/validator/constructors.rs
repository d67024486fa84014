//! Constructor functions for leaf validators and list combinators.
//!
//! These functions build the combinator types in
//! [`combinators`](crate::validator::combinators) without naming them.

use std::marker::PhantomData;

use crate::predicate::Predicate;
use crate::validator::combinators::{
    Any, Every, FirstOfEvery, FromFn, FromPredicate, FromPredicateSelf, FromPredicateWith,
    NoErrors, OnCharCount, OnEach, OnEachChar, OnLen, OnSome,
};
use crate::validator::trait_def::Validator;

/// A validator that never reports an error.
///
/// # Example
///
/// ```rust
/// use weir::validator::{none, Validator};
///
/// let v = none::<&str>();
/// assert!(Validator::<i32>::validate(&v, &42).is_empty());
/// ```
pub fn none<E>() -> NoErrors<E> {
    NoErrors::new()
}

/// Create a validator from a function returning its error list.
///
/// # Example
///
/// ```rust
/// use weir::validator::{from_fn, Validator};
///
/// let no_duplicates = from_fn(|items: &[i32]| {
///     let mut seen = std::collections::HashSet::new();
///     items.iter().filter(|i| !seen.insert(**i)).copied().collect::<Vec<_>>()
/// });
///
/// assert_eq!(no_duplicates.validate(&[1, 2, 1, 3, 2][..]), vec![1, 2]);
/// ```
pub fn from_fn<T, E, F>(f: F) -> FromFn<F, T>
where
    T: ?Sized,
    F: Fn(&T) -> Vec<E> + Send + Sync,
{
    FromFn::new(f)
}

/// Report `error` when `predicate` does not hold.
///
/// # Example
///
/// ```rust
/// use weir::validator::{from_predicate, Validator};
///
/// let positive = from_predicate(|n: &i32| *n > 0, "must be positive");
/// assert!(positive.validate(&3).is_empty());
/// assert_eq!(positive.validate(&0), vec!["must be positive"]);
/// ```
pub fn from_predicate<T, P, E>(predicate: P, error: E) -> FromPredicate<P, E>
where
    T: ?Sized,
    P: Predicate<T>,
    E: Clone + Send + Sync,
{
    FromPredicate { predicate, error }
}

/// Report `make_error(value)` when `predicate` does not hold.
///
/// # Example
///
/// ```rust
/// use weir::validator::{from_predicate_with, Validator};
///
/// let short = from_predicate_with(
///     |s: &str| s.len() <= 5,
///     |s: &str| format!("'{}' is longer than 5 bytes", s),
/// );
/// assert_eq!(short.validate("whistle"), vec!["'whistle' is longer than 5 bytes"]);
/// ```
pub fn from_predicate_with<T, P, F, E>(predicate: P, make_error: F) -> FromPredicateWith<P, F>
where
    T: ?Sized,
    P: Predicate<T>,
    F: Fn(&T) -> E + Send + Sync,
{
    FromPredicateWith {
        predicate,
        make_error,
    }
}

/// Report an owned copy of the value itself when `predicate` does not hold.
///
/// # Example
///
/// ```rust
/// use weir::validator::{from_predicate_self, Validator};
///
/// let lowercase = from_predicate_self(|s: &str| s.chars().all(|c| !c.is_uppercase()));
/// assert_eq!(lowercase.validate("Mixed"), vec!["Mixed".to_string()]);
/// ```
pub fn from_predicate_self<T, P>(predicate: P) -> FromPredicateSelf<P>
where
    T: ?Sized + ToOwned,
    P: Predicate<T>,
{
    FromPredicateSelf { predicate }
}

/// Run every validator and report all errors, in list order.
///
/// See [`Every`].
pub fn every<V, I>(validators: I) -> Every<V>
where
    I: IntoIterator<Item = V>,
{
    Every {
        validators: validators.into_iter().collect(),
    }
}

/// Pass as soon as one validator passes; see [`Any`] for the failure policy.
///
/// `default_error` is reported only when `validators` is empty.
pub fn any<V, E, I>(default_error: E, validators: I) -> Any<V, E>
where
    E: Clone + Send + Sync,
    I: IntoIterator<Item = V>,
{
    Any {
        validators: validators.into_iter().collect(),
        default_error,
    }
}

/// Stop at the first validator that reports errors and return only those.
///
/// See [`FirstOfEvery`].
pub fn first_of_every<V, I>(validators: I) -> FirstOfEvery<V>
where
    I: IntoIterator<Item = V>,
{
    FirstOfEvery {
        validators: validators.into_iter().collect(),
    }
}

/// Validate the length of a slice.
///
/// # Example
///
/// ```rust
/// use weir::validator::{from_predicate, on_len, Validator};
///
/// let at_most_two = on_len(from_predicate(|n: &usize| *n <= 2, "too many"));
/// assert_eq!(at_most_two.validate(&[1, 2, 3][..]), vec!["too many"]);
/// ```
pub fn on_len<T, V>(validator: V) -> OnLen<V, T>
where
    V: Validator<usize>,
{
    OnLen {
        inner: validator,
        _element: PhantomData,
    }
}

/// Validate the number of characters in a string.
pub fn on_char_count<V>(validator: V) -> OnCharCount<V>
where
    V: Validator<usize>,
{
    OnCharCount { inner: validator }
}

/// Validate the content of an `Option`, skipping `None`.
pub fn on_some<V>(validator: V) -> OnSome<V> {
    OnSome { inner: validator }
}

/// Validate every element of a slice independently.
///
/// # Example
///
/// ```rust
/// use weir::validator::{from_predicate_self, on_each, Validator};
///
/// let digits = on_each(from_predicate_self(|n: &u8| *n < 10));
/// assert_eq!(digits.validate(&[1, 12, 3, 40][..]), vec![12, 40]);
/// ```
pub fn on_each<V>(validator: V) -> OnEach<V> {
    OnEach { inner: validator }
}

/// Validate every character of a string independently.
pub fn on_each_char<V>(validator: V) -> OnEachChar<V>
where
    V: Validator<char>,
{
    OnEachChar { inner: validator }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::ValidatorExt;

    #[test]
    fn test_none_accepts_anything() {
        let v = none::<String>();
        assert!(Validator::<str>::validate(&v, "").is_empty());
        assert!(Validator::<Vec<u8>>::validate(&v, &vec![1]).is_empty());
    }

    #[test]
    fn test_from_predicate_reports_single_error() {
        let v = from_predicate(|n: &i32| n % 2 == 0, "odd");
        assert!(v.validate(&4).is_empty());
        assert_eq!(v.validate(&3), vec!["odd"]);
    }

    #[test]
    fn test_from_predicate_with_sees_value() {
        let v = from_predicate_with(|n: &i32| *n < 10, |n: &i32| n * 100);
        assert_eq!(v.validate(&12), vec![1200]);
    }

    #[test]
    fn test_from_predicate_self_on_sized() {
        let v = from_predicate_self(|n: &i32| *n != 13);
        assert_eq!(v.validate(&13), vec![13]);
        assert!(v.validate(&12).is_empty());
    }

    #[test]
    fn test_from_fn_can_report_many() {
        let v = from_fn(|s: &str| {
            s.char_indices()
                .filter(|(_, c)| c.is_whitespace())
                .map(|(i, _)| i)
                .collect::<Vec<_>>()
        });
        assert_eq!(v.validate("a b c"), vec![1, 3]);
    }

    #[test]
    fn test_on_char_count_counts_chars_not_bytes() {
        let v = on_char_count(from_predicate(|n: &usize| *n <= 3, "long"));
        assert!(v.validate("héé").is_empty());
        assert_eq!(v.validate("abcd"), vec!["long"]);
    }

    #[test]
    fn test_on_some_skips_none() {
        let v = on_some(from_predicate(|n: &i32| *n > 0, "neg"));
        assert!(v.validate(&None).is_empty());
        assert!(v.validate(&Some(1)).is_empty());
        assert_eq!(v.validate(&Some(-1)), vec!["neg"]);
    }

    #[test]
    fn test_on_each_char_in_order() {
        let v = on_each_char(from_predicate_self(|c: &char| c.is_ascii_alphanumeric()));
        assert_eq!(v.validate("a-b_c"), vec!['-', '_']);
    }

    #[test]
    fn test_on_len_of_empty_slice() {
        let v = on_len(from_predicate(|n: &usize| *n > 0, "empty"));
        let empty: &[String] = &[];
        assert_eq!(v.validate(empty), vec!["empty"]);
    }

    #[test]
    fn test_projection_composes_with_ext() {
        let v = on_each(from_predicate(|n: &i32| *n >= 0, "negative")).with_context("scores");
        let errors = v.validate(&[1, -1][..]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "scores: negative");
    }
}
