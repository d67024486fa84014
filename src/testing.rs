//! Testing utilities for code built on weir
//!
//! Assertion macros for [`Validation`] results and validator outputs, a
//! [`Spy`] that counts how often a validator or refiner is invoked, and
//! (with the `proptest` feature) an `Arbitrary` impl for [`Validation`].
//!
//! # Examples
//!
//! ```rust
//! use weir::validator::from_predicate;
//! use weir::{assert_invalid, assert_valid};
//!
//! let positive = from_predicate(|n: &i32| *n > 0, "not positive");
//! assert_valid!(positive, &3);
//! assert_invalid!(positive, &-3, vec!["not positive"]);
//! ```
//!
//! Checking that a combinator short-circuits:
//!
//! ```rust
//! use weir::testing::Spy;
//! use weir::validator::{from_predicate, Validator, ValidatorExt};
//!
//! let second = Spy::new(from_predicate(|n: &i32| *n < 100, "too large"));
//! let calls = second.call_count();
//!
//! let v = from_predicate(|n: &i32| *n > 0, "not positive").then(second);
//! v.validate(&-1);
//! assert_eq!(calls.get(), 0);
//! v.validate(&1);
//! assert_eq!(calls.get(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::refiner::Refiner;
use crate::validator::Validator;
use crate::Validation;

/// Assert that a validation succeeds.
///
/// # Example
///
/// ```rust
/// use weir::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// # Example
///
/// ```rust
/// use weir::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given errors.
///
/// # Example
///
/// ```rust
/// use weir::{Validation, assert_validation_errors};
///
/// let val = Validation::<i32, _>::failure(vec!["error1", "error2"]);
/// assert_validation_errors!(val, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a validator reports no errors for a value.
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, $value:expr) => {{
        let errors = $crate::validator::Validator::validate(&$validator, $value);
        if !errors.is_empty() {
            panic!("Expected no errors, got: {:?}", errors);
        }
    }};
}

/// Assert that a validator reports errors for a value, optionally exactly
/// the given ones.
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, $value:expr) => {{
        let errors = $crate::validator::Validator::validate(&$validator, $value);
        if errors.is_empty() {
            panic!("Expected errors, got none");
        }
    }};
    ($validator:expr, $value:expr, $expected:expr) => {{
        let errors = $crate::validator::Validator::validate(&$validator, $value);
        assert_eq!(errors, $expected);
    }};
}

/// Wraps a validator or refiner and counts its invocations.
///
/// Clones share the same counter. Take a [`CallCount`] handle before moving
/// the spy into a combinator.
#[derive(Debug, Clone)]
pub struct Spy<V> {
    inner: V,
    calls: Arc<AtomicUsize>,
}

/// Read handle for the invocation counter of a [`Spy`].
#[derive(Debug, Clone)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    /// Number of calls so far.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<V> Spy<V> {
    /// Start counting calls to `inner`.
    pub fn new(inner: V) -> Self {
        Spy {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A handle that keeps reporting after the spy has been moved.
    pub fn call_count(&self) -> CallCount {
        CallCount(Arc::clone(&self.calls))
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T: ?Sized, V: Validator<T>> Validator<T> for Spy<V> {
    type Error = V::Error;

    fn validate(&self, value: &T) -> Vec<V::Error> {
        self.record();
        self.inner.validate(value)
    }
}

impl<I: ?Sized, R: Refiner<I>> Refiner<I> for Spy<R> {
    type Output = R::Output;
    type Error = R::Error;

    fn refine(&self, input: &I) -> Validation<R::Output, Vec<R::Error>> {
        self.record();
        self.inner.refine(input)
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::{any_with, prop_oneof, Arbitrary, BoxedStrategy, Strategy};

/// Successes and failures are generated with equal weight.
#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
    T::Strategy: 'static,
    E::Strategy: 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((output, errors): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(output).prop_map(Validation::Success),
            any_with::<E>(errors).prop_map(Validation::Failure),
        ]
        .boxed()
    }
}
