//! Extension trait providing combinator methods for all validators.
//!
//! `ValidatorExt` is implemented for every type that implements
//! [`Validator`]. It provides the transform combinators (`map_error`,
//! `map_value`, `focus`, `map_filter_value`, `set_error`), context
//! labelling, pairwise composition and boxing.

use crate::refiner::combinators::FromValidator;
use crate::validator::boxed::BoxedValidator;
use crate::validator::combinators::{
    AddContext, And, Focus, MapError, MapFilterValue, MapValue, Or, SetError, Then, WithContext,
};
use crate::validator::trait_def::Validator;
use crate::ContextError;

/// Combinator methods available on every [`Validator`].
///
/// # Example
///
/// ```rust
/// use weir::validator::{from_predicate, Validator, ValidatorExt};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum AgeError {
///     Negative,
///     Implausible,
/// }
///
/// let age = from_predicate(|n: &i32| *n >= 0, AgeError::Negative)
///     .then(from_predicate(|n: &i32| *n <= 150, AgeError::Implausible));
///
/// assert_eq!(age.validate(&-1), vec![AgeError::Negative]);
/// assert_eq!(age.validate(&200), vec![AgeError::Implausible]);
/// ```
pub trait ValidatorExt<T: ?Sized>: Validator<T> + Sized {
    /// Transform every reported error, keeping count and order.
    ///
    /// ```rust
    /// use weir::validator::{from_predicate, Validator, ValidatorExt};
    ///
    /// let v = from_predicate(|s: &str| !s.is_empty(), "empty")
    ///     .map_error(|e: &str| e.len());
    /// assert_eq!(v.validate(""), vec![5]);
    /// ```
    fn map_error<E2, F>(self, f: F) -> MapError<Self, F>
    where
        F: Fn(Self::Error) -> E2 + Send + Sync,
    {
        MapError { inner: self, f }
    }

    /// Reuse this validator on another type through an owned projection.
    ///
    /// ```rust
    /// use weir::validator::{from_predicate, Validator, ValidatorExt};
    ///
    /// let short = from_predicate(|n: &usize| *n < 4, "too long")
    ///     .map_value(|s: &String| s.len());
    /// assert_eq!(short.validate(&"abcd".to_string()), vec!["too long"]);
    /// ```
    fn map_value<U, F>(self, f: F) -> MapValue<Self, F, T>
    where
        T: Sized,
        U: ?Sized,
        F: Fn(&U) -> T + Send + Sync,
    {
        MapValue::new(self, f)
    }

    /// Reuse this validator on a borrowed part of another type.
    ///
    /// ```rust
    /// use weir::validator::{from_predicate, Validator, ValidatorExt};
    ///
    /// struct Login {
    ///     user: String,
    /// }
    ///
    /// let user = from_predicate(|s: &str| !s.is_empty(), "user is empty")
    ///     .focus(|login: &Login| login.user.as_str());
    /// assert_eq!(user.validate(&Login { user: String::new() }), vec!["user is empty"]);
    /// ```
    fn focus<U, F>(self, f: F) -> Focus<Self, F, T>
    where
        U: ?Sized,
        F: Fn(&U) -> &T + Send + Sync,
    {
        Focus::new(self, f)
    }

    /// Like [`map_value`](Self::map_value), but `None` from the projection
    /// skips validation entirely.
    ///
    /// ```rust
    /// use weir::validator::{from_predicate, Validator, ValidatorExt};
    ///
    /// let port = from_predicate(|p: &u16| *p >= 1024, "privileged port")
    ///     .map_filter_value(|s: &str| s.parse::<u16>().ok());
    /// assert_eq!(port.validate("80"), vec!["privileged port"]);
    /// assert!(port.validate("not a number").is_empty());
    /// ```
    fn map_filter_value<U, F>(self, f: F) -> MapFilterValue<Self, F, T>
    where
        T: Sized,
        U: ?Sized,
        F: Fn(&U) -> Option<T> + Send + Sync,
    {
        MapFilterValue::new(self, f)
    }

    /// Collapse any non-empty error list into the single `error`.
    fn set_error<E2>(self, error: E2) -> SetError<Self, E2>
    where
        E2: Clone + Send + Sync,
    {
        SetError { inner: self, error }
    }

    /// Wrap every error in a [`ContextError`] labelled `label`.
    fn with_context(self, label: impl Into<String>) -> WithContext<Self> {
        WithContext {
            inner: self,
            label: label.into(),
        }
    }

    /// Add an outer label to errors that already carry context.
    fn context<E>(self, label: impl Into<String>) -> AddContext<Self>
    where
        Self: Validator<T, Error = ContextError<E>>,
    {
        AddContext {
            inner: self,
            label: label.into(),
        }
    }

    /// Run both validators and report the errors of both.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validator<T, Error = Self::Error>,
    {
        And {
            first: self,
            second: other,
        }
    }

    /// Pass if either validator passes; `other` only runs when `self` fails.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validator<T, Error = Self::Error>,
    {
        Or {
            first: self,
            second: other,
        }
    }

    /// Run `other` only if `self` passes, reporting the first failure.
    fn then<V>(self, other: V) -> Then<Self, V>
    where
        V: Validator<T, Error = Self::Error>,
    {
        Then {
            first: self,
            second: other,
        }
    }

    /// Lift into a refiner that returns the value unchanged when valid.
    ///
    /// Same as [`refiner::from_validator`](crate::refiner::from_validator).
    fn into_refiner(self) -> FromValidator<Self>
    where
        T: ToOwned,
    {
        FromValidator::new(self)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedValidator<T, Self::Error>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, V: Validator<T>> ValidatorExt<T> for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{every, from_predicate};

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        name: String,
        nickname: Option<String>,
    }

    #[test]
    fn test_map_error_only_runs_on_errors() {
        let v = from_predicate(|n: &i32| *n > 0, 1).map_error(|code: i32| code * 10);
        assert!(v.validate(&5).is_empty());
        assert_eq!(v.validate(&-5), vec![10]);
    }

    #[test]
    fn test_map_value_projects() {
        let v = from_predicate(|n: &usize| *n >= 2, "short").map_value(|a: &Account| a.name.len());
        let account = Account {
            name: "x".into(),
            nickname: None,
        };
        assert_eq!(v.validate(&account), vec!["short"]);
    }

    #[test]
    fn test_focus_borrows_field() {
        let v = from_predicate(|s: &String| s.starts_with('A'), "must start with A")
            .focus(|a: &Account| &a.name);
        let account = Account {
            name: "Bob".into(),
            nickname: None,
        };
        assert_eq!(v.validate(&account), vec!["must start with A"]);
    }

    #[test]
    fn test_map_filter_value_none_is_vacuous() {
        let always_fails = from_predicate(|_: &String| false, "never");
        let v = always_fails.map_filter_value(|a: &Account| a.nickname.clone());
        let account = Account {
            name: "Ann".into(),
            nickname: None,
        };
        assert!(v.validate(&account).is_empty());

        let with_nick = Account {
            nickname: Some("annie".into()),
            ..account
        };
        assert_eq!(v.validate(&with_nick), vec!["never"]);
    }

    #[test]
    fn test_set_error_collapses_many_into_one() {
        let noisy = every(vec![
            from_predicate(|n: &i32| *n > 10, "a").boxed(),
            from_predicate(|n: &i32| *n > 20, "b").boxed(),
        ])
        .set_error("out of range");
        assert_eq!(noisy.validate(&0), vec!["out of range"]);
        assert!(noisy.validate(&30).is_empty());
    }

    #[test]
    fn test_set_error_keeps_valid_valid() {
        let v = from_predicate(|_: &i32| true, "hidden").set_error("never shown");
        assert!(v.validate(&1).is_empty());
    }

    #[test]
    fn test_context_builds_path() {
        let city = from_predicate(|s: &str| !s.is_empty(), "required")
            .with_context("city")
            .context("address");
        let errors = city.validate("");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path(), "address.city");
        assert_eq!(errors[0].inner(), &"required");
    }

    #[test]
    fn test_and_accumulates() {
        let v = from_predicate(|n: &i32| *n > 0, "not positive")
            .and(from_predicate(|n: &i32| n % 2 == 0, "odd"));
        assert_eq!(v.validate(&-1), vec!["not positive", "odd"]);
        assert_eq!(v.validate(&3), vec!["odd"]);
    }

    #[test]
    fn test_or_concatenates_when_both_fail() {
        let v = from_predicate(|s: &str| s == "yes", "not yes")
            .or(from_predicate(|s: &str| s == "no", "not no"));
        assert!(v.validate("no").is_empty());
        assert_eq!(v.validate("maybe"), vec!["not yes", "not no"]);
    }

    #[test]
    fn test_then_short_circuits() {
        let v = from_predicate(|n: &i32| *n > 0, "not positive")
            .then(from_predicate(|n: &i32| n % 2 == 0, "odd"));
        assert_eq!(v.validate(&-1), vec!["not positive"]);
        assert_eq!(v.validate(&3), vec!["odd"]);
    }
}
