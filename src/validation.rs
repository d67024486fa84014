//! The outcome of a refinement
//!
//! [`Validation`] is what every [`Refiner`](crate::refiner::Refiner) returns:
//! either the refined output, or the errors explaining why the input could not
//! be refined. It behaves like `Result`, except that combining two failures
//! with [`Validation::and`] keeps the errors of both sides instead of stopping
//! at the first one.
//!
//! # Examples
//!
//! ```
//! use weir::Validation;
//!
//! let port = Validation::<u16, Vec<&str>>::success(8080);
//! let host = Validation::<&str, _>::failure(vec!["host is empty"]);
//! let user = Validation::<&str, _>::failure(vec!["user is empty"]);
//!
//! let result = Validation::<(u16, &str, &str), Vec<&str>>::all((port, host, user));
//! assert_eq!(result, Validation::Failure(vec!["host is empty", "user is empty"]));
//! ```

use crate::Semigroup;

/// Either a refined value or the errors that prevented it.
///
/// # Type Parameters
///
/// * `T` - The success value
/// * `E` - The failure payload, usually `Vec<Error>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation<T, E> {
    /// The input was refined into a value
    Success(T),
    /// The input was rejected
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// assert!(Validation::<i32, String>::success(42).is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// assert!(Validation::<i32, _>::failure(vec!["bad"]).is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a `Result`
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation into a `Result`
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["bad"]);
    /// assert_eq!(v.into_result(), Err(vec!["bad"]));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// The success value, if any.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// The failure payload, if any.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Borrow the contents.
    #[inline]
    pub fn as_ref(&self) -> Validation<&T, &E> {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the success value, leaving a failure untouched
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// let v = Validation::<_, Vec<&str>>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the failure payload, leaving a success untouched
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["a", "b"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent step. `f` only runs on success.
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// let parsed = Validation::<_, Vec<&str>>::success("42")
    ///     .and_then(|s| match s.parse::<i32>() {
    ///         Ok(n) => Validation::success(n),
    ///         Err(_) => Validation::failure(vec!["not a number"]),
    ///     });
    /// assert_eq!(parsed, Validation::Success(42));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in a tuple, accumulating every failure.
    ///
    /// Delegates to [`ValidateAll`], implemented for tuples of up to six
    /// validations.
    pub fn all<V, E2>(validations: V) -> Validation<V::Output, E2>
    where
        E2: Semigroup,
        V: ValidateAll<E2>,
    {
        validations.validate_all()
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two validations, accumulating errors when both fail
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["first"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["second"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["first", "second"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine a list of validations, keeping the successes in order or all
    /// of the errors.
    ///
    /// ```
    /// use weir::Validation;
    ///
    /// let validations = vec![
    ///     Validation::success(1),
    ///     Validation::failure(vec!["bad 2"]),
    ///     Validation::failure(vec!["bad 3"]),
    /// ];
    /// assert_eq!(
    ///     Validation::all_vec(validations),
    ///     Validation::Failure(vec!["bad 2", "bad 3"])
    /// );
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut values = Vec::with_capacity(validations.len());
        let mut errors = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => values.push(value),
                Validation::Failure(error) => errors = Some(accumulate(errors.take(), error)),
            }
        }

        match errors {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(values),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<T, E> From<Validation<T, E>> for Result<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_result()
    }
}

fn accumulate<E: Semigroup>(acc: Option<E>, error: E) -> E {
    match acc {
        Some(acc) => acc.combine(error),
        None => error,
    }
}

/// Combine a tuple of validations, accumulating errors
///
/// Lets [`Validation::all`] work on heterogeneous success types.
pub trait ValidateAll<E: Semigroup> {
    /// The tuple of success values
    type Output;

    /// Combine all validations, accumulating errors in tuple order
    fn validate_all(self) -> Validation<Self::Output, E>;
}

macro_rules! impl_validate_all {
    ($first:ident $(, $rest:ident)* => $pattern:pat => ($($out:ident),+)) => {
        impl<E: Semigroup, $first $(, $rest)*> ValidateAll<E>
            for (Validation<$first, E>, $(Validation<$rest, E>,)*)
        {
            type Output = ($first, $($rest,)*);

            #[allow(non_snake_case)]
            fn validate_all(self) -> Validation<Self::Output, E> {
                let ($first, $($rest,)*) = self;
                $first$(.and($rest))*.map(|$pattern| ($($out,)+))
            }
        }
    };
}

impl_validate_all!(A => a => (a));
impl_validate_all!(A, B => (a, b) => (a, b));
impl_validate_all!(A, B, C => ((a, b), c) => (a, b, c));
impl_validate_all!(A, B, C, D => (((a, b), c), d) => (a, b, c, d));
impl_validate_all!(A, B, C, D, F => ((((a, b), c), d), f) => (a, b, c, d, f));
impl_validate_all!(A, B, C, D, F, G => (((((a, b), c), d), f), g) => (a, b, c, d, f, g));
