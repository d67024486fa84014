//! Extension trait providing combinator methods for all refiners.

use crate::refiner::boxed::BoxedRefiner;
use crate::refiner::combinators::{AndThen, Ensure, MapError, MapInput, MapOutput, Or, Zip};
use crate::refiner::trait_def::Refiner;
use crate::validator::Validator;

/// Combinator methods available on every [`Refiner`].
///
/// # Example
///
/// ```rust
/// use weir::refiner::{from_result, Refiner, RefinerExt};
/// use weir::validator::from_predicate;
/// use weir::Validation;
///
/// #[derive(Debug, PartialEq)]
/// struct Percent(u8);
///
/// let percent = from_result(|s: &str| s.trim_end_matches('%').parse::<u8>().map_err(|_| "not a number"))
///     .ensure(from_predicate(|n: &u8| *n <= 100, "above 100"))
///     .map_output(Percent);
///
/// assert_eq!(percent.refine("42%"), Validation::Success(Percent(42)));
/// assert_eq!(percent.refine("142%"), Validation::Failure(vec!["above 100"]));
/// ```
pub trait RefinerExt<I: ?Sized>: Refiner<I> + Sized {
    /// Refine a projection of another input type.
    ///
    /// ```rust
    /// use weir::refiner::{from_result, Refiner, RefinerExt};
    /// use weir::Validation;
    ///
    /// let parse = from_result(|s: &String| s.parse::<u8>().map_err(|_| "not a byte"));
    /// let from_bytes = parse.map_input(|b: &[u8]| String::from_utf8_lossy(b).into_owned());
    ///
    /// assert_eq!(from_bytes.refine(&b"12"[..]), Validation::Success(12));
    /// ```
    fn map_input<U, F>(self, f: F) -> MapInput<Self, F, I>
    where
        I: Sized,
        U: ?Sized,
        F: Fn(&U) -> I + Send + Sync,
    {
        MapInput::new(self, f)
    }

    /// Transform the output on success.
    fn map_output<O, F>(self, f: F) -> MapOutput<Self, F>
    where
        F: Fn(Self::Output) -> O + Send + Sync,
    {
        MapOutput { inner: self, f }
    }

    /// Transform every error on failure.
    fn map_error<E2, F>(self, f: F) -> MapError<Self, F>
    where
        F: Fn(Self::Error) -> E2 + Send + Sync,
    {
        MapError { inner: self, f }
    }

    /// Refine the output further with `next`, which never runs if `self`
    /// fails.
    fn and_then<G>(self, next: G) -> AndThen<Self, G>
    where
        G: Refiner<Self::Output, Error = Self::Error>,
    {
        AndThen {
            first: self,
            second: next,
        }
    }

    /// Check the output with a validator before returning it.
    fn ensure<V>(self, validator: V) -> Ensure<Self, V>
    where
        V: Validator<Self::Output, Error = Self::Error>,
    {
        Ensure {
            inner: self,
            validator,
        }
    }

    /// Fall back to `fallback` when `self` fails, discarding `self`'s errors.
    fn or<F>(self, fallback: F) -> Or<Self, F>
    where
        F: Refiner<I, Output = Self::Output, Error = Self::Error>,
    {
        Or {
            primary: self,
            fallback,
        }
    }

    /// Run both refiners and pair their outputs, accumulating errors.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        B: Refiner<I, Error = Self::Error>,
    {
        Zip {
            first: self,
            second: other,
        }
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedRefiner<I, Self::Output, Self::Error>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<I: ?Sized, R: Refiner<I>> RefinerExt<I> for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refiner::{fail, from_fn, from_mapping, from_result, from_validator};
    use crate::validation::Validation;
    use crate::validator::from_predicate;

    #[derive(Debug, Clone, PartialEq)]
    struct Email {
        user: String,
        domain: String,
    }

    fn split_email(s: &str) -> Result<Email, String> {
        match s.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(Email {
                user: user.to_string(),
                domain: domain.to_string(),
            }),
            _ => Err(format!("'{}' is not an email", s)),
        }
    }

    #[test]
    fn test_map_output_skips_failure() {
        let r = from_result(split_email).map_output(|e: Email| e.domain);
        assert_eq!(r.refine("a@b.io"), Validation::Success("b.io".to_string()));
        assert!(r.refine("ab.io").is_failure());
    }

    #[test]
    fn test_map_error_keeps_empty_failure_empty() {
        let r = RefinerExt::<str>::map_error(crate::refiner::none::<i32, i32>(), |n: i32| n + 1);
        assert_eq!(Refiner::<str>::refine(&r, "x"), Validation::Failure(vec![]));
    }

    #[test]
    fn test_map_error_transforms_each_error_in_order() {
        let r = from_fn(|s: &str| {
            if s.is_empty() {
                Validation::Failure(vec![1, 2, 3])
            } else {
                Validation::Success(s.len())
            }
        })
        .map_error(|code: i32| code * 10);

        assert_eq!(r.refine(""), Validation::Failure(vec![10, 20, 30]));
        assert_eq!(r.refine("abc"), Validation::Success(3));
    }

    #[test]
    fn test_and_then_threads_output() {
        let r = from_result(split_email).and_then(from_result(|e: &Email| {
            if e.domain.contains('.') {
                Ok(e.user.clone())
            } else {
                Err(format!("'{}' has no top-level domain", e.domain))
            }
        }));
        assert_eq!(r.refine("ann@site.org"), Validation::Success("ann".to_string()));
        assert_eq!(
            r.refine("ann@localhost"),
            Validation::Failure(vec!["'localhost' has no top-level domain".to_string()])
        );
        assert_eq!(
            r.refine("nobody"),
            Validation::Failure(vec!["'nobody' is not an email".to_string()])
        );
    }

    #[test]
    fn test_ensure_runs_validator_on_output() {
        let r = from_result(split_email).ensure(from_predicate(
            |e: &Email| e.user != "root",
            "root is reserved".to_string(),
        ));
        assert!(r.refine("ann@site.org").is_success());
        assert_eq!(
            r.refine("root@site.org"),
            Validation::Failure(vec!["root is reserved".to_string()])
        );
    }

    #[test]
    fn test_or_method_uses_fallback_result() {
        let r = from_result(split_email).or(fail("fallback".to_string()));
        assert_eq!(
            r.refine("x"),
            Validation::Failure(vec!["fallback".to_string()])
        );
    }

    #[test]
    fn test_zip_method_pairs_outputs() {
        let r = from_result(split_email).zip(from_mapping(|s: &str| s.len()));
        assert_eq!(
            r.refine("a@b"),
            Validation::Success((
                Email {
                    user: "a".into(),
                    domain: "b".into()
                },
                3
            ))
        );
    }

    #[test]
    fn test_map_input_adapts_type() {
        let r = from_validator(from_predicate(|n: &usize| *n > 2, "too short"))
            .map_input(|s: &str| s.len());
        assert_eq!(r.refine("abcd"), Validation::Success(4));
        assert_eq!(r.refine("ab"), Validation::Failure(vec!["too short"]));
    }

    #[test]
    fn test_boxed_refiners_share_a_list() {
        let rules: Vec<BoxedRefiner<str, usize, String>> = vec![
            from_result(|s: &str| s.parse::<usize>().map_err(|e| e.to_string())).boxed(),
            from_mapping(|s: &str| s.len()).boxed(),
        ];
        let outputs: Vec<_> = rules.iter().map(|r| r.refine("12")).collect();
        assert_eq!(
            outputs,
            vec![Validation::Success(12), Validation::Success(2)]
        );
    }
}
