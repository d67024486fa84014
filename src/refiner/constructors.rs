//! Constructor functions for refiners.

use std::marker::PhantomData;

use crate::refiner::combinators::{
    AndThen, Any, Fail, FromFn, FromMapping, FromResult, FromValidator, Identity, Or, Reject,
    Succeed, Zip,
};
use crate::refiner::trait_def::Refiner;
use crate::validation::Validation;

/// A refiner that ignores its input and succeeds with `output`.
///
/// # Example
///
/// ```rust
/// use weir::refiner::{succeed, Refiner};
/// use weir::Validation;
///
/// let r = succeed::<_, &str>(80u16);
/// assert_eq!(Refiner::<str>::refine(&r, "anything"), Validation::Success(80));
/// ```
pub fn succeed<O, E>(output: O) -> Succeed<O, E>
where
    O: Clone + Send + Sync,
{
    Succeed {
        output,
        _phantom: PhantomData,
    }
}

/// A refiner that ignores its input and fails with `[error]`.
pub fn fail<O, E>(error: E) -> Fail<O, E>
where
    E: Clone + Send + Sync,
{
    Fail {
        error,
        _phantom: PhantomData,
    }
}

/// A refiner that always fails with no errors.
///
/// ```rust
/// use weir::refiner::{none, Refiner};
/// use weir::Validation;
///
/// let r = none::<i32, &str>();
/// assert_eq!(Refiner::<str>::refine(&r, "x"), Validation::Failure(vec![]));
/// ```
pub fn none<O, E>() -> Reject<O, E> {
    Reject {
        _phantom: PhantomData,
    }
}

/// Lift a validator into a refiner that succeeds with an owned copy of the
/// input when the validator reports nothing.
///
/// # Example
///
/// ```rust
/// use weir::refiner::{from_validator, Refiner};
/// use weir::validator::from_predicate;
/// use weir::Validation;
///
/// let name = from_validator(from_predicate(|s: &str| !s.is_empty(), "empty"));
/// assert_eq!(name.refine("ada"), Validation::Success("ada".to_string()));
/// assert_eq!(name.refine(""), Validation::Failure(vec!["empty"]));
/// ```
pub fn from_validator<V>(validator: V) -> FromValidator<V> {
    FromValidator::new(validator)
}

/// Lift a total function into a refiner that always succeeds.
///
/// ```rust
/// use weir::refiner::{from_mapping, Refiner};
/// use weir::Validation;
///
/// let upper = from_mapping::<_, _, _, ()>(|s: &str| s.to_uppercase());
/// assert_eq!(upper.refine("abc"), Validation::Success("ABC".to_string()));
/// ```
pub fn from_mapping<I, O, F, E>(f: F) -> FromMapping<F, I, E>
where
    I: ?Sized,
    F: Fn(&I) -> O + Send + Sync,
{
    FromMapping::new(f)
}

/// A refiner that succeeds with an owned copy of its input.
///
/// The neutral element of [`compose`].
pub fn identity<E>() -> Identity<E> {
    Identity {
        _phantom: PhantomData,
    }
}

/// Create a refiner from a function returning the full outcome.
///
/// ```rust
/// use weir::refiner::{from_fn, Refiner};
/// use weir::Validation;
///
/// let words = from_fn(|s: &str| {
///     let words: Vec<String> = s.split_whitespace().map(str::to_string).collect();
///     if words.is_empty() {
///         Validation::Failure(vec!["no words"])
///     } else {
///         Validation::Success(words)
///     }
/// });
///
/// assert_eq!(words.refine(" a b "), Validation::Success(vec!["a".into(), "b".into()]));
/// assert_eq!(words.refine("  "), Validation::Failure(vec!["no words"]));
/// ```
pub fn from_fn<I, O, E, F>(f: F) -> FromFn<F, I>
where
    I: ?Sized,
    F: Fn(&I) -> Validation<O, Vec<E>> + Send + Sync,
{
    FromFn::new(f)
}

/// Create a refiner from a function returning `Result`.
///
/// ```rust
/// use weir::refiner::{from_result, Refiner};
/// use weir::Validation;
///
/// let port = from_result(|s: &str| s.parse::<u16>().map_err(|e| e.to_string()));
/// assert_eq!(port.refine("443"), Validation::Success(443));
/// assert!(port.refine("https").is_failure());
/// ```
pub fn from_result<I, O, E, F>(f: F) -> FromResult<F, I>
where
    I: ?Sized,
    F: Fn(&I) -> Result<O, E> + Send + Sync,
{
    FromResult::new(f)
}

/// Feed the output of `f` into `g`.
///
/// Arguments are in mathematical order: `compose(g, f)` runs `f` first.
/// `g` is never invoked when `f` fails. Same as `f.and_then(g)`.
///
/// # Example
///
/// ```rust
/// use weir::refiner::{compose, from_result, Refiner};
/// use weir::Validation;
///
/// let parse = from_result(|s: &str| s.parse::<i64>().map_err(|_| "not a number"));
/// let positive = from_result(|n: &i64| if *n > 0 { Ok(*n as u64) } else { Err("not positive") });
///
/// let count = compose(positive, parse);
/// assert_eq!(count.refine("12"), Validation::Success(12));
/// assert_eq!(count.refine("-3"), Validation::Failure(vec!["not positive"]));
/// assert_eq!(count.refine("x"), Validation::Failure(vec!["not a number"]));
/// ```
pub fn compose<I, F, G>(g: G, f: F) -> AndThen<F, G>
where
    I: ?Sized,
    F: Refiner<I>,
    G: Refiner<F::Output, Error = F::Error>,
{
    AndThen {
        first: f,
        second: g,
    }
}

/// Try `primary`; if it fails, discard its errors and return `fallback`'s
/// result.
///
/// # Example
///
/// ```rust
/// use weir::refiner::{or, from_result, Refiner};
/// use weir::Validation;
///
/// let decimal = from_result(|s: &str| s.parse::<u32>().map_err(|_| "not decimal"));
/// let hex = from_result(|s: &str| {
///     s.strip_prefix("0x")
///         .and_then(|h| u32::from_str_radix(h, 16).ok())
///         .ok_or("not hex")
/// });
///
/// let number = or(hex, decimal);
/// assert_eq!(number.refine("10"), Validation::Success(10));
/// assert_eq!(number.refine("0x10"), Validation::Success(16));
/// assert_eq!(number.refine("ten"), Validation::Failure(vec!["not hex"]));
/// ```
pub fn or<I, P, F>(fallback: F, primary: P) -> Or<P, F>
where
    I: ?Sized,
    P: Refiner<I>,
    F: Refiner<I, Output = P::Output, Error = P::Error>,
{
    Or { primary, fallback }
}

/// Try each refiner in order and return the first success.
///
/// When every refiner fails the errors of the last one are returned; an
/// empty list fails with `[default_error]`.
///
/// # Example
///
/// ```rust
/// use weir::refiner::{any, from_result, Refiner, RefinerExt};
/// use weir::Validation;
///
/// let flag = any(
///     "empty rule list",
///     vec![
///         from_result(|s: &str| s.parse::<bool>().map_err(|_| "not true/false")).boxed(),
///         from_result(|s: &str| match s {
///             "yes" => Ok(true),
///             "no" => Ok(false),
///             _ => Err("not yes/no"),
///         })
///         .boxed(),
///     ],
/// );
///
/// assert_eq!(flag.refine("yes"), Validation::Success(true));
/// assert_eq!(flag.refine("maybe"), Validation::Failure(vec!["not yes/no"]));
/// ```
pub fn any<R, E, It>(default_error: E, refiners: It) -> Any<R, E>
where
    It: IntoIterator<Item = R>,
    E: Clone + Send + Sync,
{
    Any {
        refiners: refiners.into_iter().collect(),
        default_error,
    }
}

/// Run both refiners on the same input and pair their outputs, accumulating
/// the errors of both when they fail.
pub fn zip<I, A, B>(first: A, second: B) -> Zip<A, B>
where
    I: ?Sized,
    A: Refiner<I>,
    B: Refiner<I, Error = A::Error>,
{
    Zip { first, second }
}
