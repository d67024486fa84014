//! Refiner trait definition.

use crate::validation::Validation;

/// A pure, fallible transformation from `&I` to an owned output.
///
/// `refine` is a single-shot computation with two outcomes:
/// `Validation::Success(output)` or `Validation::Failure(errors)`. There is
/// no partial state and no retry; composed refiners are evaluated eagerly,
/// left to right, on every call.
///
/// Failures carry a `Vec` of errors. Only [`none`](super::none) fails with
/// an empty list.
///
/// # Example
///
/// ```rust
/// use weir::refiner::Refiner;
/// use weir::Validation;
///
/// struct ParsePort;
///
/// impl Refiner<str> for ParsePort {
///     type Output = u16;
///     type Error = String;
///
///     fn refine(&self, input: &str) -> Validation<u16, Vec<String>> {
///         input
///             .parse::<u16>()
///             .map_err(|e| vec![format!("'{}': {}", input, e)])
///             .into()
///     }
/// }
///
/// assert_eq!(ParsePort.refine("8080"), Validation::Success(8080));
/// assert!(ParsePort.refine("http").is_failure());
/// ```
pub trait Refiner<I: ?Sized>: Send + Sync {
    /// The refined value produced on success.
    type Output;

    /// The error reported on failure.
    type Error;

    /// Attempt to refine the input.
    fn refine(&self, input: &I) -> Validation<Self::Output, Vec<Self::Error>>;
}
