//! Tracing support for validators and refiners.
//!
//! [`Instrument`] enters a span for the duration of each call and records
//! the outcome as a `debug` event. Only available with the `tracing` feature.

use crate::refiner::Refiner;
use crate::validation::Validation;
use crate::validator::Validator;

/// A validator or refiner wrapped in a tracing span.
///
/// Created by [`ValidatorTracingExt::instrument`] or
/// [`RefinerTracingExt::instrument`].
#[derive(Debug, Clone)]
pub struct Instrument<V> {
    pub(crate) inner: V,
    pub(crate) span: ::tracing::Span,
}

impl<T, V> Validator<T> for Instrument<V>
where
    T: ?Sized,
    V: Validator<T>,
{
    type Error = V::Error;

    fn validate(&self, value: &T) -> Vec<V::Error> {
        let _entered = self.span.enter();
        let errors = self.inner.validate(value);
        ::tracing::debug!(error_count = errors.len(), "validated");
        errors
    }
}

impl<I, R> Refiner<I> for Instrument<R>
where
    I: ?Sized,
    R: Refiner<I>,
{
    type Output = R::Output;
    type Error = R::Error;

    fn refine(&self, input: &I) -> Validation<R::Output, Vec<R::Error>> {
        let _entered = self.span.enter();
        let result = self.inner.refine(input);
        match &result {
            Validation::Success(_) => ::tracing::debug!("refined"),
            Validation::Failure(errors) => {
                ::tracing::debug!(error_count = errors.len(), "refinement failed")
            }
        }
        result
    }
}

/// Adds [`instrument`](Self::instrument) to every validator.
///
/// # Example
///
/// ```rust
/// use weir::tracing::ValidatorTracingExt;
/// use weir::validator::{from_predicate, Validator};
///
/// let port = from_predicate(|p: &u16| *p >= 1024, "privileged port")
///     .instrument(tracing::debug_span!("port"));
/// assert_eq!(port.validate(&80), vec!["privileged port"]);
/// ```
pub trait ValidatorTracingExt<T: ?Sized>: Validator<T> + Sized {
    /// Run every validation inside `span`.
    fn instrument(self, span: ::tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<T: ?Sized, V: Validator<T>> ValidatorTracingExt<T> for V {}

/// Adds [`instrument`](Self::instrument) to every refiner.
///
/// A type implementing both traits gets both methods; call through the
/// trait to pick one.
pub trait RefinerTracingExt<I: ?Sized>: Refiner<I> + Sized {
    /// Run every refinement inside `span`.
    fn instrument(self, span: ::tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<I: ?Sized, R: Refiner<I>> RefinerTracingExt<I> for R {}
