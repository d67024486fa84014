//! SetError combinator - collapses errors into one domain-level error.

use crate::validator::trait_def::Validator;

/// Replaces any non-empty error list with a single caller-chosen error.
///
/// The original errors are discarded; a valid value still reports nothing.
#[derive(Clone, Debug)]
pub struct SetError<V, E> {
    pub(crate) inner: V,
    pub(crate) error: E,
}

impl<T, V, E> Validator<T> for SetError<V, E>
where
    T: ?Sized,
    V: Validator<T>,
    E: Clone + Send + Sync,
{
    type Error = E;

    fn validate(&self, value: &T) -> Vec<E> {
        if self.inner.validate(value).is_empty() {
            Vec::new()
        } else {
            vec![self.error.clone()]
        }
    }
}
