//! Context combinators - label errors with the field they came from.

use crate::context::ContextError;
use crate::validator::trait_def::Validator;

/// Wraps every error in a [`ContextError`] labelled with `label`.
#[derive(Clone, Debug)]
pub struct WithContext<V> {
    pub(crate) inner: V,
    pub(crate) label: String,
}

impl<T, V> Validator<T> for WithContext<V>
where
    T: ?Sized,
    V: Validator<T>,
{
    type Error = ContextError<V::Error>;

    fn validate(&self, value: &T) -> Vec<Self::Error> {
        self.inner
            .validate(value)
            .into_iter()
            .map(|error| ContextError::new(error).context(self.label.as_str()))
            .collect()
    }
}

/// Adds an outer label to errors that already carry context.
///
/// Nesting `context` calls builds a path: the field validator labels its
/// errors with the field name, the record validator adds the record name.
#[derive(Clone, Debug)]
pub struct AddContext<V> {
    pub(crate) inner: V,
    pub(crate) label: String,
}

impl<T, V, E> Validator<T> for AddContext<V>
where
    T: ?Sized,
    V: Validator<T, Error = ContextError<E>>,
{
    type Error = ContextError<E>;

    fn validate(&self, value: &T) -> Vec<Self::Error> {
        self.inner
            .validate(value)
            .into_iter()
            .map(|error| error.context(self.label.as_str()))
            .collect()
    }
}
