//! Projection helpers: apply a validator to a derived scalar or to each element.

use std::marker::PhantomData;

use crate::validator::trait_def::Validator;

/// Validates the length of a slice with a `Validator<usize>`.
pub struct OnLen<V, T> {
    pub(crate) inner: V,
    pub(crate) _element: PhantomData<fn(&[T])>,
}

impl<V: Clone, T> Clone for OnLen<V, T> {
    fn clone(&self) -> Self {
        OnLen {
            inner: self.inner.clone(),
            _element: PhantomData,
        }
    }
}

impl<V: std::fmt::Debug, T> std::fmt::Debug for OnLen<V, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnLen").field("inner", &self.inner).finish()
    }
}

impl<T, V> Validator<[T]> for OnLen<V, T>
where
    V: Validator<usize>,
{
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &[T]) -> Vec<V::Error> {
        self.inner.validate(&value.len())
    }
}

/// Validates the number of characters (not bytes) of a string.
#[derive(Clone, Debug)]
pub struct OnCharCount<V> {
    pub(crate) inner: V,
}

impl<V> Validator<str> for OnCharCount<V>
where
    V: Validator<usize>,
{
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &str) -> Vec<V::Error> {
        self.inner.validate(&value.chars().count())
    }
}

/// Validates the content of an `Option` only when it is present.
#[derive(Clone, Debug)]
pub struct OnSome<V> {
    pub(crate) inner: V,
}

impl<T, V> Validator<Option<T>> for OnSome<V>
where
    V: Validator<T>,
{
    type Error = V::Error;

    #[inline]
    fn validate(&self, value: &Option<T>) -> Vec<V::Error> {
        match value {
            Some(inner) => self.inner.validate(inner),
            None => Vec::new(),
        }
    }
}

/// Validates every element of a slice, concatenating errors in element order.
#[derive(Clone, Debug)]
pub struct OnEach<V> {
    pub(crate) inner: V,
}

impl<T, V> Validator<[T]> for OnEach<V>
where
    V: Validator<T>,
{
    type Error = V::Error;

    fn validate(&self, value: &[T]) -> Vec<V::Error> {
        value
            .iter()
            .flat_map(|element| self.inner.validate(element))
            .collect()
    }
}

/// Validates every character of a string, in order.
#[derive(Clone, Debug)]
pub struct OnEachChar<V> {
    pub(crate) inner: V,
}

impl<V> Validator<str> for OnEachChar<V>
where
    V: Validator<char>,
{
    type Error = V::Error;

    fn validate(&self, value: &str) -> Vec<V::Error> {
        value
            .chars()
            .flat_map(|c| self.inner.validate(&c))
            .collect()
    }
}
