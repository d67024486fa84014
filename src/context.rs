//! Errors annotated with where they happened
//!
//! When a validator for a whole record is assembled from validators for its
//! fields, the leaf errors alone do not say which field they belong to.
//! [`ContextError`] wraps a leaf error with a trail of context labels,
//! innermost first, that usually spells out a field path.
//!
//! # Examples
//!
//! ```
//! use weir::ContextError;
//!
//! let err = ContextError::new("must not be empty")
//!     .context("city")
//!     .context("address");
//!
//! assert_eq!(err.inner(), &"must not be empty");
//! assert_eq!(err.path(), "address.city");
//! assert_eq!(err.to_string(), "address.city: must not be empty");
//! ```
//!
//! Validators attach context with
//! [`ValidatorExt::with_context`](crate::validator::ValidatorExt::with_context).

use std::error::Error as StdError;
use std::fmt;

/// An error together with the context labels it passed through
///
/// Labels are recorded in the order they are added, so the first label is
/// the one closest to the failing check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextError<E> {
    error: E,
    context: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap an error with an empty context trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            context: Vec::new(),
        }
    }

    /// Add an outer context label.
    pub fn context(mut self, label: impl Into<String>) -> Self {
        self.context.push(label.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Discard the trail and return the wrapped error.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Context labels, innermost first.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// Context labels joined outermost first with `.`.
    ///
    /// Empty when no context was added.
    pub fn path(&self) -> String {
        let mut labels: Vec<&str> = self.context.iter().map(String::as_str).collect();
        labels.reverse();
        labels.join(".")
    }

    /// Transform the wrapped error, keeping the trail.
    pub fn map<E2, F>(self, f: F) -> ContextError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        ContextError {
            error: f(self.error),
            context: self.context,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{}: {}", self.path(), self.error)
        }
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_context() {
        let err = ContextError::new("bad");
        assert_eq!(err.context_trail(), &[] as &[String]);
        assert_eq!(err.path(), "");
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_trail_is_innermost_first() {
        let err = ContextError::new("bad").context("zip").context("address");
        assert_eq!(err.context_trail(), &["zip", "address"]);
        assert_eq!(err.path(), "address.zip");
    }

    #[test]
    fn test_display_with_path() {
        let err = ContextError::new("too short")
            .context("name")
            .context(String::from("user"));
        assert_eq!(format!("{}", err), "user.name: too short");
    }

    #[test]
    fn test_map_keeps_trail() {
        let err = ContextError::new(3).context("count").map(|n| n * 2);
        assert_eq!(err.inner(), &6);
        assert_eq!(err.path(), "count");
    }

    #[test]
    fn test_source_points_at_inner() {
        let inner = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes");
        let err = ContextError::new(inner).context("payload");
        assert!(err.source().is_some());
        assert_eq!(err.into_inner().kind(), std::io::ErrorKind::InvalidData);
    }
}
