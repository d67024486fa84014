//! Ready-made validators for common checks
//!
//! Each function here is a thin wrapper over the
//! [`validator`](crate::validator) constructors and returns an opaque
//! `impl Validator`, so the results compose like any other validator.
//!
//! # Examples
//!
//! ```
//! use weir::leaf::{has_char_count_between, is_email, RangeError};
//! use weir::validator::{Validator, ValidatorExt};
//!
//! let name = has_char_count_between(2, 20).with_context("name");
//! let email = is_email().with_context("email");
//!
//! assert_eq!(name.validate("x")[0].inner(), &RangeError::BelowMinimum(2));
//! assert_eq!(email.validate("ada@example")[0].to_string(), "email: ada@example");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::validator::{
    from_predicate, from_predicate_self, on_char_count, on_len, Validator, ValidatorExt,
};

/// A value outside an inclusive bound
///
/// Carries the bound that was violated, not the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeError<T> {
    /// The value is smaller than this minimum
    BelowMinimum(T),
    /// The value is larger than this maximum
    AboveMaximum(T),
}

impl<T: fmt::Display> fmt::Display for RangeError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::BelowMinimum(min) => write!(f, "must be at least {}", min),
            RangeError::AboveMaximum(max) => write!(f, "must be at most {}", max),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> StdError for RangeError<T> {}

/// Reject values smaller than `min`.
///
/// ```
/// use weir::leaf::{is_at_least, RangeError};
/// use weir::validator::Validator;
///
/// let adult = is_at_least(18u8);
/// assert!(adult.validate(&30).is_empty());
/// assert_eq!(adult.validate(&17), vec![RangeError::BelowMinimum(18)]);
/// ```
pub fn is_at_least<T>(min: T) -> impl Validator<T, Error = RangeError<T>> + Clone
where
    T: PartialOrd + Clone + Send + Sync,
{
    let error = RangeError::BelowMinimum(min.clone());
    from_predicate(move |value: &T| *value >= min, error)
}

/// Reject values larger than `max`.
pub fn is_at_most<T>(max: T) -> impl Validator<T, Error = RangeError<T>> + Clone
where
    T: PartialOrd + Clone + Send + Sync,
{
    let error = RangeError::AboveMaximum(max.clone());
    from_predicate(move |value: &T| *value <= max, error)
}

/// Reject values outside `min..=max`.
///
/// Both bounds are always checked, so an empty range (`min > max`) reports
/// both errors for values between them.
pub fn is_in_range<T>(min: T, max: T) -> impl Validator<T, Error = RangeError<T>> + Clone
where
    T: PartialOrd + Clone + Send + Sync,
{
    is_at_least(min).and(is_at_most(max))
}

/// Reject values not in `allowed`, reporting the rejected value itself.
///
/// ```
/// use weir::leaf::is_one_of;
/// use weir::validator::{on_each, Validator};
///
/// let digits = on_each(is_one_of([1, 2, 3]));
/// assert_eq!(digits.validate(&[1, 5, 2, 9][..]), vec![5, 9]);
/// ```
pub fn is_one_of<T, I>(allowed: I) -> impl Validator<T, Error = T> + Clone
where
    T: PartialEq + Clone + Send + Sync,
    I: IntoIterator<Item = T>,
{
    let allowed: Vec<T> = allowed.into_iter().collect();
    from_predicate_self(move |value: &T| allowed.contains(value))
}

/// Reject strings that do not look like `local@domain.tld`, reporting the
/// rejected string.
///
/// Only the shape is checked: one `@`, a non-empty local part, and a domain
/// of at least two non-empty dot-separated labels, with no whitespace.
pub fn is_email() -> impl Validator<str, Error = String> + Clone {
    from_predicate_self(|value: &str| looks_like_email(value))
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Reject slices whose length is outside `min..=max`.
///
/// ```
/// use weir::leaf::{has_len_between, RangeError};
/// use weir::validator::Validator;
///
/// let pair = has_len_between::<i32>(2, 2);
/// assert_eq!(pair.validate(&[1, 2, 3][..]), vec![RangeError::AboveMaximum(2)]);
/// ```
pub fn has_len_between<T>(
    min: usize,
    max: usize,
) -> impl Validator<[T], Error = RangeError<usize>> + Clone {
    on_len(is_in_range(min, max))
}

/// Reject strings whose character count is outside `min..=max`.
///
/// Counts `char`s, so multi-byte characters count once.
pub fn has_char_count_between(
    min: usize,
    max: usize,
) -> impl Validator<str, Error = RangeError<usize>> + Clone {
    on_char_count(is_in_range(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::every;

    #[test]
    fn test_range_display() {
        assert_eq!(RangeError::BelowMinimum(3).to_string(), "must be at least 3");
        assert_eq!(RangeError::AboveMaximum(7).to_string(), "must be at most 7");
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let v = is_in_range(3, 7);
        assert!(v.validate(&3).is_empty());
        assert!(v.validate(&7).is_empty());
        assert_eq!(v.validate(&2), vec![RangeError::BelowMinimum(3)]);
        assert_eq!(v.validate(&8), vec![RangeError::AboveMaximum(7)]);
    }

    #[test]
    fn test_every_reports_both_violated_bounds() {
        let impossible = every(vec![is_at_least(8).boxed(), is_at_most(1).boxed()]);
        assert_eq!(
            impossible.validate(&5),
            vec![RangeError::BelowMinimum(8), RangeError::AboveMaximum(1)]
        );

        let sensible = every(vec![is_at_least(3).boxed(), is_at_most(7).boxed()]);
        assert!(sensible.validate(&5).is_empty());
    }

    #[test]
    fn test_is_one_of_with_strings() {
        let v = is_one_of(vec!["red".to_string(), "green".to_string()]);
        assert!(v.validate(&"red".to_string()).is_empty());
        assert_eq!(v.validate(&"blue".to_string()), vec!["blue".to_string()]);
    }

    #[test]
    fn test_email_shapes() {
        let v = is_email();
        for ok in ["a@b.co", "first.last@mail.example.org"] {
            assert!(v.validate(ok).is_empty(), "{} should pass", ok);
        }
        for bad in ["", "a@b", "@b.co", "a@@b.co", "a@b..co", "a b@c.io", "a@.io"] {
            assert_eq!(v.validate(bad), vec![bad.to_string()], "{} should fail", bad);
        }
    }

    #[test]
    fn test_char_count_is_not_byte_length() {
        let v = has_char_count_between(1, 3);
        assert!(v.validate("äöü").is_empty());
        assert_eq!(v.validate(""), vec![RangeError::BelowMinimum(1)]);
    }

    #[test]
    fn test_len_between_on_vec() {
        let v = has_len_between(1, 2);
        let items: Vec<String> = vec![];
        assert_eq!(v.validate(items.as_slice()), vec![RangeError::BelowMinimum(1)]);
    }
}
