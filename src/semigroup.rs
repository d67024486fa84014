//! Semigroup trait for combining error collections
//!
//! Accumulating combinators need a way to merge the errors of two independent
//! checks. `Semigroup` is that operation: it must be associative, so the order
//! in which partial results are merged never changes the final error list.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use weir::Semigroup;
//!
//! let first = vec!["name is empty"];
//! let second = vec!["age is negative"];
//! assert_eq!(first.combine(second), vec!["name is empty", "age is negative"]);
//! ```
//!
//! Implement it for a custom error report:
//!
//! ```
//! use weir::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct Report {
//!     lines: Vec<String>,
//! }
//!
//! impl Semigroup for Report {
//!     fn combine(mut self, other: Self) -> Self {
//!         self.lines.extend(other.lines);
//!         self
//!     }
//! }
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes both sides by value. Clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another, left side first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
