//! Boolean predicates used as the raw material of leaf validators
//!
//! A [`Predicate`] answers yes or no about a value. On its own it carries no
//! diagnostic; [`validator::from_predicate`](crate::validator::from_predicate)
//! and its siblings attach an error to turn it into a validator.
//!
//! Any `Fn(&T) -> bool + Send + Sync` closure is a predicate, and predicates
//! combine with [`PredicateExt::and`], [`PredicateExt::or`] and
//! [`PredicateExt::not`].
//!
//! # Example
//!
//! ```rust
//! use weir::predicate::{Predicate, PredicateExt};
//!
//! let is_even = |n: &i32| n % 2 == 0;
//! let is_small = |n: &i32| n.abs() < 100;
//!
//! let small_odd = is_even.not().and(is_small);
//! assert!(small_odd.check(&7));
//! assert!(!small_odd.check(&8));
//! assert!(!small_odd.check(&701));
//! ```

mod combinators;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
