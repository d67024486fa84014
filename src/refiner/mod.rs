//! Refiners: fallible transformations from one type into another.
//!
//! A [`Refiner<I>`](Refiner) takes a `&I` and returns a
//! [`Validation`](crate::Validation): the refined output, or the errors that
//! prevented it. Refiners are typically built by lifting validators and
//! parsing functions, then composed:
//!
//! | Combinator | Policy |
//! |------------|--------|
//! | [`compose`], [`RefinerExt::and_then`] | sequential, the second step never runs after a failure |
//! | [`or`], [`RefinerExt::or`] | fallback; the primary's errors are discarded |
//! | [`any`] | first success wins; otherwise the last attempt's errors |
//! | [`zip`], [`RefinerExt::zip`] | both run, errors accumulate |
//!
//! # Example
//!
//! ```rust
//! use weir::refiner::{from_result, Refiner, RefinerExt};
//! use weir::validator::{from_predicate, ValidatorExt};
//! use weir::Validation;
//!
//! #[derive(Debug, PartialEq)]
//! struct Username(String);
//!
//! let trimmed = from_result(|s: &str| Ok::<_, &str>(s.trim().to_string()))
//!     .and_then(
//!         from_predicate(|s: &String| s.len() >= 3, "too short")
//!             .then(from_predicate(|s: &String| s.chars().all(char::is_alphanumeric), "bad character"))
//!             .into_refiner(),
//!     )
//!     .map_output(Username);
//!
//! assert_eq!(trimmed.refine("  ada "), Validation::Success(Username("ada".into())));
//! assert_eq!(trimmed.refine("a-b-c"), Validation::Failure(vec!["bad character"]));
//! ```

mod boxed;
pub mod combinators;
mod constructors;
mod ext;
mod trait_def;

pub use boxed::BoxedRefiner;
pub use constructors::{
    any, compose, fail, from_fn, from_mapping, from_result, from_validator, identity, none, or,
    succeed, zip,
};
pub use ext::RefinerExt;
pub use trait_def::Refiner;
