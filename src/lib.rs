//! # weir
//!
//! Composable validators and refiners.
//!
//! A **validator** inspects a value and reports zero or more errors without
//! changing it. A **refiner** tries to turn a value into something else and
//! explains why when it cannot. Both are pure and `Send + Sync`; their value
//! lies in how they compose, and every combinator documents exactly which
//! errors it keeps:
//!
//! - accumulate: [`validator::every`], [`refiner::zip`]
//! - stop at the first failure: [`validator::first_of_every`], [`refiner::compose`]
//! - stop at the first success: [`validator::any`], [`refiner::or`], [`refiner::any`]
//! - remap: `map_error`, `set_error`, `with_context`
//!
//! ## Quick Example
//!
//! ```rust
//! use weir::leaf::{has_char_count_between, is_at_least, is_email, RangeError};
//! use weir::refiner::{Refiner, RefinerExt};
//! use weir::validator::{every, Validator, ValidatorExt};
//! use weir::Validation;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Signup {
//!     name: String,
//!     email: String,
//!     age: u8,
//! }
//!
//! let signup = every(vec![
//!     has_char_count_between(1, 40)
//!         .map_error(|e: RangeError<usize>| e.to_string())
//!         .with_context("name")
//!         .focus(|s: &Signup| s.name.as_str())
//!         .boxed(),
//!     is_email()
//!         .map_error(|e: String| format!("'{}' is not an email", e))
//!         .with_context("email")
//!         .focus(|s: &Signup| s.email.as_str())
//!         .boxed(),
//!     is_at_least(13u8)
//!         .map_error(|e: RangeError<u8>| e.to_string())
//!         .with_context("age")
//!         .focus(|s: &Signup| &s.age)
//!         .boxed(),
//! ]);
//!
//! let form = Signup {
//!     name: String::new(),
//!     email: "ada@example.org".into(),
//!     age: 12,
//! };
//! let report: Vec<String> = signup.validate(&form).iter().map(|e| e.to_string()).collect();
//! assert_eq!(report, vec!["name: must be at least 1", "age: must be at least 13"]);
//!
//!
//! // The same rules as a refiner that extracts the accepted name
//! let accepted = signup.into_refiner().map_output(|s: Signup| s.name);
//! assert!(accepted.refine(&form).is_failure());
//!
//! let good = Signup {
//!     name: "Ada".into(),
//!     email: "ada@example.org".into(),
//!     age: 36,
//! };
//! assert_eq!(accepted.refine(&good), Validation::Success("Ada".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`validator`]: the validator algebra
//! - [`refiner`]: the refiner algebra
//! - [`leaf`]: ready-made range, length, membership and email checks
//! - [`predicate`]: boolean predicates consumed by `from_predicate`
//! - [`testing`]: assertion macros and an invocation-counting spy
//!
//! ## Cargo features
//!
//! - `tracing`: span instrumentation for validators and refiners
//! - `serde`: `Serialize`/`Deserialize` for the result and error types
//! - `proptest`: `Arbitrary` for [`Validation`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod leaf;
pub mod predicate;
pub mod refiner;
pub mod semigroup;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod validation;
pub mod validator;

// Re-exports
pub use context::ContextError;
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
///
/// Brings the core traits and their extension traits into scope. The
/// constructor functions share names across the two algebras, so they are
/// left to be imported from [`validator`](crate::validator) and
/// [`refiner`](crate::refiner).
pub mod prelude {
    pub use crate::context::ContextError;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::refiner::{BoxedRefiner, Refiner, RefinerExt};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::{BoxedValidator, Validator, ValidatorExt};
}
