//! Validators: pure checks that report errors without transforming the value.
//!
//! A [`Validator<T>`](Validator) inspects a `&T` and returns a `Vec` of
//! errors. The empty vec means valid. Validators are built from predicates
//! and composed with a small set of combinators whose error policies are
//! fixed and documented:
//!
//! | Combinator | Policy |
//! |------------|--------|
//! | [`every`], [`ValidatorExt::and`] | run all, concatenate all errors |
//! | [`first_of_every`], [`ValidatorExt::then`] | stop at the first failure, return its errors |
//! | [`any`], [`ValidatorExt::or`] | stop at the first pass; if all fail, concatenate all errors |
//! | [`ValidatorExt::map_error`], [`ValidatorExt::set_error`], [`ValidatorExt::with_context`] | remap errors |
//!
//! # Example
//!
//! ```rust
//! use weir::validator::{every, from_predicate, on_each, on_some, Validator, ValidatorExt};
//!
//! struct Signup {
//!     username: String,
//!     tags: Vec<String>,
//!     referrer: Option<String>,
//! }
//!
//! let not_empty = || from_predicate(|s: &String| !s.is_empty(), "empty");
//!
//! let signup = every(vec![
//!     not_empty().with_context("username").focus(|s: &Signup| &s.username).boxed(),
//!     on_each(not_empty())
//!         .with_context("tags")
//!         .focus(|s: &Signup| s.tags.as_slice())
//!         .boxed(),
//!     on_some(not_empty())
//!         .with_context("referrer")
//!         .focus(|s: &Signup| &s.referrer)
//!         .boxed(),
//! ]);
//!
//! let errors = signup.validate(&Signup {
//!     username: String::new(),
//!     tags: vec!["rust".into(), String::new()],
//!     referrer: None,
//! });
//! let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
//! assert_eq!(rendered, vec!["username: empty", "tags: empty"]);
//! ```

mod boxed;
pub mod combinators;
mod constructors;
mod ext;
mod trait_def;

pub use boxed::BoxedValidator;
pub use constructors::{
    any, every, first_of_every, from_fn, from_predicate, from_predicate_self,
    from_predicate_with, none, on_char_count, on_each, on_each_char, on_len, on_some,
};
pub use ext::ValidatorExt;
pub use trait_def::Validator;
