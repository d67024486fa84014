//! Concrete validator types returned by constructors and combinators.
//!
//! Each combinator is a small struct holding its parts; nothing is boxed
//! unless [`ValidatorExt::boxed`](crate::validator::ValidatorExt::boxed) is
//! called. Most code names these types only through `impl Validator<..>`.

mod any;
mod context;
mod every;
mod first_of_every;
mod from_fn;
mod from_predicate;
mod map_error;
mod map_value;
mod no_errors;
mod project;
mod set_error;

pub use any::{Any, Or};
pub use context::{AddContext, WithContext};
pub use every::{And, Every};
pub use first_of_every::{FirstOfEvery, Then};
pub use from_fn::FromFn;
pub use from_predicate::{FromPredicate, FromPredicateSelf, FromPredicateWith};
pub use map_error::MapError;
pub use map_value::{Focus, MapFilterValue, MapValue};
pub use no_errors::NoErrors;
pub use project::{OnCharCount, OnEach, OnEachChar, OnLen, OnSome};
pub use set_error::SetError;
