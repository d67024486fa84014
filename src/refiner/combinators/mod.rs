//! Concrete refiner types returned by constructors and combinators.

mod and_then;
mod constant;
mod lift;
mod map;
mod or;

pub use and_then::{AndThen, Ensure};
pub use constant::{Fail, Reject, Succeed};
pub use lift::{FromFn, FromMapping, FromResult, FromValidator, Identity};
pub use map::{MapError, MapInput, MapOutput};
pub use or::{Any, Or, Zip};
