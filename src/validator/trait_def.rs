//! Validator trait definition - the foundation of the crate.

/// A pure check that reports every problem it finds with a value.
///
/// `validate` never changes the value. An empty `Vec` means the value is
/// valid; otherwise each element is one violation, in the order the checks
/// ran. Calling it twice on the same value gives the same answer.
///
/// Validators are immutable once built and must be `Send + Sync`, so a
/// composed validator can be shared between threads and invoked
/// concurrently.
///
/// Most validators are built from the constructors in this module
/// ([`from_predicate`](super::from_predicate), [`from_fn`](super::from_fn),
/// ...) and combined with [`ValidatorExt`](super::ValidatorExt) methods or
/// the list combinators [`every`](super::every), [`any`](super::any) and
/// [`first_of_every`](super::first_of_every).
///
/// # Example
///
/// ```rust
/// use weir::validator::Validator;
///
/// struct NotBlank;
///
/// impl Validator<str> for NotBlank {
///     type Error = &'static str;
///
///     fn validate(&self, value: &str) -> Vec<Self::Error> {
///         if value.trim().is_empty() {
///             vec!["must not be blank"]
///         } else {
///             vec![]
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("hello").is_empty());
/// assert_eq!(NotBlank.validate("   "), vec!["must not be blank"]);
/// ```
pub trait Validator<T: ?Sized>: Send + Sync {
    /// The error reported for each violation.
    type Error;

    /// Check the value and report every violation found.
    fn validate(&self, value: &T) -> Vec<Self::Error>;

    /// Shorthand for `self.validate(value).is_empty()`.
    fn is_valid(&self, value: &T) -> bool {
        self.validate(value).is_empty()
    }
}
