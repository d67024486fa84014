//! The `Predicate` trait and its logical combinators

/// A pure yes/no question about a value of type `T`.
///
/// Implemented for every `Fn(&T) -> bool + Send + Sync`, so closures and
/// plain functions can be used directly.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Logical combinators for predicates.
///
/// Every method returns a concrete type, so chains compile down to plain
/// boolean expressions.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True when both predicates hold. `other` is skipped if `self` fails.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate holds. `other` is skipped if `self` holds.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Both predicates must hold.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Either predicate must hold.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// The predicate must not hold.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(n: &i32) -> bool {
        *n > 0
    }

    #[test]
    fn test_fn_item_is_predicate() {
        assert!(positive.check(&1));
        assert!(!positive.check(&0));
    }

    #[test]
    fn test_and_short_circuits() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let counted = |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        let p = positive.and(counted);

        assert!(!p.check(&-1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(p.check(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_or() {
        let p = (|n: &i32| *n < -10).or(|n: &i32| *n > 10);
        assert!(p.check(&-11));
        assert!(p.check(&11));
        assert!(!p.check(&0));
    }

    #[test]
    fn test_not() {
        let p = positive.not();
        assert!(p.check(&0));
        assert!(!p.check(&3));
    }

    #[test]
    fn test_str_predicate() {
        let has_at = |s: &str| s.contains('@');
        assert!(has_at.check("a@b"));
        assert!(!has_at.not().check("a@b"));
    }
}
