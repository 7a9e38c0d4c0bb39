//! Predicates and quantifier combinators.
//!
//! A predicate is a function returning `true` or `false`. Once predicates are
//! values, the way they are combined can be separated from what each one
//! tests: [`all`], [`any`] and [`none`] turn a predicate set into a single
//! compound predicate.
//!
//! # Overview
//!
//! - [`Predicate`]: a shared test over `&T`
//! - [`TryPredicate`]: a test that may fail with `Err(E)`
//! - [`all`], [`any`], [`none`]: quantifiers over a predicate set
//! - [`try_all`], [`try_any`], [`try_none`]: the fallible counterparts
//! - [`is_even`], [`greater_than`], [`multiple_of`]: predicate factories
//!
//! # Short-circuiting
//!
//! Predicates are evaluated left to right and evaluation stops as soon as the
//! result is known: at the first `false` for `all`, at the first `true` for
//! `any` and `none`. Put cheap or decisive predicates first.
//!
//! # Examples
//!
//! ```
//! use lambdakit::predicate::{all, any, greater_than, is_even, multiple_of, none};
//!
//! let my_predicates = [is_even(), greater_than(100), multiple_of(55)];
//!
//! let all_of = all(my_predicates.clone());
//! let results: Vec<i32> = (0..=1_000).filter(|n| all_of.test(n)).collect();
//! assert_eq!(results, vec![110, 220, 330, 440, 550, 660, 770, 880, 990]);
//!
//! let any_of = any(my_predicates.clone());
//! let results: Vec<i32> = (0..=1_000).filter(|n| any_of.test(n)).take(5).collect();
//! assert_eq!(results, vec![0, 2, 4, 6, 8]);
//!
//! let none_of = none(my_predicates);
//! let results: Vec<i32> = (0..=1_000).filter(|n| none_of.test(n)).take(5).collect();
//! assert_eq!(results, vec![1, 3, 5, 7, 9]);
//! ```

use std::fmt;

use crate::function::{ReferenceCounter, Shareable};

mod combinators;
mod factories;

pub use combinators::{PredicateSet, all, any, none, try_all, try_any, try_none};
pub use factories::{Integer, always, greater_than, is_even, multiple_of, never};

#[cfg(feature = "arc")]
type DynPredicate<T> = dyn Fn(&T) -> bool + Send + Sync;

#[cfg(not(feature = "arc"))]
type DynPredicate<T> = dyn Fn(&T) -> bool;

#[cfg(feature = "arc")]
type DynTryPredicate<T, E> = dyn Fn(&T) -> Result<bool, E> + Send + Sync;

#[cfg(not(feature = "arc"))]
type DynTryPredicate<T, E> = dyn Fn(&T) -> Result<bool, E>;

// =============================================================================
// Predicate
// =============================================================================

/// A shared predicate over values of type `T`.
///
/// The value under test is borrowed, so the same input can be offered to
/// many predicates without cloning it. `T` may be unsized, e.g.
/// `Predicate<str>`.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::Predicate;
///
/// let is_shouting = Predicate::new(|text: &str| text.chars().all(|c| !c.is_lowercase()));
/// assert!(is_shouting.test("HELLO"));
/// assert!(!is_shouting.test("Hello"));
/// ```
pub struct Predicate<T: ?Sized> {
    inner: ReferenceCounter<DynPredicate<T>>,
}

impl<T: ?Sized> Predicate<T> {
    /// Wraps a closure as a shared predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Shareable + 'static,
    {
        Self {
            inner: ReferenceCounter::new(predicate),
        }
    }

    /// Evaluates the predicate against `value`.
    #[inline]
    pub fn test(&self, value: &T) -> bool {
        (self.inner)(value)
    }
}

impl<T: ?Sized + 'static> Predicate<T> {
    /// Returns a predicate that is true when both `self` and `other` are.
    ///
    /// `other` is not evaluated when `self` is false.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) && other.test(value))
    }

    /// Returns a predicate that is true when either `self` or `other` is.
    ///
    /// `other` is not evaluated when `self` is true.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::new(move |value| self.test(value) || other.test(value))
    }

    /// Returns the negation of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdakit::predicate::is_even;
    ///
    /// let is_odd = is_even::<i32>().not();
    /// assert!(is_odd.test(&3));
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(move |value| !self.test(value))
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Predicate")
            .field("input", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TryPredicate
// =============================================================================

/// A shared predicate whose evaluation can fail.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::TryPredicate;
///
/// let parses_positive = TryPredicate::new(|text: &str| {
///     text.parse::<i64>().map(|n| n > 0)
/// });
/// assert_eq!(parses_positive.test("5"), Ok(true));
/// assert!(parses_positive.test("five").is_err());
/// ```
pub struct TryPredicate<T: ?Sized, E> {
    inner: ReferenceCounter<DynTryPredicate<T, E>>,
}

impl<T: ?Sized, E> TryPredicate<T, E> {
    /// Wraps a fallible closure as a shared predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> Result<bool, E> + Shareable + 'static,
    {
        Self {
            inner: ReferenceCounter::new(predicate),
        }
    }

    /// Evaluates the predicate against `value`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped closure returns.
    #[inline]
    pub fn test(&self, value: &T) -> Result<bool, E> {
        (self.inner)(value)
    }
}

impl<T: ?Sized + 'static, E: 'static> From<Predicate<T>> for TryPredicate<T, E> {
    fn from(predicate: Predicate<T>) -> Self {
        Self::new(move |value| Ok(predicate.test(value)))
    }
}

impl<T: ?Sized, E> Clone for TryPredicate<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<T: ?Sized, E> fmt::Debug for TryPredicate<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryPredicate")
            .field("input", &std::any::type_name::<T>())
            .field("error", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}
