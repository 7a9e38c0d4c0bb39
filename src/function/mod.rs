//! Shared unary function values.
//!
//! A closure's type is unique and unnameable, which makes it awkward to keep
//! closures in a `Vec`, in a map, or in a struct field. [`Function<A, B>`]
//! erases the closure type behind a reference-counted `dyn Fn`, so function
//! values can be stored, cloned and passed around like any other value.
//!
//! # Overview
//!
//! - [`Function`]: a shared callable taking one `A` and producing one `B`
//! - [`TryFunction`]: a `Function` whose fault is expressed as `Err(E)`
//! - [`make_multiplier`], [`raise_to`], [`power_of`], [`dividing_by`]:
//!   partial application factories that capture a value up front
//! - [`partial`], [`curry2`], [`curry3`], [`flip`]: reshaping multi-argument
//!   functions into single-argument ones
//!
//! # Examples
//!
//! ```
//! use lambdakit::function::{Function, make_multiplier};
//!
//! let double = Function::new(|n: i32| 2 * n);
//! assert_eq!(double.apply(12), 24);
//!
//! // The factor is captured when the function is created.
//! let quadrupler = make_multiplier(4);
//! assert_eq!(quadrupler.apply(8), 32);
//!
//! let quadrupled: Vec<i32> = [1, 2, 3].into_iter().map(quadrupler.as_fn()).collect();
//! assert_eq!(quadrupled, vec![4, 8, 12]);
//! ```
//!
//! # Thread Safety
//!
//! Function values are backed by `Rc` by default. With the `arc` feature they
//! are backed by `Arc`, every wrapped closure must be `Send + Sync`, and the
//! function values themselves become `Send + Sync`.

use std::fmt;

mod curry;
mod partial;

pub use curry::{curry2, curry3, flip, partial};
pub use partial::{dividing_by, make_multiplier, power_of, raise_to};

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// `std::sync::Arc` when the `arc` feature is enabled, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Marker for values that may be captured by a shared function.
///
/// With the `arc` feature this requires `Send + Sync`; otherwise every type
/// qualifies.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: ?Sized + Send + Sync> Shareable for T {}

/// Marker for values that may be captured by a shared function.
///
/// With the `arc` feature this requires `Send + Sync`; otherwise every type
/// qualifies.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

#[cfg(feature = "arc")]
type DynFunction<A, B> = dyn Fn(A) -> B + Send + Sync;

#[cfg(not(feature = "arc"))]
type DynFunction<A, B> = dyn Fn(A) -> B;

// =============================================================================
// Function
// =============================================================================

/// A shared unary function value.
///
/// Cloning a `Function` is cheap: the wrapped closure is reference counted,
/// not copied. The closure is never mutated after creation.
///
/// # Examples
///
/// ```
/// use lambdakit::function::Function;
///
/// let is_even = Function::new(|n: i32| n % 2 == 0);
/// assert!(is_even.apply(10));
/// assert!(!is_even.apply(11));
///
/// let shared = is_even.clone();
/// assert!(shared.apply(22));
/// ```
pub struct Function<A, B> {
    inner: ReferenceCounter<DynFunction<A, B>>,
}

/// A unary function that reports its fault as `Err(E)`.
pub type TryFunction<A, B, E> = Function<A, Result<B, E>>;

impl<A, B> Function<A, B> {
    /// Wraps a closure (or function item) as a shared function value.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Shareable + 'static,
    {
        Self {
            inner: ReferenceCounter::new(function),
        }
    }

    /// Calls the function with `input`.
    #[inline]
    pub fn apply(&self, input: A) -> B {
        (self.inner)(input)
    }

    /// Borrows the function as a plain closure, e.g. for `Iterator::map`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdakit::function::make_multiplier;
    ///
    /// let tripler = make_multiplier(3);
    /// let tripled: Vec<i32> = vec![1, 2, 3].into_iter().map(tripler.as_fn()).collect();
    /// assert_eq!(tripled, vec![3, 6, 9]);
    /// ```
    pub fn as_fn(&self) -> impl Fn(A) -> B + '_ {
        move |input| self.apply(input)
    }

    /// Returns `true` when both values share the same underlying closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A: 'static, B: 'static> Function<A, B> {
    /// Composes `self` with `next`, applying `self` first.
    ///
    /// `f.then(g).apply(x) == g.apply(f.apply(x))`
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdakit::function::{make_multiplier, power_of};
    ///
    /// let double_then_square = make_multiplier(2).then(power_of(2));
    /// assert_eq!(double_then_square.apply(3), 36);
    /// ```
    #[must_use]
    pub fn then<C: 'static>(self, next: Function<B, C>) -> Function<A, C> {
        Function::new(move |input| next.apply(self.apply(input)))
    }
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("input", &std::any::type_name::<A>())
            .field("output", &std::any::type_name::<B>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_calls_wrapped_closure() {
        let always_true = Function::new(|(): ()| true);
        assert!(always_true.apply(()));
    }

    #[test]
    fn test_clone_shares_closure() {
        let double = Function::new(|n: i32| 2 * n);
        let copy = double.clone();
        assert!(double.ptr_eq(&copy));
        assert_eq!(copy.apply(12), 24);
    }

    #[test]
    fn test_distinct_functions_are_not_ptr_eq() {
        let first = Function::new(|n: i32| n);
        let second = Function::new(|n: i32| n);
        assert!(!first.ptr_eq(&second));
    }

    #[test]
    fn test_then_applies_left_to_right() {
        let add_one = Function::new(|n: i32| n + 1);
        let double = Function::new(|n: i32| n * 2);
        assert_eq!(add_one.clone().then(double.clone()).apply(5), 12);
        assert_eq!(double.then(add_one).apply(5), 11);
    }

    #[test]
    fn test_then_changes_type() {
        let to_string = Function::new(|n: i32| n.to_string());
        let length = Function::new(|text: String| text.len());
        assert_eq!(to_string.then(length).apply(12345), 5);
    }

    #[test]
    fn test_closure_captures_value_at_creation() {
        let n = 15;
        let show = Function::new(move |(): ()| format!("{n}"));
        assert_eq!(show.apply(()), "15");
    }

    #[test]
    fn test_debug_names_types() {
        let double = Function::new(|n: i32| 2 * n);
        let rendered = format!("{double:?}");
        assert!(rendered.starts_with("Function"));
        assert!(rendered.contains("i32"));
    }
}
