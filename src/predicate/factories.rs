//! Predicate factories.
//!
//! `greater_than(100)` and `multiple_of(55)` capture their argument and
//! return the predicate, so the comparison logic lives in one place and only
//! the data differs between predicates.

use super::Predicate;
use crate::function::Shareable;

/// Primitive integer types accepted by [`multiple_of`] and [`is_even`].
pub trait Integer: Copy + PartialEq + Shareable + 'static {
    /// The additive identity.
    const ZERO: Self;

    /// The value two.
    const TWO: Self;

    /// Remainder of `self / divisor` that wraps instead of overflowing, so
    /// `MIN.wrapping_remainder(-1)` is zero.
    ///
    /// # Panics
    ///
    /// Panics when `divisor` is zero.
    fn wrapping_remainder(self, divisor: Self) -> Self;
}

// Primitive type implementations using macro
macro_rules! impl_integer_for_primitives {
    ($($ty:ty),*) => {
        $(
            impl Integer for $ty {
                const ZERO: Self = 0;
                const TWO: Self = 2;

                #[inline]
                fn wrapping_remainder(self, divisor: Self) -> Self {
                    self.wrapping_rem(divisor)
                }
            }
        )*
    };
}

impl_integer_for_primitives!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Returns a predicate that is always true.
///
/// The identity element of [`Predicate::and`].
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{always, greater_than};
///
/// let accept_everything = always::<i32>();
/// assert!(accept_everything.test(&-7));
/// assert!(greater_than(3).and(always()).test(&4));
/// ```
pub fn always<T: ?Sized + 'static>() -> Predicate<T> {
    Predicate::new(|_: &T| true)
}

/// Returns a predicate that is always false.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{greater_than, never};
///
/// assert!(!never::<str>().test("anything"));
/// assert!(greater_than(3).or(never()).test(&4));
/// ```
pub fn never<T: ?Sized + 'static>() -> Predicate<T> {
    Predicate::new(|_: &T| false)
}

/// Returns a predicate that is true for values strictly greater than
/// `threshold`.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::greater_than;
///
/// let greater_than_100 = greater_than(100);
/// assert!(greater_than_100.test(&101));
/// assert!(!greater_than_100.test(&100));
/// ```
pub fn greater_than<T>(threshold: T) -> Predicate<T>
where
    T: PartialOrd + Shareable + 'static,
{
    Predicate::new(move |n: &T| *n > threshold)
}

/// Returns a predicate that is true for multiples of `factor`.
///
/// Zero is a multiple of every factor, and every value is a multiple of
/// `-1` (including `MIN`, where a plain `%` would overflow).
///
/// # Panics
///
/// The returned predicate panics when `factor` is zero.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::multiple_of;
///
/// let is_multiple_of_55 = multiple_of(55);
/// assert!(is_multiple_of_55.test(&110));
/// assert!(!is_multiple_of_55.test(&100));
/// ```
pub fn multiple_of<T>(factor: T) -> Predicate<T>
where
    T: Integer,
{
    Predicate::new(move |n: &T| n.wrapping_remainder(factor) == T::ZERO)
}

/// Returns a predicate that is true for even numbers.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::is_even;
///
/// let is_even = is_even();
/// assert!(is_even.test(&10));
/// assert!(!is_even.test(&11));
/// ```
pub fn is_even<T>() -> Predicate<T>
where
    T: Integer,
{
    multiple_of(T::TWO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(22, true)]
    #[case(23, false)]
    #[case(-4, true)]
    fn test_is_even(#[case] n: i64, #[case] expected: bool) {
        assert_eq!(is_even().test(&n), expected);
    }

    #[rstest]
    #[case(i64::MIN, -1, true)]
    #[case(i64::MAX, -1, true)]
    #[case(i64::MIN, i64::MIN, true)]
    #[case(i64::MIN, 2, true)]
    #[case(i64::MAX, 2, false)]
    #[case(0, i64::MIN, true)]
    #[case(-110, 55, true)]
    #[case(-111, 55, false)]
    fn test_multiple_of_extremes(#[case] n: i64, #[case] factor: i64, #[case] expected: bool) {
        assert_eq!(multiple_of(factor).test(&n), expected);
    }

    #[test]
    fn test_multiple_of_minus_one_at_narrow_minimum() {
        assert!(multiple_of(-1_i8).test(&i8::MIN));
        assert!(multiple_of(-1_i32).test(&i32::MIN));
    }

    #[test]
    fn test_multiple_of_unsigned() {
        assert!(multiple_of(5_u32).test(&u32::MAX));
        assert!(!is_even::<u8>().test(&u8::MAX));
    }

    #[test]
    #[should_panic(expected = "divisor of zero")]
    fn test_multiple_of_zero_factor_panics() {
        let _ = multiple_of(0_i64).test(&10);
    }

    #[test]
    fn test_greater_than_is_strict() {
        let greater_than_two = greater_than(2);
        assert!(greater_than_two.test(&3));
        assert!(!greater_than_two.test(&2));
        assert!(!greater_than_two.test(&1));
    }

    #[test]
    fn test_greater_than_floats() {
        assert!(greater_than(0.5).test(&0.75));
    }

    #[test]
    fn test_always_and_never() {
        assert!(always::<str>().test("anything"));
        assert!(!never::<str>().test("anything"));
    }
}
