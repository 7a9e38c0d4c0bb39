//! Partial application factories.
//!
//! Each factory captures a value when it is called and returns a function
//! that uses it later. `make_multiplier(3)` separates the logic (multiply)
//! from the data (3) instead of writing `double`, `triple` and `quadruple`
//! by hand.

use std::ops::Mul;

use super::{Function, Shareable, TryFunction};
use crate::error::LambdaError;

/// Returns a function that multiplies its input by `factor`.
///
/// `make_multiplier(factor).apply(n) == factor * n`
///
/// # Examples
///
/// ```
/// use lambdakit::function::make_multiplier;
///
/// let tripler = make_multiplier(3);
/// assert_eq!(tripler.apply(123), 369);
///
/// let halver = make_multiplier(0.5);
/// assert_eq!(halver.apply(9.0), 4.5);
/// ```
pub fn make_multiplier<T>(factor: T) -> Function<T, T>
where
    T: Mul<Output = T> + Copy + Shareable + 'static,
{
    Function::new(move |n| factor * n)
}

/// Returns a function that raises its input to `power`.
///
/// Fractional powers are allowed, so `raise_to(0.5)` is a square root.
///
/// # Examples
///
/// ```
/// use lambdakit::function::raise_to;
///
/// let square_root = raise_to(0.5);
/// assert!((square_root.apply(9.0) - 3.0).abs() < 1e-9);
/// ```
pub fn raise_to(power: f64) -> Function<f64, f64> {
    Function::new(move |n: f64| n.powf(power))
}

/// Returns a function that raises an integer to `exponent`.
///
/// # Panics
///
/// The returned function panics on overflow in debug builds, like
/// [`i64::pow`].
///
/// # Examples
///
/// ```
/// use lambdakit::function::power_of;
///
/// let squarer = power_of(2);
/// let cuber = power_of(3);
/// assert_eq!(squarer.apply(4), 16);
/// assert_eq!(cuber.apply(3), 27);
/// ```
pub fn power_of(exponent: u32) -> Function<i64, i64> {
    Function::new(move |n: i64| n.pow(exponent))
}

/// Returns a deferred computation of `1 / divisor`.
///
/// Nothing is evaluated until the returned function is applied; a zero
/// divisor is reported as [`LambdaError::DivisionByZero`] at that point.
///
/// # Examples
///
/// ```
/// use lambdakit::LambdaError;
/// use lambdakit::function::dividing_by;
///
/// assert_eq!(dividing_by(1).apply(()), Ok(1));
/// assert_eq!(dividing_by(0).apply(()), Err(LambdaError::DivisionByZero));
/// ```
pub fn dividing_by(divisor: i64) -> TryFunction<(), i64, LambdaError> {
    Function::new(move |()| 1_i64.checked_div(divisor).ok_or(LambdaError::DivisionByZero))
}
