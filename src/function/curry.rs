//! Currying and argument reshaping for multi-argument functions.
//!
//! Currying is like partial application, but instead of fixing arguments
//! up front it turns `f(a, b)` into `f(a)(b)`: one argument at a time, each
//! step producing a new [`Function`]. Every intermediate function can be
//! reused, so captured arguments are cloned on each call.

use super::{Function, ReferenceCounter, Shareable};

/// Fixes the first argument of a binary function.
///
/// `partial(f, a).apply(b) == f(a, b)`
///
/// # Examples
///
/// ```
/// use lambdakit::function::partial;
///
/// let greater_than = |x: i32, y: i32| x > y;
/// let three_greater_than = partial(greater_than, 3);
/// assert!(three_greater_than.apply(2));
/// assert!(!three_greater_than.apply(3));
/// ```
pub fn partial<A, B, C, F>(function: F, first: A) -> Function<B, C>
where
    A: Clone + Shareable + 'static,
    F: Fn(A, B) -> C + Shareable + 'static,
{
    Function::new(move |second| function(first.clone(), second))
}

/// Converts a 2-argument function into curried form.
///
/// `curry2(f).apply(a).apply(b) == f(a, b)`
///
/// # Examples
///
/// ```
/// use lambdakit::function::curry2;
///
/// let multiply_2_numbers = |x: i32, y: i32| x * y;
/// let curried = curry2(multiply_2_numbers);
///
/// let tripler = curried.apply(3);
/// assert_eq!(tripler.apply(7), 21);
///
/// // The curried function can be applied again with a different argument.
/// let doubler = curried.apply(2);
/// assert_eq!(doubler.apply(7), 14);
/// ```
pub fn curry2<A, B, C, F>(function: F) -> Function<A, Function<B, C>>
where
    A: Clone + Shareable + 'static,
    F: Fn(A, B) -> C + Shareable + 'static,
{
    let function = ReferenceCounter::new(function);
    Function::new(move |first: A| {
        let function = ReferenceCounter::clone(&function);
        Function::new(move |second| function(first.clone(), second))
    })
}

/// Converts a 3-argument function into curried form.
///
/// `curry3(f).apply(a).apply(b).apply(c) == f(a, b, c)`
///
/// # Examples
///
/// ```
/// use lambdakit::function::curry3;
///
/// let volume = |width: f64, height: f64, depth: f64| width * height * depth;
/// let with_width = curry3(volume).apply(2.0);
/// let with_width_height = with_width.apply(3.0);
/// assert!((with_width_height.apply(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
pub fn curry3<A, B, C, D, F>(function: F) -> Function<A, Function<B, Function<C, D>>>
where
    A: Clone + Shareable + 'static,
    B: Clone + Shareable + 'static,
    F: Fn(A, B, C) -> D + Shareable + 'static,
{
    let function = ReferenceCounter::new(function);
    Function::new(move |first: A| {
        let function = ReferenceCounter::clone(&function);
        Function::new(move |second: B| {
            let function = ReferenceCounter::clone(&function);
            let first = first.clone();
            Function::new(move |third| function(first.clone(), second.clone(), third))
        })
    })
}

/// Swaps the arguments of a binary function.
///
/// Useful before [`partial`] when the argument to fix is the second one.
///
/// # Examples
///
/// ```
/// use lambdakit::function::{flip, partial};
///
/// let greater_than = |x: i32, y: i32| x > y;
/// let greater_than_100 = partial(flip(greater_than), 100);
/// assert!(greater_than_100.apply(101));
/// assert!(!greater_than_100.apply(100));
/// ```
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
