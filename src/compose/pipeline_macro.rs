//! The `pipeline!` macro for left-to-right composition.
//!
//! [`chain`](crate::compose::chain) needs every stage to share one type
//! because the stages live in a list. `pipeline!` composes at compile time
//! instead, so each stage may change the type flowing through it.

/// Composes functions from left to right into a single closure.
///
/// `pipeline!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `pipeline!()` - The identity function
/// - `pipeline!(f)` - Returns `f` unchanged
/// - `pipeline!(f, g, ...)` - Returns `|x| ...(g(f(x)))`
///
/// # Examples
///
/// ```
/// use lambdakit::pipeline;
///
/// let double = |n: i32| n * 2;
/// let square = |n: i32| n * n;
/// let double_then_square = pipeline!(double, square);
/// assert_eq!(double_then_square(3), 36);
/// ```
///
/// Stages may change the type:
///
/// ```
/// use lambdakit::pipeline;
///
/// let lines = |text: &str| text.lines().map(str::to_owned).collect::<Vec<_>>();
/// let first = |lines: Vec<String>| lines.into_iter().next();
/// let first_line = pipeline!(lines, first);
/// assert_eq!(first_line("#!/usr/bin/env ruby\nputs 1"), Some("#!/usr/bin/env ruby".to_string()));
/// ```
///
/// The empty pipeline is the identity:
///
/// ```
/// use lambdakit::pipeline;
///
/// assert_eq!(pipeline!()(7), 7);
/// ```
#[macro_export]
macro_rules! pipeline {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::pipeline!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
