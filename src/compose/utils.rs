//! Trivial building blocks for transform chains.

/// Returns the value unchanged.
///
/// An empty transform chain behaves exactly like this function.
///
/// # Examples
///
/// ```
/// use lambdakit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and always returns `value`.
///
/// # Examples
///
/// ```
/// use lambdakit::compose::constant;
///
/// let always_true = constant::<_, i32>(true);
/// assert!(always_true(0));
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_moves_owned_value() {
        let owned = String::from("owned");
        assert_eq!(identity(owned), "owned");
    }

    #[test]
    fn test_constant_is_reusable() {
        let always_false = constant::<_, ()>(false);
        for _ in 0..3 {
            assert!(!always_false(()));
        }
    }
}
