//! Quantifier combinators over predicate sets.
//!
//! Every combinator stores its set once, when the compound predicate is
//! built, and walks it with an early-exit loop on each evaluation.

use smallvec::SmallVec;

use super::{Predicate, TryPredicate};

/// Storage for a predicate set; small sets stay inline.
pub type PredicateSet<P> = SmallVec<[P; 4]>;

/// Returns a predicate that is true when every predicate in the set is true.
///
/// An empty set is vacuously true. Evaluation stops at the first predicate
/// returning `false`.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{Predicate, all, greater_than, is_even};
///
/// let even_and_large = all([is_even(), greater_than(100)]);
/// assert!(even_and_large.test(&102));
/// assert!(!even_and_large.test(&101));
///
/// let anything = all(Vec::<Predicate<i32>>::new());
/// assert!(anything.test(&0));
/// ```
pub fn all<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: PredicateSet<Predicate<T>> = predicates.into_iter().collect();
    tracing::trace!(predicates = predicates.len(), "building all-combinator");
    Predicate::new(move |value: &T| predicates.iter().all(|predicate| predicate.test(value)))
}

/// Returns a predicate that is true when at least one predicate is true.
///
/// An empty set is vacuously false. Evaluation stops at the first predicate
/// returning `true`.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{any, greater_than, is_even};
///
/// let even_or_large = any([is_even(), greater_than(100)]);
/// assert!(even_or_large.test(&4));
/// assert!(even_or_large.test(&101));
/// assert!(!even_or_large.test(&7));
/// ```
pub fn any<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: PredicateSet<Predicate<T>> = predicates.into_iter().collect();
    tracing::trace!(predicates = predicates.len(), "building any-combinator");
    Predicate::new(move |value: &T| predicates.iter().any(|predicate| predicate.test(value)))
}

/// Returns a predicate that is true when no predicate in the set is true.
///
/// Always equal to the negation of [`any`] over the same set. An empty set
/// is vacuously true. Evaluation stops at the first predicate returning
/// `true`, and the result is then `false`.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{greater_than, is_even, none};
///
/// let odd_and_small = none([is_even(), greater_than(100)]);
/// assert!(odd_and_small.test(&7));
/// assert!(!odd_and_small.test(&8));
/// ```
pub fn none<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: PredicateSet<Predicate<T>> = predicates.into_iter().collect();
    tracing::trace!(predicates = predicates.len(), "building none-combinator");
    Predicate::new(move |value: &T| !predicates.iter().any(|predicate| predicate.test(value)))
}

/// Fallible [`all`]: the first `Err` is returned immediately.
///
/// Predicates after a failing one are never evaluated, and errors are not
/// aggregated.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{TryPredicate, try_all};
///
/// let non_empty = TryPredicate::new(|text: &str| Ok::<_, String>(!text.is_empty()));
/// let numeric = TryPredicate::new(|text: &str| {
///     text.parse::<i64>().map(|_| true).map_err(|error| error.to_string())
/// });
///
/// let valid = try_all([non_empty, numeric]);
/// assert_eq!(valid.test("42"), Ok(true));
/// assert_eq!(valid.test(""), Ok(false));
/// assert!(valid.test("x").is_err());
/// ```
pub fn try_all<T, E, I>(predicates: I) -> TryPredicate<T, E>
where
    T: ?Sized + 'static,
    E: 'static,
    I: IntoIterator<Item = TryPredicate<T, E>>,
{
    let predicates: PredicateSet<TryPredicate<T, E>> = predicates.into_iter().collect();
    TryPredicate::new(move |value: &T| {
        for predicate in &predicates {
            if !predicate.test(value)? {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

/// Fallible [`any`]: the first `Err` is returned immediately.
///
/// Evaluation stops at the first `Ok(true)` or the first `Err`, whichever
/// comes first.
///
/// # Type Parameters
///
/// * `T` - The type of the tested value (may be unsized, e.g. `str`)
/// * `E` - The error type shared by every predicate in the set
///
/// # Arguments
///
/// * `predicates` - The predicate set, evaluated left to right
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{TryPredicate, try_any};
///
/// let checked_positive = |limit: i64| {
///     TryPredicate::new(move |n: &i64| {
///         if *n > limit { Err(format!("{n} exceeds {limit}")) } else { Ok(*n > 0) }
///     })
/// };
/// let zero = TryPredicate::new(|n: &i64| Ok::<_, String>(*n == 0));
///
/// let either = try_any([zero, checked_positive(100)]);
/// assert_eq!(either.test(&0), Ok(true));
/// assert_eq!(either.test(&7), Ok(true));
/// assert_eq!(either.test(&-7), Ok(false));
/// assert_eq!(either.test(&101), Err("101 exceeds 100".to_string()));
/// ```
pub fn try_any<T, E, I>(predicates: I) -> TryPredicate<T, E>
where
    T: ?Sized + 'static,
    E: 'static,
    I: IntoIterator<Item = TryPredicate<T, E>>,
{
    let predicates: PredicateSet<TryPredicate<T, E>> = predicates.into_iter().collect();
    TryPredicate::new(move |value: &T| {
        for predicate in &predicates {
            if predicate.test(value)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

/// Fallible [`none`]: the first `Err` is returned immediately.
///
/// `try_none(ps)` is `try_any(ps)` with the `Ok` value negated.
///
/// # Examples
///
/// ```
/// use lambdakit::predicate::{TryPredicate, try_none};
///
/// let blank = TryPredicate::new(|line: &str| Ok::<_, String>(line.trim().is_empty()));
/// let comment = TryPredicate::new(|line: &str| Ok::<_, String>(line.starts_with('#')));
///
/// let is_code = try_none([blank, comment]);
/// assert_eq!(is_code.test("puts 1"), Ok(true));
/// assert_eq!(is_code.test("# note"), Ok(false));
/// assert_eq!(is_code.test("   "), Ok(false));
/// ```
pub fn try_none<T, E, I>(predicates: I) -> TryPredicate<T, E>
where
    T: ?Sized + 'static,
    E: 'static,
    I: IntoIterator<Item = TryPredicate<T, E>>,
{
    let any_of = try_any(predicates);
    TryPredicate::new(move |value: &T| any_of.test(value).map(|found| !found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(result: bool, calls: &Arc<AtomicUsize>) -> Predicate<i32> {
        let calls = Arc::clone(calls);
        Predicate::new(move |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    #[test]
    fn test_vacuous_results() {
        let empty = || Vec::<Predicate<i32>>::new();
        assert!(all(empty()).test(&1));
        assert!(!any(empty()).test(&1));
        assert!(none(empty()).test(&1));
    }

    #[test]
    fn test_all_stops_at_first_false() {
        let calls = Arc::new(AtomicUsize::new(0));
        let compound = all([counting(false, &calls), counting(true, &calls)]);
        assert!(!compound.test(&0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_any_stops_at_first_true() {
        let calls = Arc::new(AtomicUsize::new(0));
        let compound = any([counting(true, &calls), counting(false, &calls)]);
        assert!(compound.test(&0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_none_stops_at_first_true() {
        let calls = Arc::new(AtomicUsize::new(0));
        let compound = none([counting(true, &calls), counting(false, &calls)]);
        assert!(!compound.test(&0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_try_all_propagates_first_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let failing = TryPredicate::new(|_: &i32| Err::<bool, _>("boom"));
        let after = {
            let calls = Arc::clone(&calls);
            TryPredicate::new(move |_: &i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            })
        };
        assert_eq!(try_all([failing, after]).test(&0), Err("boom"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_try_none_negates_try_any() {
        let is_zero = TryPredicate::new(|n: &i32| Ok::<_, ()>(*n == 0));
        let compound = try_none([is_zero]);
        assert_eq!(compound.test(&0), Ok(false));
        assert_eq!(compound.test(&1), Ok(true));
    }
}
