#![cfg(feature = "compose")]
//! Property-based tests for transform chain and partial application laws.
//!
//! ## Partial Application Laws
//! - **Multiplier**: `make_multiplier(factor).apply(n) == factor * n`
//! - **Curry Equivalence**: `curry2(f).apply(a).apply(b) == f(a, b)`
//!
//! ## Chain Laws
//! - **Left Fold**: `chain([f1, ..., fk]).apply(x) == fk(...f1(x))`
//! - **Empty Identity**: `chain([]).apply(x) == x`
//! - **Associativity**: `chain([chain([f, g]), h]) == chain([f, chain([g, h])])`
//! - **Pipeline Consistency**: `pipeline!(f, g)(x) == chain([f, g]).apply(x)`

use lambdakit::compose::chain;
use lambdakit::function::{Function, curry2, make_multiplier};
use lambdakit::pipeline;
use proptest::prelude::*;

fn offset(amount: i64) -> Function<i64, i64> {
    Function::new(move |n: i64| n.wrapping_add(amount))
}

fn scale(factor: i64) -> Function<i64, i64> {
    Function::new(move |n: i64| n.wrapping_mul(factor))
}

// =============================================================================
// Partial Application Laws
// =============================================================================

proptest! {
    /// make_multiplier(factor)(n) == factor * n
    #[test]
    fn prop_make_multiplier(factor in -10_000_i64..10_000, n in -10_000_i64..10_000) {
        prop_assert_eq!(make_multiplier(factor).apply(n), factor * n);
    }

    /// make_multiplier over floats
    #[test]
    fn prop_make_multiplier_floats(factor in -1.0e6_f64..1.0e6, n in -1.0e6_f64..1.0e6) {
        prop_assert_eq!(make_multiplier(factor).apply(n), factor * n);
    }

    /// curry2(f)(a)(b) == f(a, b)
    #[test]
    fn prop_curry2_equivalence(a in any::<i32>(), b in any::<i32>()) {
        let function = |x: i32, y: i32| x.wrapping_sub(y);
        prop_assert_eq!(curry2(function).apply(a).apply(b), function(a, b));
    }
}

// =============================================================================
// Chain Laws
// =============================================================================

proptest! {
    /// chain([]) == identity
    #[test]
    fn prop_empty_chain_identity(x in any::<i64>()) {
        let empty: Vec<Function<i64, i64>> = Vec::new();
        prop_assert_eq!(chain(empty).apply(x), x);
    }

    /// chain(fs)(x) equals a manual left fold over fs
    #[test]
    fn prop_chain_is_left_fold(
        x in any::<i64>(),
        amounts in prop::collection::vec((any::<i64>(), any::<bool>()), 0..16),
    ) {
        let stages: Vec<Function<i64, i64>> = amounts
            .iter()
            .map(|&(amount, use_offset)| if use_offset { offset(amount) } else { scale(amount) })
            .collect();

        let mut expected = x;
        for stage in &stages {
            expected = stage.apply(expected);
        }

        prop_assert_eq!(chain(stages).apply(x), expected);
    }

    /// Associativity: grouping of stages does not matter
    #[test]
    fn prop_chain_associativity(
        x in any::<i64>(),
        a in any::<i64>(),
        b in any::<i64>(),
        c in any::<i64>(),
    ) {
        let left = chain([chain([offset(a), scale(b)]), offset(c)]);
        let right = chain([offset(a), chain([scale(b), offset(c)])]);
        prop_assert_eq!(left.apply(x), right.apply(x));
    }

    /// pipeline!(f, g)(x) == chain([f, g]).apply(x)
    #[test]
    fn prop_pipeline_chain_consistency(x in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let first = offset(a);
        let second = scale(b);
        let piped = pipeline!(first.as_fn(), second.as_fn());
        prop_assert_eq!(piped(x), chain([first.clone(), second.clone()]).apply(x));
    }
}
